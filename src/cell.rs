use crate::coord::{Coordinate, LatLng};
use crate::error::MaidenheadError;
use crate::geom::create_cell_rect;
use crate::index::{cell_size, latlng_to_locator, locator_to_latlng, normalize_locator};
use geo_types::{Point, Polygon, Rect};

/// A single grid cell in the Maidenhead locator system.
///
/// Each `LocatorCell` carries its canonical locator string, the center point of
/// the cell in WGS84 degrees (x = longitude, y = latitude) and its precision.
///
/// # Example
///
/// ```
/// use maidenhead_rs::LocatorCell;
///
/// # fn main() -> Result<(), maidenhead_rs::MaidenheadError> {
/// // (lng, lat) tuple
/// let cell = LocatorCell::from_latlng(&(21.0122, 52.2297), 6)?;
/// assert_eq!(cell.id, "KO02mf");
///
/// // Convert the cell to a polygon for GIS operations
/// let polygon = cell.to_polygon();
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LocatorCell {
    /// Canonical locator (uppercase field, lowercase subsquare)
    pub id: String,
    /// Center of the cell, x = longitude, y = latitude
    pub center: Point<f64>,
}

impl LocatorCell {
    /// Create a LocatorCell from any coordinate in `(lng, lat)` order.
    pub fn from_latlng(coord: &impl Coordinate, precision: i32) -> Result<Self, MaidenheadError> {
        let id = latlng_to_locator(coord.lat(), coord.lng(), precision)?;
        Self::from_locator(&id)
    }

    /// Create a LocatorCell from a locator string.
    ///
    /// # Example
    /// ```
    /// use maidenhead_rs::LocatorCell;
    ///
    /// # fn main() -> Result<(), maidenhead_rs::MaidenheadError> {
    /// let cell = LocatorCell::from_locator("io91wm")?;
    /// assert_eq!(cell.id, "IO91wm");
    /// assert_eq!(cell.precision(), 6);
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_locator(locator: &str) -> Result<Self, MaidenheadError> {
        let id = normalize_locator(locator)?;
        let center = locator_to_latlng(&id)?;

        Ok(Self {
            id,
            center: center.into(),
        })
    }

    /// Number of characters in the locator (2, 4, 6 or 8).
    pub fn precision(&self) -> usize {
        self.id.len()
    }

    /// Latitude of the cell center.
    pub fn lat(&self) -> f64 {
        self.center.y()
    }

    /// Longitude of the cell center.
    pub fn lng(&self) -> f64 {
        self.center.x()
    }

    pub fn latlng(&self) -> LatLng {
        LatLng::from(self.center)
    }

    /// Longitude/latitude span of this cell in degrees.
    pub fn size(&self) -> (f64, f64) {
        cell_size(self.precision())
    }

    pub fn to_rect(&self) -> Rect<f64> {
        create_cell_rect(self.lng(), self.lat(), self.size())
    }

    /// Converts this cell to a closed rectangular polygon,
    /// suitable for spatial operations or GeoJSON export.
    pub fn to_polygon(&self) -> Polygon<f64> {
        self.to_rect().to_polygon()
    }

    /// The enclosing cell one level up, or `None` for a field.
    pub fn parent(&self) -> Option<Self> {
        if self.precision() <= 2 {
            return None;
        }
        Self::from_locator(&self.id[..self.precision() - 2]).ok()
    }

    /// Returns true if the coordinate falls in this cell.
    pub fn contains(&self, coord: &impl Coordinate) -> bool {
        latlng_to_locator(coord.lat(), coord.lng(), self.precision() as i32)
            .map(|id| id == self.id)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_latlng_tuple() -> Result<(), MaidenheadError> {
        let cell = LocatorCell::from_latlng(&(21.0122, 52.2297), 6)?;

        assert_eq!(cell.id, "KO02mf");
        assert_eq!(cell.precision(), 6);
        assert!((cell.lat() - 52.22916666666667).abs() < 1e-12);
        assert!((cell.lng() - 21.041666666666668).abs() < 1e-12);
        Ok(())
    }

    #[test]
    fn test_tuple_and_point_same_result() -> Result<(), MaidenheadError> {
        let from_tuple = LocatorCell::from_latlng(&(-87.6298, 41.8781), 6)?;
        let from_point = LocatorCell::from_latlng(&Point::new(-87.6298, 41.8781), 6)?;
        let from_latlng = LocatorCell::from_latlng(&LatLng::new(41.8781, -87.6298), 6)?;

        assert_eq!(from_tuple, from_point);
        assert_eq!(from_tuple, from_latlng);
        assert_eq!(from_tuple.id, "EN61ev");
        Ok(())
    }

    #[test]
    fn test_from_locator_normalizes_case() -> Result<(), MaidenheadError> {
        let cell = LocatorCell::from_locator("ko02MF")?;
        assert_eq!(cell.id, "KO02mf");
        Ok(())
    }

    #[test]
    fn test_from_locator_invalid() {
        assert!(matches!(
            LocatorCell::from_locator("ABCDE"),
            Err(MaidenheadError::InvalidLocator(_))
        ));
    }

    #[test]
    fn test_to_polygon() -> Result<(), MaidenheadError> {
        let cell = LocatorCell::from_locator("IO91")?;
        let polygon = cell.to_polygon();
        assert_eq!(polygon.exterior().coords().count(), 5);

        let rect = cell.to_rect();
        assert_eq!(rect.min().x, -2.0);
        assert_eq!(rect.max().x, 0.0);
        assert_eq!(rect.min().y, 51.0);
        assert_eq!(rect.max().y, 52.0);
        Ok(())
    }

    #[test]
    fn test_parent_chain() -> Result<(), MaidenheadError> {
        let cell = LocatorCell::from_locator("KO02mf45")?;

        let sub = cell.parent().ok_or(MaidenheadError::InvalidLocator("parent".into()))?;
        assert_eq!(sub.id, "KO02mf");
        let square = sub.parent().ok_or(MaidenheadError::InvalidLocator("parent".into()))?;
        assert_eq!(square.id, "KO02");
        let field = square.parent().ok_or(MaidenheadError::InvalidLocator("parent".into()))?;
        assert_eq!(field.id, "KO");
        assert!(field.parent().is_none());
        Ok(())
    }

    #[test]
    fn test_contains() -> Result<(), MaidenheadError> {
        let cell = LocatorCell::from_locator("KO02mf")?;

        assert!(cell.contains(&(21.0122, 52.2297)));
        assert!(cell.contains(&cell.center));
        assert!(!cell.contains(&(-87.6298, 41.8781)));
        Ok(())
    }

    #[test]
    fn test_same_point_same_cell() -> Result<(), MaidenheadError> {
        let cell1 = LocatorCell::from_latlng(&(21.0122, 52.2297), 4)?;
        let cell2 = LocatorCell::from_latlng(&(cell1.lng() + 0.5, cell1.lat() + 0.25), 4)?;
        assert_eq!(cell1.id, cell2.id);
        Ok(())
    }
}

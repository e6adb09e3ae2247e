use crate::error::MaidenheadError;
use crate::index::{cell_size, locator_to_latlng};
use geo_types::{Polygon, Rect, coord};

/// Builds the rectangle of a grid cell from its center and `(lng, lat)` span.
pub fn create_cell_rect(center_lng: f64, center_lat: f64, size: (f64, f64)) -> Rect<f64> {
    let (half_lng, half_lat) = (size.0 / 2.0, size.1 / 2.0);
    Rect::new(
        coord! { x: center_lng - half_lng, y: center_lat - half_lat },
        coord! { x: center_lng + half_lng, y: center_lat + half_lat },
    )
}

/// Returns the rectangle addressed by a locator.
///
/// The rectangle is rebuilt from the decoded center, so its edges are exactly
/// those of the cell the locator string names.
pub fn locator_to_rect(locator: &str) -> Result<Rect<f64>, MaidenheadError> {
    let center = locator_to_latlng(locator)?;
    Ok(create_cell_rect(
        center.lng,
        center.lat,
        cell_size(locator.trim().len()),
    ))
}

/// Returns the closed polygon ring of the cell addressed by a locator.
pub fn locator_to_polygon(locator: &str) -> Result<Polygon<f64>, MaidenheadError> {
    locator_to_rect(locator).map(|rect| rect.to_polygon())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locator_to_rect_square() -> Result<(), MaidenheadError> {
        let rect = locator_to_rect("IO80")?;
        assert_eq!(rect.min().x, -4.0);
        assert_eq!(rect.max().x, -2.0);
        assert_eq!(rect.min().y, 50.0);
        assert_eq!(rect.max().y, 51.0);
        Ok(())
    }

    #[test]
    fn test_locator_to_rect_nests_in_parent() -> Result<(), MaidenheadError> {
        let parent = locator_to_rect("KO02")?;
        let child = locator_to_rect("KO02mf")?;
        let grandchild = locator_to_rect("KO02mf45")?;

        assert!(child.min().x >= parent.min().x && child.max().x <= parent.max().x);
        assert!(child.min().y >= parent.min().y && child.max().y <= parent.max().y);
        assert!(grandchild.min().x >= child.min().x - 1e-9);
        assert!(grandchild.max().x <= child.max().x + 1e-9);
        assert!(grandchild.min().y >= child.min().y - 1e-9);
        assert!(grandchild.max().y <= child.max().y + 1e-9);
        Ok(())
    }

    #[test]
    fn test_locator_to_polygon_is_closed() -> Result<(), MaidenheadError> {
        let polygon = locator_to_polygon("JO")?;
        let exterior = polygon.exterior();
        assert_eq!(exterior.coords().count(), 5);
        assert_eq!(exterior.0[0], exterior.0[4]);
        Ok(())
    }

    #[test]
    fn test_locator_to_rect_invalid() {
        assert!(locator_to_rect("ABCDE").is_err());
    }
}

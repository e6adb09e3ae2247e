use geo_types::Point;
use serde::{Deserialize, Serialize};

/// Trait for types that can provide longitude/latitude coordinates.
///
/// Implemented for `(f64, f64)` tuples in `(lng, lat)` order, `geo_types::Point<f64>`
/// and [`LatLng`]. This allows functions to accept any of them.
pub trait Coordinate {
    /// Returns the longitude (x).
    fn lng(&self) -> f64;
    /// Returns the latitude (y).
    fn lat(&self) -> f64;
}

impl Coordinate for (f64, f64) {
    fn lng(&self) -> f64 {
        self.0
    }
    fn lat(&self) -> f64 {
        self.1
    }
}

impl Coordinate for Point<f64> {
    fn lng(&self) -> f64 {
        self.x()
    }
    fn lat(&self) -> f64 {
        self.y()
    }
}

/// A latitude/longitude pair in degrees.
///
/// Serializes as `{"lat": .., "lng": ..}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl Coordinate for LatLng {
    fn lng(&self) -> f64 {
        self.lng
    }
    fn lat(&self) -> f64 {
        self.lat
    }
}

impl From<LatLng> for Point<f64> {
    fn from(value: LatLng) -> Self {
        Point::new(value.lng, value.lat)
    }
}

impl From<Point<f64>> for LatLng {
    fn from(value: Point<f64>) -> Self {
        LatLng::new(value.y(), value.x())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_trait_tuple() {
        let tuple = (21.0, 52.0);
        assert_eq!(tuple.lng(), 21.0);
        assert_eq!(tuple.lat(), 52.0);
    }

    #[test]
    fn test_coordinate_trait_point() {
        let point = Point::new(21.0, 52.0);
        assert_eq!(point.lng(), 21.0);
        assert_eq!(point.lat(), 52.0);
    }

    #[test]
    fn test_latlng_point_conversion() {
        let ll = LatLng::new(51.5, -1.0);
        let pt: Point<f64> = ll.into();
        assert_eq!(pt.x(), -1.0);
        assert_eq!(pt.y(), 51.5);
        assert_eq!(LatLng::from(pt), ll);
    }

    #[test]
    fn test_latlng_serializes_as_object() -> Result<(), serde_json::Error> {
        let json = serde_json::to_string(&LatLng::new(51.5, -1.0))?;
        assert_eq!(json, r#"{"lat":51.5,"lng":-1.0}"#);

        let back: LatLng = serde_json::from_str(r#"{"lat":-33.5,"lng":151}"#)?;
        assert_eq!(back, LatLng::new(-33.5, 151.0));
        Ok(())
    }
}

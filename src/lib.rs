//! # maidenhead-rs
//!
//! Maidenhead (QTH) grid locators: encode coordinates, decode locators to cell
//! centers and enumerate the locators covering a region.
//!
//! ### 1. Codec - Coordinates and Locators
//!
//! ```
//! use maidenhead_rs::{decode, encode};
//!
//! # fn main() -> Result<(), maidenhead_rs::MaidenheadError> {
//! assert_eq!(encode(52.2297, 21.0122, 6)?, "KO02mf");
//!
//! let center = decode("IO91")?;
//! assert_eq!((center.lat, center.lng), (51.5, -1.0));
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `LocatorGrid` - Region Coverage
//!
//! ```
//! use maidenhead_rs::LocatorGrid;
//! use geo_types::polygon;
//!
//! # fn main() -> Result<(), maidenhead_rs::MaidenheadError> {
//! let region = polygon![
//!     (x: -5.0, y: 50.0),
//!     (x: -5.0, y: 51.0),
//!     (x: -4.0, y: 51.0),
//!     (x: -4.0, y: 50.0),
//! ];
//!
//! let grid = LocatorGrid::builder()
//!     .precision(4)
//!     .region(region)
//!     .build()?;
//!
//! assert_eq!(grid.locators(), vec!["IO80", "IO81"]);
//! # Ok(())
//! # }
//! ```
//!
//! ### 3. `CsvToLocator` - CSV File Conversion
//!
//! ```no_run
//! use maidenhead_rs::{CsvLocatorConfig, CsvToLocator, GeometryFormat};
//!
//! let config = CsvLocatorConfig::from_coords("Longitude", "Latitude", 6)
//!     .with_cell_geometry(GeometryFormat::Wkt);
//!
//! "stations.csv".to_locator_csv("output.csv", &config).unwrap();
//! ```
//!

pub mod cell;
pub mod coord;
pub mod coverage;
pub mod error;
pub mod geom;
pub mod grid;
pub mod index;
pub mod io;

pub use cell::LocatorCell;
pub use coord::{Coordinate, LatLng};
pub use coverage::{CoverageRegion, coverage, coverage_par, coverage_step};
pub use error::MaidenheadError;
pub use geom::{
    create_cell_rect, first_point, locator_to_polygon, locator_to_rect, parse_geojson,
    parse_geometry, parse_wkt, swap_lat_lng,
};
pub use grid::{LocatorGrid, LocatorGridBuilder};
pub use index::{
    EXTENDED_SIZE, FIELD_SIZE, MAX_PRECISION, SQUARE_SIZE, SUBSQUARE_SIZE, cell_size,
    is_valid_locator, latlng_to_locator, locator_to_latlng, normalize_locator,
};
pub use io::{
    CoordinateSource, CsvLocatorConfig, CsvToLocator, GeometryFormat, LocatorCellsToArrow,
    csv_to_locator_csv, write_locator_csv,
};

pub use index::latlng_to_locator as encode;
pub use index::locator_to_latlng as decode;

pub use geo_types;
pub use geoarrow_array;
pub use geoarrow_schema;

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::polygon;

    #[test]
    fn test_end_to_end_workflow() -> Result<(), MaidenheadError> {
        let locator = encode(51.5074, -0.1278, 6)?;
        let cell = LocatorCell::from_locator(&locator)?;
        assert!(cell.contains(&(-0.1278, 51.5074)));

        let region = cell.to_polygon();
        let grid = LocatorGrid::from_region(&region, 6)?;

        assert!(grid.get_cell_at(&cell.center).is_some());
        for covering in grid.iter() {
            assert_eq!(covering.precision(), 6);
        }
        Ok(())
    }

    #[test]
    fn test_reference_vectors() -> Result<(), MaidenheadError> {
        assert_eq!(encode(52.2297, 21.0122, 6)?, "KO02mf");
        assert_eq!(encode(41.8781, -87.6298, 6)?, "EN61ev");
        assert_eq!(decode("IO91")?, LatLng::new(51.5, -1.0));

        let warsaw = decode("KO02mf")?;
        assert!((warsaw.lat - 52.22916666666667).abs() < 1e-12);
        assert!((warsaw.lng - 21.041666666666668).abs() < 1e-12);

        assert_eq!(encode(200.0, 400.0, 6)?, encode(90.0, 180.0, 6)?);
        assert_eq!(encode(0.0, 0.0, 5), Err(MaidenheadError::InvalidPrecision(5)));
        assert_eq!(encode(0.0, 0.0, -2), Err(MaidenheadError::InvalidPrecision(-2)));
        assert!(matches!(decode("A"), Err(MaidenheadError::InvalidLocator(_))));
        assert!(matches!(decode("ABCDE"), Err(MaidenheadError::InvalidLocator(_))));
        Ok(())
    }

    #[test]
    fn test_coverage_of_rectangle() -> Result<(), MaidenheadError> {
        let region = polygon![
            (x: -5.0, y: 50.0),
            (x: -5.0, y: 51.0),
            (x: -4.0, y: 51.0),
            (x: -4.0, y: 50.0),
            (x: -5.0, y: 50.0),
        ];
        assert_eq!(coverage(&region, 4)?, vec!["IO80", "IO81"]);
        Ok(())
    }

    #[test]
    fn test_cell_of_covering_grid_roundtrips() -> Result<(), MaidenheadError> {
        let region = parse_geometry("POLYGON((13.0 52.3, 13.8 52.3, 13.8 52.7, 13.0 52.7, 13.0 52.3))")?;
        let grid = LocatorGrid::from_region(&region, 6)?;
        assert!(!grid.is_empty());

        for cell in grid.iter() {
            let again = encode(cell.lat(), cell.lng(), 6)?;
            assert_eq!(again, cell.id);
        }
        Ok(())
    }
}

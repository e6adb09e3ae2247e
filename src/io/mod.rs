pub mod arrow;
pub mod csv;

pub use self::arrow::LocatorCellsToArrow;
pub use self::csv::{
    CoordinateSource, CsvLocatorConfig, CsvToLocator, GeometryFormat, csv_to_locator_csv,
    write_locator_csv,
};

use crate::cell::LocatorCell;
use crate::coverage::coverage;
use crate::error::MaidenheadError;
use crate::geom::parse_geometry;
use geo_types::{Geometry, Polygon};
use log::debug;
use std::collections::HashSet;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

enum SourceIndices {
    Geometry(usize),
    Coordinates { lng_idx: usize, lat_idx: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryFormat {
    /// Well-Known Text format (e.g., "POLYGON((...))")
    Wkt,
    /// GeoJSON format
    GeoJson,
}

#[derive(Debug, Clone)]
pub enum CoordinateSource {
    /// A single column containing WKT or GeoJSON geometry
    GeometryColumn(String),
    /// Separate longitude and latitude columns
    CoordinateColumns {
        lng_column: String,
        lat_column: String,
    },
}

#[derive(Debug, Clone)]
pub struct CsvLocatorConfig {
    pub source: CoordinateSource,
    pub exclude_columns: Vec<String>,
    pub precision: i32,
    pub include_cell_geometry: Option<GeometryFormat>,
}

impl CsvLocatorConfig {
    /// Create config for a CSV with a geometry column (WKT or GeoJSON).
    ///
    /// Point geometries produce one locator. Any other geometry produces one
    /// row per covering locator, so `precision` must then be 4, 6 or 8.
    ///
    /// # Example
    /// ```
    /// use maidenhead_rs::CsvLocatorConfig;
    ///
    /// let config = CsvLocatorConfig::new("geometry", 6);
    /// ```
    pub fn new(geometry_column: impl Into<String>, precision: i32) -> Self {
        Self {
            source: CoordinateSource::GeometryColumn(geometry_column.into()),
            exclude_columns: Vec::new(),
            precision,
            include_cell_geometry: None,
        }
    }

    /// Create config for a CSV with separate longitude/latitude columns.
    ///
    /// # Example
    /// ```
    /// use maidenhead_rs::CsvLocatorConfig;
    ///
    /// let config = CsvLocatorConfig::from_coords("Longitude", "Latitude", 6);
    /// ```
    pub fn from_coords(
        lng_column: impl Into<String>,
        lat_column: impl Into<String>,
        precision: i32,
    ) -> Self {
        Self {
            source: CoordinateSource::CoordinateColumns {
                lng_column: lng_column.into(),
                lat_column: lat_column.into(),
            },
            exclude_columns: Vec::new(),
            precision,
            include_cell_geometry: None,
        }
    }

    pub fn exclude(mut self, columns: Vec<String>) -> Self {
        self.exclude_columns = columns;
        self
    }

    /// Include the cell polygon in the output.
    pub fn with_cell_geometry(mut self, format: GeometryFormat) -> Self {
        self.include_cell_geometry = Some(format);
        self
    }
}

pub trait CsvToLocator {
    fn to_locator_csv(
        &self,
        output_path: impl AsRef<Path>,
        config: &CsvLocatorConfig,
    ) -> Result<(), MaidenheadError>;
}

impl<P: AsRef<Path>> CsvToLocator for P {
    fn to_locator_csv(
        &self,
        output_path: impl AsRef<Path>,
        config: &CsvLocatorConfig,
    ) -> Result<(), MaidenheadError> {
        csv_to_locator_csv(self, output_path, config)
    }
}

fn polygon_to_wkt(polygon: &Polygon<f64>) -> String {
    use wkt::ToWkt;
    polygon.wkt_string()
}

fn polygon_to_geojson(polygon: &Polygon<f64>) -> String {
    let geom = geojson::Geometry::new(geojson::Value::from(polygon));
    geom.to_string()
}

fn cells_for_geometry(
    geom: &Geometry<f64>,
    precision: i32,
) -> Result<Vec<LocatorCell>, MaidenheadError> {
    match geom {
        Geometry::Point(pt) => Ok(vec![LocatorCell::from_latlng(pt, precision)?]),
        Geometry::MultiPoint(mp) => mp
            .0
            .iter()
            .map(|pt| LocatorCell::from_latlng(pt, precision))
            .collect(),
        _ => coverage(geom, precision)?
            .iter()
            .map(|id| LocatorCell::from_locator(id))
            .collect(),
    }
}

/// Converts a CSV file with geometry or coordinate columns to a CSV file with locators.
///
/// # Example with geometry column (WKT or GeoJSON)
///
/// ```no_run
/// use maidenhead_rs::{csv_to_locator_csv, CsvLocatorConfig};
///
/// let config = CsvLocatorConfig::new("Geo Shape", 6)
///     .exclude(vec!["Geo Point".into()]);
///
/// csv_to_locator_csv("input.csv", "output.csv", &config).unwrap();
/// ```
///
/// # Example with coordinate columns
///
/// ```no_run
/// use maidenhead_rs::{csv_to_locator_csv, CsvLocatorConfig};
///
/// let config = CsvLocatorConfig::from_coords("Longitude", "Latitude", 8);
///
/// csv_to_locator_csv("stations.csv", "output.csv", &config).unwrap();
/// ```
pub fn csv_to_locator_csv(
    csv_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    config: &CsvLocatorConfig,
) -> Result<(), MaidenheadError> {
    let file = File::open(csv_path).map_err(|e| MaidenheadError::IoError(e.to_string()))?;
    let out_file =
        File::create(output_path).map_err(|e| MaidenheadError::IoError(e.to_string()))?;
    write_locator_csv(file, out_file, config)
}

/// Streams CSV rows from `input` to `output`, prefixing each with its locator.
///
/// The source columns are dropped from the output along with any excluded
/// columns. Rows whose geometry covers several cells are repeated, one per cell.
pub fn write_locator_csv<R: Read, W: Write>(
    input: R,
    output: W,
    config: &CsvLocatorConfig,
) -> Result<(), MaidenheadError> {
    let mut reader = csv::Reader::from_reader(input);

    let headers = reader
        .headers()
        .map_err(|e| MaidenheadError::CsvError(e.to_string()))?
        .clone();

    let column = |name: &str, kind: &str| {
        if name.is_empty() {
            return Err(MaidenheadError::CsvError(format!(
                "{} column name cannot be empty",
                kind
            )));
        }
        headers.iter().position(|h| h == name).ok_or_else(|| {
            MaidenheadError::CsvError(format!("{} column '{}' not found", kind, name))
        })
    };

    let (source_indices, mut exclude_indices) = match &config.source {
        CoordinateSource::GeometryColumn(col) => {
            let idx = column(col, "Geometry")?;
            (SourceIndices::Geometry(idx), HashSet::from([idx]))
        }
        CoordinateSource::CoordinateColumns {
            lng_column,
            lat_column,
        } => {
            let lng_idx = column(lng_column, "Longitude")?;
            let lat_idx = column(lat_column, "Latitude")?;
            (
                SourceIndices::Coordinates { lng_idx, lat_idx },
                HashSet::from([lng_idx, lat_idx]),
            )
        }
    };

    for col_name in &config.exclude_columns {
        if let Some(idx) = headers.iter().position(|h| h == col_name) {
            exclude_indices.insert(idx);
        }
    }

    let mut writer = csv::Writer::from_writer(output);

    let mut header_row: Vec<&str> = vec!["locator"];
    if config.include_cell_geometry.is_some() {
        header_row.push("locator_geometry");
    }
    for (i, h) in headers.iter().enumerate() {
        if !exclude_indices.contains(&i) {
            header_row.push(h);
        }
    }
    writer
        .write_record(&header_row)
        .map_err(|e| MaidenheadError::CsvError(e.to_string()))?;

    let mut rows_in = 0usize;
    let mut rows_out = 0usize;

    for result in reader.records() {
        let record = result.map_err(|e| MaidenheadError::CsvError(e.to_string()))?;
        rows_in += 1;

        let cells = match &source_indices {
            SourceIndices::Geometry(idx) => {
                let geom_str = record.get(*idx).ok_or_else(|| {
                    MaidenheadError::CsvError(format!("Missing geometry column at index {}", idx))
                })?;
                let geom = parse_geometry(geom_str)?;
                cells_for_geometry(&geom, config.precision)?
            }
            SourceIndices::Coordinates { lng_idx, lat_idx } => {
                let lng = parse_number(&record, *lng_idx, "longitude")?;
                let lat = parse_number(&record, *lat_idx, "latitude")?;
                vec![LocatorCell::from_latlng(&(lng, lat), config.precision)?]
            }
        };

        for cell in cells {
            let mut row: Vec<String> = vec![cell.id.clone()];

            if let Some(format) = config.include_cell_geometry {
                let polygon = cell.to_polygon();
                let geom_str = match format {
                    GeometryFormat::Wkt => polygon_to_wkt(&polygon),
                    GeometryFormat::GeoJson => polygon_to_geojson(&polygon),
                };
                row.push(geom_str);
            }

            for (i, field) in record.iter().enumerate() {
                if !exclude_indices.contains(&i) {
                    row.push(field.to_string());
                }
            }
            writer
                .write_record(&row)
                .map_err(|e| MaidenheadError::CsvError(e.to_string()))?;
            rows_out += 1;
        }
    }

    writer
        .flush()
        .map_err(|e| MaidenheadError::IoError(e.to_string()))?;

    debug!(
        "csv: {} input rows -> {} locator rows at precision {}",
        rows_in, rows_out, config.precision
    );

    Ok(())
}

fn parse_number(
    record: &csv::StringRecord,
    idx: usize,
    kind: &str,
) -> Result<f64, MaidenheadError> {
    let raw = record
        .get(idx)
        .ok_or_else(|| {
            MaidenheadError::CsvError(format!("Missing {} column at index {}", kind, idx))
        })?
        .trim();

    raw.parse()
        .map_err(|_| MaidenheadError::CsvError(format!("Invalid {}: '{}'", kind, raw)))
}

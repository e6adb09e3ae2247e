/// Error type for maidenhead-rs operations.
#[derive(Debug, PartialEq)]
pub enum MaidenheadError {
    /// Encode precision is odd or below 2.
    InvalidPrecision(i32),
    /// Coverage precision is not one of 4, 6 or 8.
    UnsupportedPrecision(i32),
    /// The locator string is malformed (wrong length or bad character).
    InvalidLocator(String),
    /// Failed to parse geometry from string (GeoJSON or WKT).
    GeometryParseError(String),
    /// File I/O error.
    IoError(String),
    /// CSV parsing or reading error.
    CsvError(String),
    /// Arrow array or record batch construction failed.
    ArrowError(String),
}

impl std::fmt::Display for MaidenheadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MaidenheadError::InvalidPrecision(p) => {
                write!(f, "Invalid precision: {} (must be an even number >= 2)", p)
            }
            MaidenheadError::UnsupportedPrecision(p) => {
                write!(f, "Unsupported coverage precision: {} (expected 4, 6 or 8)", p)
            }
            MaidenheadError::InvalidLocator(loc) => write!(f, "Invalid QTH locator: '{}'", loc),
            MaidenheadError::GeometryParseError(msg) => write!(f, "Geometry parse error: {}", msg),
            MaidenheadError::IoError(msg) => write!(f, "IO error: {}", msg),
            MaidenheadError::CsvError(msg) => write!(f, "CSV error: {}", msg),
            MaidenheadError::ArrowError(msg) => write!(f, "Arrow error: {}", msg),
        }
    }
}

impl std::error::Error for MaidenheadError {}

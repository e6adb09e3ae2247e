/// Longitude/latitude span of a field (precision 2), in degrees.
pub const FIELD_SIZE: (f64, f64) = (20.0, 10.0);

/// Longitude/latitude span of a square (precision 4), in degrees.
pub const SQUARE_SIZE: (f64, f64) = (2.0, 1.0);

/// Longitude/latitude span of a subsquare (precision 6), in degrees.
pub const SUBSQUARE_SIZE: (f64, f64) = (2.0 / 24.0, 1.0 / 24.0);

/// Longitude/latitude span of an extended square (precision 8), in degrees.
pub const EXTENDED_SIZE: (f64, f64) = (2.0 / 24.0 / 10.0, 1.0 / 24.0 / 10.0);

/// Longest locator the codec understands.
pub const MAX_PRECISION: usize = 8;

/// Cell span `(lng, lat)` for a locator of the given length.
///
/// Lengths past 8 report the extended-square size.
pub fn cell_size(precision: usize) -> (f64, f64) {
    match precision {
        0..=2 => FIELD_SIZE,
        3..=4 => SQUARE_SIZE,
        5..=6 => SUBSQUARE_SIZE,
        _ => EXTENDED_SIZE,
    }
}

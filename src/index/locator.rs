use crate::coord::LatLng;
use crate::error::MaidenheadError;
use crate::index::constants::{
    EXTENDED_SIZE, FIELD_SIZE, MAX_PRECISION, SQUARE_SIZE, SUBSQUARE_SIZE, cell_size,
};

/// Converts latitude/longitude to a Maidenhead (QTH) locator.
///
/// `precision` is the number of characters in the locator and must be an even
/// number >= 2. Only 2, 4, 6 and 8 are meaningful; larger values yield the
/// 8-character locator. Out-of-range coordinates are clamped, not rejected.
///
/// # Example
/// ```
/// use maidenhead_rs::latlng_to_locator;
///
/// # fn main() -> Result<(), maidenhead_rs::MaidenheadError> {
/// let locator = latlng_to_locator(52.2297, 21.0122, 6)?;
/// assert_eq!(locator, "KO02mf");
/// # Ok(())
/// # }
/// ```
pub fn latlng_to_locator(lat: f64, lng: f64, precision: i32) -> Result<String, MaidenheadError> {
    if precision < 2 || precision % 2 != 0 {
        return Err(MaidenheadError::InvalidPrecision(precision));
    }

    let lat = lat.clamp(-90.0, 90.0);
    let lng = lng.clamp(-180.0, 180.0);

    let mut adj_lng = lng + 180.0;
    let mut adj_lat = lat + 90.0;

    let mut locator = String::with_capacity(MAX_PRECISION);

    // Field (A-R, S only on the clamped east/north edge)
    locator.push(letter(b'A', adj_lng / FIELD_SIZE.0, u8::MAX));
    locator.push(letter(b'A', adj_lat / FIELD_SIZE.1, u8::MAX));

    if precision == 2 {
        return Ok(locator);
    }

    // Square (0-9)
    adj_lng %= FIELD_SIZE.0;
    adj_lat %= FIELD_SIZE.1;
    locator.push(digit(adj_lng / SQUARE_SIZE.0));
    locator.push(digit(adj_lat / SQUARE_SIZE.1));

    if precision == 4 {
        return Ok(locator);
    }

    // Subsquare (a-x)
    adj_lng %= SQUARE_SIZE.0;
    adj_lat %= SQUARE_SIZE.1;
    locator.push(letter(b'a', adj_lng / SUBSQUARE_SIZE.0, 23));
    locator.push(letter(b'a', adj_lat / SUBSQUARE_SIZE.1, 23));

    if precision == 6 {
        return Ok(locator);
    }

    // Extended square (0-9)
    adj_lng %= SUBSQUARE_SIZE.0;
    adj_lat %= SUBSQUARE_SIZE.1;
    locator.push(digit(adj_lng / EXTENDED_SIZE.0));
    locator.push(digit(adj_lat / EXTENDED_SIZE.1));

    locator.truncate(precision as usize);
    Ok(locator)
}

/// Converts a Maidenhead (QTH) locator to the latitude/longitude of its cell center.
///
/// Letters are accepted in either case. Surrounding whitespace is ignored.
///
/// # Example
/// ```
/// use maidenhead_rs::locator_to_latlng;
///
/// # fn main() -> Result<(), maidenhead_rs::MaidenheadError> {
/// let center = locator_to_latlng("IO91")?;
/// assert_eq!(center.lat, 51.5);
/// assert_eq!(center.lng, -1.0);
/// # Ok(())
/// # }
/// ```
pub fn locator_to_latlng(locator: &str) -> Result<LatLng, MaidenheadError> {
    let loc = validate(locator)?;

    let mut lng = -180.0;
    let mut lat = -90.0;

    lng += f64::from(loc[0].to_ascii_uppercase() - b'A') * FIELD_SIZE.0;
    lat += f64::from(loc[1].to_ascii_uppercase() - b'A') * FIELD_SIZE.1;

    if loc.len() >= 4 {
        lng += f64::from(loc[2] - b'0') * SQUARE_SIZE.0;
        lat += f64::from(loc[3] - b'0') * SQUARE_SIZE.1;
    }

    if loc.len() >= 6 {
        lng += f64::from(loc[4].to_ascii_lowercase() - b'a') * SUBSQUARE_SIZE.0;
        lat += f64::from(loc[5].to_ascii_lowercase() - b'a') * SUBSQUARE_SIZE.1;
    }

    if loc.len() >= 8 {
        lng += f64::from(loc[6] - b'0') * EXTENDED_SIZE.0;
        lat += f64::from(loc[7] - b'0') * EXTENDED_SIZE.1;
    }

    let (lng_size, lat_size) = cell_size(loc.len());
    lng += lng_size / 2.0;
    lat += lat_size / 2.0;

    Ok(LatLng { lat, lng })
}

/// Returns the canonical rendering of a locator: uppercase field letters,
/// lowercase subsquare letters.
pub fn normalize_locator(locator: &str) -> Result<String, MaidenheadError> {
    let loc = validate(locator)?;

    let normalized = loc
        .iter()
        .enumerate()
        .map(|(i, b)| match i {
            0 | 1 => char::from(b.to_ascii_uppercase()),
            4 | 5 => char::from(b.to_ascii_lowercase()),
            _ => char::from(*b),
        })
        .collect();

    Ok(normalized)
}

/// Returns true if the string is a well-formed locator of 2, 4, 6 or 8 characters.
pub fn is_valid_locator(locator: &str) -> bool {
    validate(locator).is_ok()
}

fn validate(locator: &str) -> Result<&[u8], MaidenheadError> {
    let invalid = || MaidenheadError::InvalidLocator(locator.to_string());

    let loc = locator.trim().as_bytes();
    if loc.len() < 2 || loc.len() % 2 != 0 || loc.len() > MAX_PRECISION {
        return Err(invalid());
    }

    let well_formed = loc.iter().enumerate().all(|(i, b)| match i {
        0 | 1 | 4 | 5 => b.is_ascii_alphabetic(),
        _ => b.is_ascii_digit(),
    });
    if !well_formed {
        return Err(invalid());
    }

    Ok(loc)
}

fn letter(base: u8, quotient: f64, max_offset: u8) -> char {
    let offset = (quotient.floor() as u8).min(max_offset);
    char::from(base.saturating_add(offset))
}

// Rounding in the remainder can push the quotient to exactly 10.0.
fn digit(quotient: f64) -> char {
    char::from(b'0' + (quotient.floor() as u8).min(9))
}

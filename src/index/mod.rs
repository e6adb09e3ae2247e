pub mod constants;
mod locator;

pub use constants::{EXTENDED_SIZE, FIELD_SIZE, MAX_PRECISION, SQUARE_SIZE, SUBSQUARE_SIZE, cell_size};
pub use locator::{is_valid_locator, latlng_to_locator, locator_to_latlng, normalize_locator};

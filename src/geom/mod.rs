mod cell;
mod parse;
mod region;

pub use cell::{create_cell_rect, locator_to_polygon, locator_to_rect};
pub use parse::{parse_geojson, parse_geometry, parse_wkt};
pub use region::{first_point, swap_lat_lng};

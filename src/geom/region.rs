use geo::MapCoords;
use geo_types::{Geometry, Point, coord};

/// Swaps the axes of every coordinate in a geometry.
///
/// Converts between `[lat, lng]` ordered input (as produced by web map
/// widgets) and the `[lng, lat]` order used everywhere else in this crate.
pub fn swap_lat_lng(geometry: &Geometry<f64>) -> Geometry<f64> {
    geometry.map_coords(|c| coord! { x: c.y, y: c.x })
}

/// Returns the first vertex of a geometry, descending into the first member of
/// nested collections. `None` for empty geometries.
pub fn first_point(geometry: &Geometry<f64>) -> Option<Point<f64>> {
    match geometry {
        Geometry::Point(pt) => Some(*pt),
        Geometry::Line(line) => Some(line.start_point()),
        Geometry::LineString(ls) => ls.0.first().map(|c| Point::from(*c)),
        Geometry::Polygon(poly) => poly.exterior().0.first().map(|c| Point::from(*c)),
        Geometry::MultiPoint(mp) => mp.0.first().copied(),
        Geometry::MultiLineString(mls) => mls
            .0
            .first()
            .and_then(|ls| ls.0.first())
            .map(|c| Point::from(*c)),
        Geometry::MultiPolygon(mp) => mp
            .0
            .first()
            .and_then(|poly| poly.exterior().0.first())
            .map(|c| Point::from(*c)),
        Geometry::GeometryCollection(gc) => gc.0.first().and_then(first_point),
        Geometry::Rect(rect) => Some(Point::from(rect.min())),
        Geometry::Triangle(tri) => Some(Point::from(tri.0)),
    }
}

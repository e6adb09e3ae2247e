use crate::error::MaidenheadError;
use crate::geom::locator_to_polygon;
use crate::index::{EXTENDED_SIZE, SQUARE_SIZE, SUBSQUARE_SIZE, latlng_to_locator};
use geo::{BoundingRect, Intersects};
use geo_types::{Polygon, Rect};
use log::{debug, trace};
use rayon::prelude::*;
use std::collections::{BTreeSet, HashSet};

/// Geometry capability the coverage enumerator needs from a region.
///
/// Blanket-implemented for every `geo` type with a bounding rectangle that can
/// be tested against a polygon (`Polygon`, `MultiPolygon`, `Rect`,
/// `LineString`, `Geometry`, ...).
pub trait CoverageRegion {
    /// Axis-aligned bounding box, `None` for an empty region.
    fn bounding_box(&self) -> Option<Rect<f64>>;

    /// Intersection test against a candidate cell, inclusive of shared boundaries.
    fn intersects_cell(&self, cell: &Polygon<f64>) -> bool;
}

impl<G> CoverageRegion for G
where
    G: BoundingRect<f64> + Intersects<Polygon<f64>>,
    G::Output: Into<Option<Rect<f64>>>,
{
    fn bounding_box(&self) -> Option<Rect<f64>> {
        self.bounding_rect().into()
    }

    fn intersects_cell(&self, cell: &Polygon<f64>) -> bool {
        self.intersects(cell)
    }
}

/// Grid step `(lng, lat)` used to walk a region at the given precision.
pub fn coverage_step(precision: i32) -> Result<(f64, f64), MaidenheadError> {
    match precision {
        4 => Ok(SQUARE_SIZE),
        6 => Ok(SUBSQUARE_SIZE),
        8 => Ok(EXTENDED_SIZE),
        _ => Err(MaidenheadError::UnsupportedPrecision(precision)),
    }
}

/// Returns the sorted locators whose cells intersect `region`.
///
/// `precision` must be 4, 6 or 8. Touching a cell edge counts as intersecting.
/// The scan is `O(width/step * height/step)` over the region's bounding box, so
/// large regions at precision 8 are expensive.
///
/// # Example
/// ```
/// use maidenhead_rs::coverage;
/// use geo_types::polygon;
///
/// # fn main() -> Result<(), maidenhead_rs::MaidenheadError> {
/// let region = polygon![
///     (x: -5.0, y: 50.0),
///     (x: -5.0, y: 51.0),
///     (x: -4.0, y: 51.0),
///     (x: -4.0, y: 50.0),
/// ];
/// assert_eq!(coverage(&region, 4)?, vec!["IO80", "IO81"]);
/// # Ok(())
/// # }
/// ```
pub fn coverage<R>(region: &R, precision: i32) -> Result<Vec<String>, MaidenheadError>
where
    R: CoverageRegion + ?Sized,
{
    let step = coverage_step(precision)?;
    let Some(bbox) = region.bounding_box() else {
        debug!("coverage: empty region at precision {}", precision);
        return Ok(Vec::new());
    };

    let mut seen = HashSet::new();
    let mut found = BTreeSet::new();

    for lng in grid_origins(bbox.min().x, bbox.max().x, step.0) {
        scan_column(region, &bbox, lng, step, precision, &mut seen, &mut found)?;
    }

    debug!(
        "coverage: precision {} bbox {:?} -> {} candidates, {} cells",
        precision,
        bbox,
        seen.len(),
        found.len()
    );

    Ok(found.into_iter().collect())
}

/// Parallel variant of [`coverage`].
///
/// Longitude columns of the grid walk are scanned on the rayon pool and the
/// partial sets merged, so the result is identical to [`coverage`].
pub fn coverage_par<R>(region: &R, precision: i32) -> Result<Vec<String>, MaidenheadError>
where
    R: CoverageRegion + Sync + ?Sized,
{
    let step = coverage_step(precision)?;
    let Some(bbox) = region.bounding_box() else {
        debug!("coverage_par: empty region at precision {}", precision);
        return Ok(Vec::new());
    };

    let columns = grid_origins(bbox.min().x, bbox.max().x, step.0);
    let found = columns
        .par_iter()
        .map(|&lng| -> Result<BTreeSet<String>, MaidenheadError> {
            let mut seen = HashSet::new();
            let mut found = BTreeSet::new();
            scan_column(region, &bbox, lng, step, precision, &mut seen, &mut found)?;
            Ok(found)
        })
        .try_reduce(BTreeSet::new, |mut acc, part| {
            acc.extend(part);
            Ok(acc)
        })?;

    debug!(
        "coverage_par: precision {} bbox {:?} over {} columns -> {} cells",
        precision,
        bbox,
        columns.len(),
        found.len()
    );

    Ok(found.into_iter().collect())
}

// Origins from `min` to `max` inclusive, accumulating the step.
fn grid_origins(min: f64, max: f64, step: f64) -> Vec<f64> {
    let mut origins = Vec::new();
    let mut value = min;
    while value <= max {
        origins.push(value);
        value += step;
    }
    origins
}

fn scan_column<R>(
    region: &R,
    bbox: &Rect<f64>,
    lng: f64,
    step: (f64, f64),
    precision: i32,
    seen: &mut HashSet<String>,
    found: &mut BTreeSet<String>,
) -> Result<(), MaidenheadError>
where
    R: CoverageRegion + ?Sized,
{
    let (half_lng, half_lat) = (step.0 / 2.0, step.1 / 2.0);
    let center_lng = (lng + half_lng).clamp(-180.0 + half_lng, 180.0 - half_lng);

    let mut lat = bbox.min().y;
    while lat <= bbox.max().y {
        // Centers past the pole or antimeridian fold back into the last real cell.
        let center_lat = (lat + half_lat).clamp(-90.0 + half_lat, 90.0 - half_lat);
        lat += step.1;

        let locator = latlng_to_locator(center_lat, center_lng, precision)?;
        if !seen.insert(locator.clone()) {
            continue;
        }

        let cell = locator_to_polygon(&locator)?;
        if region.intersects_cell(&cell) {
            found.insert(locator);
        } else {
            trace!("coverage: {} does not intersect region", locator);
        }
    }

    Ok(())
}

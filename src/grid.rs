use crate::cell::LocatorCell;
use crate::coord::Coordinate;
use crate::coverage::{CoverageRegion, coverage, coverage_par};
use crate::error::MaidenheadError;
use crate::index::latlng_to_locator;
use geo_types::{Geometry, Polygon, Rect, coord};
use geojson::{Feature, FeatureCollection, feature::Id};
use serde_json::{Map, Value};

/// The cells covering a region at one precision, sorted by locator.
#[derive(Debug, Clone)]
pub struct LocatorGrid {
    cells: Vec<LocatorCell>,
    precision: i32,
}

impl LocatorGrid {
    pub fn builder() -> LocatorGridBuilder {
        LocatorGridBuilder::new()
    }

    pub fn from_region<R>(region: &R, precision: i32) -> Result<Self, MaidenheadError>
    where
        R: CoverageRegion + ?Sized,
    {
        Self::from_locators(coverage(region, precision)?, precision)
    }

    /// Same as [`LocatorGrid::from_region`], scanning on the rayon pool.
    pub fn from_region_par<R>(region: &R, precision: i32) -> Result<Self, MaidenheadError>
    where
        R: CoverageRegion + Sync + ?Sized,
    {
        Self::from_locators(coverage_par(region, precision)?, precision)
    }

    pub fn from_rect(rect: &Rect<f64>, precision: i32) -> Result<Self, MaidenheadError> {
        Self::from_region(rect, precision)
    }

    fn from_locators(locators: Vec<String>, precision: i32) -> Result<Self, MaidenheadError> {
        let cells = locators
            .iter()
            .map(|id| LocatorCell::from_locator(id))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { cells, precision })
    }

    pub fn precision(&self) -> i32 {
        self.precision
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[LocatorCell] {
        &self.cells
    }

    pub fn iter(&self) -> impl Iterator<Item = &LocatorCell> {
        self.cells.iter()
    }

    pub fn locators(&self) -> Vec<&str> {
        self.cells.iter().map(|cell| cell.id.as_str()).collect()
    }

    /// Returns the grid cell containing the coordinate, if it is part of the grid.
    pub fn get_cell_at(&self, coord: &impl Coordinate) -> Option<&LocatorCell> {
        let id = latlng_to_locator(coord.lat(), coord.lng(), self.precision).ok()?;
        self.cells
            .binary_search_by(|cell| cell.id.as_str().cmp(id.as_str()))
            .ok()
            .map(|idx| &self.cells[idx])
    }

    pub fn to_polygons(&self) -> Vec<Polygon<f64>> {
        self.cells.iter().map(|cell| cell.to_polygon()).collect()
    }

    pub fn filter<F>(&self, predicate: F) -> Vec<&LocatorCell>
    where
        F: Fn(&LocatorCell) -> bool,
    {
        self.cells.iter().filter(|cell| predicate(cell)).collect()
    }

    /// GeoJSON FeatureCollection of the cell polygons, one feature per locator.
    ///
    /// Each feature has the locator as id and `locator`, `precision`, `lat`
    /// and `lng` properties.
    pub fn to_geojson(&self) -> FeatureCollection {
        let features = self
            .cells
            .iter()
            .map(|cell| {
                let polygon = cell.to_polygon();

                let mut properties = Map::new();
                properties.insert("locator".to_string(), Value::from(cell.id.clone()));
                properties.insert("precision".to_string(), Value::from(cell.precision()));
                properties.insert("lat".to_string(), Value::from(cell.lat()));
                properties.insert("lng".to_string(), Value::from(cell.lng()));

                Feature {
                    bbox: None,
                    geometry: Some(geojson::Geometry::new(geojson::Value::from(&polygon))),
                    id: Some(Id::String(cell.id.clone())),
                    properties: Some(properties),
                    foreign_members: None,
                }
            })
            .collect();

        FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        }
    }
}

#[derive(Debug)]
pub struct LocatorGridBuilder {
    precision: i32,
    region: Option<Geometry<f64>>,
    parallel: bool,
}

impl Default for LocatorGridBuilder {
    fn default() -> Self {
        Self {
            precision: 6,
            region: None,
            parallel: false,
        }
    }
}

impl LocatorGridBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Target precision, 4, 6 (default) or 8.
    pub fn precision(mut self, precision: i32) -> Self {
        self.precision = precision;
        self
    }

    pub fn region(mut self, region: impl Into<Geometry<f64>>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Region given as a `(min_lng, min_lat)`, `(max_lng, max_lat)` extent.
    pub fn bounds(mut self, min: &impl Coordinate, max: &impl Coordinate) -> Self {
        let rect = Rect::new(
            coord! { x: min.lng(), y: min.lat() },
            coord! { x: max.lng(), y: max.lat() },
        );
        self.region = Some(Geometry::Rect(rect));
        self
    }

    /// Scan the region on the rayon pool.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Runs the coverage scan. A builder without a region yields an empty grid.
    pub fn build(self) -> Result<LocatorGrid, MaidenheadError> {
        match (self.region, self.parallel) {
            (None, _) => LocatorGrid::from_locators(Vec::new(), self.precision),
            (Some(region), false) => LocatorGrid::from_region(&region, self.precision),
            (Some(region), true) => LocatorGrid::from_region_par(&region, self.precision),
        }
    }
}

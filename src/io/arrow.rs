use crate::cell::LocatorCell;
use crate::error::MaidenheadError;
use arrow_array::{Float64Array, RecordBatch, StringArray, UInt8Array};
use arrow_schema::{DataType, Field, Schema};
use geoarrow_array::IntoArrow;
use geoarrow_array::array::{PointArray, PolygonArray};
use geoarrow_array::builder::{PointBuilder, PolygonBuilder};
use geoarrow_schema::{Crs, Dimension, Metadata, PointType, PolygonType};
use rayon::prelude::*;
use std::sync::Arc;

fn wgs84_metadata() -> Arc<Metadata> {
    let crs = Crs::from_authority_code("EPSG:4326".to_string());
    Arc::new(Metadata::new(crs, None))
}

/// Trait for converting collections of [`LocatorCell`]s to Arrow arrays.
///
/// Implemented for `[LocatorCell]` and `Vec<LocatorCell>`.
pub trait LocatorCellsToArrow {
    /// Converts cell centers to an Arrow PointArray.
    fn to_arrow_points(&self) -> PointArray;
    /// Converts cells to an Arrow PolygonArray of cell rectangles.
    fn to_arrow_polygons(&self) -> PolygonArray;
    /// Converts cells to a RecordBatch with locator, precision, lat, lng and geometry.
    fn to_record_batch(&self) -> Result<RecordBatch, MaidenheadError>;
}

impl LocatorCellsToArrow for [LocatorCell] {
    fn to_arrow_points(&self) -> PointArray {
        let point = PointType::new(Dimension::XY, wgs84_metadata());
        let mut builder = PointBuilder::with_capacity(point, self.len());

        for cell in self {
            builder.push_point(Some(&cell.center));
        }
        builder.finish()
    }

    fn to_arrow_polygons(&self) -> PolygonArray {
        let poly = PolygonType::new(Dimension::XY, wgs84_metadata());
        let polygons: Vec<_> = self
            .par_iter()
            .map(|c: &LocatorCell| c.to_polygon())
            .collect();
        PolygonBuilder::from_polygons(&polygons, poly).finish()
    }

    fn to_record_batch(&self) -> Result<RecordBatch, MaidenheadError> {
        let polygon_array = self.to_arrow_polygons();
        let locators: StringArray = self.iter().map(|c| Some(c.id.as_str())).collect();
        let precisions: UInt8Array = self.iter().map(|c| Some(c.precision() as u8)).collect();
        let lats: Float64Array = self.iter().map(|c| Some(c.lat())).collect();
        let lngs: Float64Array = self.iter().map(|c| Some(c.lng())).collect();

        let geometry_field = polygon_array.extension_type().to_field("geometry", false);
        let schema = Schema::new(vec![
            Field::new("locator", DataType::Utf8, false),
            Field::new("precision", DataType::UInt8, false),
            Field::new("lat", DataType::Float64, false),
            Field::new("lng", DataType::Float64, false),
            geometry_field,
        ]);

        RecordBatch::try_new(
            Arc::new(schema),
            vec![
                Arc::new(locators),
                Arc::new(precisions),
                Arc::new(lats),
                Arc::new(lngs),
                Arc::new(polygon_array.into_arrow()),
            ],
        )
        .map_err(|e| MaidenheadError::ArrowError(e.to_string()))
    }
}

impl LocatorCellsToArrow for Vec<LocatorCell> {
    fn to_arrow_points(&self) -> PointArray {
        self.as_slice().to_arrow_points()
    }

    fn to_arrow_polygons(&self) -> PolygonArray {
        self.as_slice().to_arrow_polygons()
    }

    fn to_record_batch(&self) -> Result<RecordBatch, MaidenheadError> {
        self.as_slice().to_record_batch()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::LocatorGrid;
    use geo_types::polygon;
    use geoarrow_array::GeoArrowArray;

    fn cells() -> Result<Vec<LocatorCell>, MaidenheadError> {
        Ok(vec![
            LocatorCell::from_locator("KO02mf")?,
            LocatorCell::from_locator("EN61ev")?,
            LocatorCell::from_locator("IO91")?,
        ])
    }

    #[test]
    fn test_cells_to_arrow_points() -> Result<(), MaidenheadError> {
        let point_array = cells()?.to_arrow_points();
        assert_eq!(point_array.len(), 3);
        Ok(())
    }

    #[test]
    fn test_cells_to_arrow_polygons() -> Result<(), MaidenheadError> {
        let polygon_array = cells()?.as_slice().to_arrow_polygons();
        assert_eq!(polygon_array.len(), 3);
        Ok(())
    }

    #[test]
    fn test_record_batch_schema() -> Result<(), MaidenheadError> {
        let batch = cells()?.to_record_batch()?;

        assert_eq!(batch.num_rows(), 3);
        assert_eq!(batch.num_columns(), 5);

        let schema = batch.schema();
        assert_eq!(schema.field(0).name(), "locator");
        assert_eq!(schema.field(1).name(), "precision");
        assert_eq!(schema.field(4).name(), "geometry");
        Ok(())
    }

    #[test]
    fn test_grid_cells_to_record_batch() -> Result<(), MaidenheadError> {
        let region = polygon![
            (x: -5.0, y: 50.0),
            (x: -5.0, y: 51.0),
            (x: -4.0, y: 51.0),
            (x: -4.0, y: 50.0),
        ];
        let grid = LocatorGrid::from_region(&region, 4)?;
        let batch = grid.cells().to_record_batch()?;

        assert_eq!(batch.num_rows(), grid.len());
        let locators = batch
            .column(0)
            .as_any()
            .downcast_ref::<StringArray>()
            .ok_or_else(|| MaidenheadError::ArrowError("locator column type".to_string()))?;
        assert_eq!(locators.value(0), "IO80");
        assert_eq!(locators.value(1), "IO81");
        Ok(())
    }
}

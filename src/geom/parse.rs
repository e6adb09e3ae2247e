use crate::error::MaidenheadError;
use geo_types::{Geometry, GeometryCollection};
use geojson::GeoJson;
use std::str::FromStr;
use wkt::Wkt;

/// Parses a geometry string, auto-detecting WKT or GeoJSON format.
///
/// GeoJSON is detected by a leading `{`, everything else is tried as WKT.
pub fn parse_geometry(s: &str) -> Result<Geometry<f64>, MaidenheadError> {
    let trimmed = s.trim();
    if trimmed.starts_with('{') {
        parse_geojson(trimmed)
    } else {
        parse_wkt(trimmed)
    }
}

/// Parses a GeoJSON string into a `geo_types::Geometry`.
///
/// Features are unwrapped to their geometry. A FeatureCollection becomes a
/// `GeometryCollection` of its features' geometries; features without geometry
/// are skipped.
pub fn parse_geojson(s: &str) -> Result<Geometry<f64>, MaidenheadError> {
    let geojson: GeoJson = s
        .parse()
        .map_err(|e: geojson::Error| MaidenheadError::GeometryParseError(e.to_string()))?;

    match geojson {
        GeoJson::Geometry(geom) => convert(geom),
        GeoJson::Feature(feat) => feat
            .geometry
            .ok_or_else(|| {
                MaidenheadError::GeometryParseError("Feature has no geometry".to_string())
            })
            .and_then(convert),
        GeoJson::FeatureCollection(fc) => {
            let geometries = fc
                .features
                .into_iter()
                .filter_map(|feat| feat.geometry)
                .map(convert)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Geometry::GeometryCollection(GeometryCollection(geometries)))
        }
    }
}

/// Parses a WKT string into a `geo_types::Geometry`.
pub fn parse_wkt(s: &str) -> Result<Geometry<f64>, MaidenheadError> {
    let wkt: Wkt<f64> =
        Wkt::from_str(s).map_err(|e| MaidenheadError::GeometryParseError(e.to_string()))?;

    wkt.try_into().map_err(|_| {
        MaidenheadError::GeometryParseError("Failed to convert WKT to geometry".to_string())
    })
}

fn convert(geom: geojson::Geometry) -> Result<Geometry<f64>, MaidenheadError> {
    Geometry::try_from(geom).map_err(|e| MaidenheadError::GeometryParseError(e.to_string()))
}

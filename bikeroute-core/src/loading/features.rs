//! GeoJSON network export: one LineString feature per noded edge

use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use geo::{Geometry, LineString};
use geojson::{Feature, GeoJson};
use serde_json::Value as JsonValue;

use crate::{EdgeId, Error, model::EdgeRecord};

fn required_id(feature: &Feature, key: &str, edge: Option<EdgeId>) -> Result<u64, Error> {
    feature
        .property(key)
        .and_then(JsonValue::as_u64)
        .ok_or_else(|| match edge {
            Some(id) => Error::InvalidData(format!("edge {id} has no integer `{key}` property")),
            None => Error::InvalidData(format!("feature has no integer `{key}` property")),
        })
}

fn optional_cost(feature: &Feature, key: &str) -> Option<f64> {
    feature.property(key).and_then(JsonValue::as_f64)
}

fn to_line(feature: &Feature, id: EdgeId) -> Result<LineString<f64>, Error> {
    let geometry = feature
        .geometry
        .clone()
        .ok_or_else(|| Error::InvalidData(format!("edge {id} has no geometry")))?;

    match Geometry::<f64>::try_from(geometry)
        .map_err(|e| Error::InvalidData(format!("edge {id} has invalid geometry: {e}")))?
    {
        Geometry::LineString(line) => Ok(line),
        Geometry::MultiLineString(mut multi) if multi.0.len() == 1 => Ok(multi.0.remove(0)),
        Geometry::MultiLineString(_) => Err(Error::InvalidData(format!(
            "edge {id} is a multi-part line; the network must be noded"
        ))),
        _ => Err(Error::InvalidData(format!(
            "edge {id} is not a line string"
        ))),
    }
}

fn to_record(feature: &Feature) -> Result<EdgeRecord, Error> {
    let id = required_id(feature, "id", None)?;

    Ok(EdgeRecord {
        id,
        source: required_id(feature, "source", Some(id))?,
        target: required_id(feature, "target", Some(id))?,
        facility_type: feature
            .property("facility_t")
            .and_then(JsonValue::as_str)
            .map(str::to_string),
        geometry: to_line(feature, id)?,
        cost: optional_cost(feature, "cost"),
        reverse_cost: optional_cost(feature, "reverse_cost"),
    })
}

/// Parse edge records from any GeoJSON source holding a FeatureCollection
pub fn parse_edges<R: Read>(reader: R) -> Result<Vec<EdgeRecord>, Error> {
    let collection = match GeoJson::from_reader(reader)
        .map_err(|e| Error::GeoJsonError(e.to_string()))?
    {
        GeoJson::FeatureCollection(collection) => collection,
        _ => {
            return Err(Error::GeoJsonError(
                "expected a FeatureCollection".to_string(),
            ));
        }
    };

    collection.features.iter().map(to_record).collect()
}

/// Read edge records from a GeoJSON file
pub fn read_edges(path: &Path) -> Result<Vec<EdgeRecord>, Error> {
    let file = File::open(path).map_err(|e| {
        std::io::Error::new(
            e.kind(),
            format!("Failed to open file '{}': {}", path.display(), e),
        )
    })?;
    parse_edges(BufReader::new(file))
}

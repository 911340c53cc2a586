//! CSV network export, shaped like a pgRouting noded table:
//! `id,source,target,facility_t,cost,reverse_cost,geometry` with WKT geometry.

use std::{fs::File, io::Read, path::Path};

use geo::{Geometry, LineString};
use serde::Deserialize;
use wkt::TryFromWkt;

use crate::{EdgeId, Error, NodeId, model::EdgeRecord};

#[derive(Debug, Deserialize)]
struct FeedEdge {
    id: EdgeId,
    source: NodeId,
    target: NodeId,
    #[serde(default)]
    facility_t: Option<String>,
    #[serde(default)]
    cost: Option<f64>,
    #[serde(default)]
    reverse_cost: Option<f64>,
    geometry: String,
}

fn parse_line(wkt_str: &str, id: EdgeId) -> Result<LineString<f64>, Error> {
    let geometry = Geometry::<f64>::try_from_wkt_str(wkt_str)
        .map_err(|e| Error::InvalidData(format!("edge {id} has invalid WKT: {e}")))?;

    match geometry {
        Geometry::LineString(line) => Ok(line),
        Geometry::MultiLineString(mut multi) if multi.0.len() == 1 => Ok(multi.0.remove(0)),
        _ => Err(Error::InvalidData(format!(
            "edge {id} is not a single line string"
        ))),
    }
}

/// Parse edge records from any CSV source
pub fn parse_edges<R: Read>(reader: R) -> Result<Vec<EdgeRecord>, Error> {
    let mut records = Vec::new();

    for row in csv::Reader::from_reader(reader).deserialize() {
        let row: FeedEdge = row?;
        let facility_type = row.facility_t.filter(|f| !f.is_empty());
        records.push(EdgeRecord {
            geometry: parse_line(&row.geometry, row.id)?,
            id: row.id,
            source: row.source,
            target: row.target,
            facility_type,
            cost: row.cost,
            reverse_cost: row.reverse_cost,
        });
    }

    Ok(records)
}

/// Read edge records from a CSV file
pub fn read_edges(path: &Path) -> Result<Vec<EdgeRecord>, Error> {
    let file = File::open(path).map_err(|e| {
        std::io::Error::new(
            e.kind(),
            format!("Failed to open file '{}': {}", path.display(), e),
        )
    })?;
    parse_edges(file)
}

use geo::LineString;
use geojson::{Geometry, Value as GeoJsonValue};
use serde::Deserialize;
use wkt::ToWkt;

use crate::Error;

/// Text encoding of geometries returned to clients
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeometryFormat {
    #[default]
    GeoJson,
    Wkt,
}

impl GeometryFormat {
    pub fn encode_line(self, line: &LineString<f64>) -> Result<String, Error> {
        match self {
            GeometryFormat::GeoJson => {
                let geometry = Geometry::new(GeoJsonValue::from(line));
                serde_json::to_string(&geometry).map_err(|e| Error::GeoJsonError(e.to_string()))
            }
            GeometryFormat::Wkt => Ok(line.wkt_string()),
        }
    }
}

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{GeometryFormat, Projection};

/// Layout of the network export file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkFormat {
    /// FeatureCollection of LineString features
    #[default]
    GeoJson,
    /// `id,source,target,facility_t,cost,reverse_cost,geometry` with WKT geometry
    Csv,
}

impl NetworkFormat {
    /// Guess the format from a file extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "geojson" | "json" => Some(NetworkFormat::GeoJson),
            "csv" => Some(NetworkFormat::Csv),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NetworkConfig {
    pub path: PathBuf,
    /// Guessed from the file extension when absent
    #[serde(default)]
    pub format: Option<NetworkFormat>,
    #[serde(default)]
    pub projection: Projection,
    #[serde(default)]
    pub geometry_format: GeometryFormat,
}

impl NetworkConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            format: None,
            projection: Projection::default(),
            geometry_format: GeometryFormat::default(),
        }
    }

    pub fn resolved_format(&self) -> NetworkFormat {
        self.format
            .or_else(|| NetworkFormat::from_path(&self.path))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_extension() {
        assert_eq!(
            NetworkFormat::from_path(Path::new("net.GeoJSON")),
            Some(NetworkFormat::GeoJson)
        );
        assert_eq!(
            NetworkFormat::from_path(Path::new("noded.csv")),
            Some(NetworkFormat::Csv)
        );
        assert_eq!(NetworkFormat::from_path(Path::new("noded")), None);
    }

    #[test]
    fn explicit_format_wins() {
        let mut config = NetworkConfig::new("network.csv");
        assert_eq!(config.resolved_format(), NetworkFormat::Csv);
        config.format = Some(NetworkFormat::GeoJson);
        assert_eq!(config.resolved_format(), NetworkFormat::GeoJson);
    }
}

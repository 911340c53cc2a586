use std::f64::consts::FRAC_PI_4;

use geo::{Coord, LineString};
use serde::Deserialize;

/// Equatorial radius used by the spherical Web Mercator projection (EPSG:3857)
const EARTH_RADIUS: f64 = 6_378_137.0;
/// Latitude at which Web Mercator becomes a square
const MERCATOR_MAX_LATITUDE: f64 = 85.051_128_779_806_59;

/// Coordinate system the network geometry is stored in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Projection {
    /// Longitude/latitude degrees (EPSG:4326)
    #[default]
    Wgs84,
    /// Spherical Mercator metres (EPSG:3857)
    WebMercator,
}

impl Projection {
    /// Transform a WGS84 longitude/latitude coordinate into this projection
    pub fn to_native(self, coord: Coord<f64>) -> Coord<f64> {
        match self {
            Projection::Wgs84 => coord,
            Projection::WebMercator => {
                let lat = coord.y.clamp(-MERCATOR_MAX_LATITUDE, MERCATOR_MAX_LATITUDE);
                Coord {
                    x: EARTH_RADIUS * coord.x.to_radians(),
                    y: EARTH_RADIUS * (FRAC_PI_4 + lat.to_radians() / 2.0).tan().ln(),
                }
            }
        }
    }

    /// Transform a coordinate of this projection back into WGS84
    pub fn to_wgs84(self, coord: Coord<f64>) -> Coord<f64> {
        match self {
            Projection::Wgs84 => coord,
            Projection::WebMercator => Coord {
                x: (coord.x / EARTH_RADIUS).to_degrees(),
                y: (2.0 * (coord.y / EARTH_RADIUS).exp().atan() - 2.0 * FRAC_PI_4).to_degrees(),
            },
        }
    }

    pub fn line_to_wgs84(self, line: &LineString<f64>) -> LineString<f64> {
        match self {
            Projection::Wgs84 => line.clone(),
            Projection::WebMercator => line.coords().map(|c| self.to_wgs84(*c)).collect(),
        }
    }
}

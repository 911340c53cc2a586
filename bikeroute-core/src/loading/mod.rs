//! This module is responsible for reading a pre-noded network export
//! (GeoJSON features or a CSV table with WKT geometry) and building
//! the read-only routing network.

mod builder;
mod config;
pub mod features;
pub mod table;

pub use builder::create_network;
pub use config::{NetworkConfig, NetworkFormat};

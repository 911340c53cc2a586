//! HTTP front end for bikeway route alternatives.
//!
//! `GET /paths/{lng1}/{lat1}/{lng2}/{lat2}` snaps both coordinates onto the
//! network and returns the snapped edges plus up to `path_count` alternatives.

pub mod config;
pub mod error;
pub mod server;

pub use config::{Cli, ConfigError, ServerConfig};
pub use error::ApiError;
pub use server::{AppState, build_router};

//! Geometry utilities: projections, linear referencing and encoding

pub mod encode;
pub mod projection;
pub mod split;

pub use encode::GeometryFormat;
pub use projection::Projection;
pub use split::{LineLocation, locate_point, split_at_fraction, split_at_location};

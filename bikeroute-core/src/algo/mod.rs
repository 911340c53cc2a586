pub mod snapping;

pub use snapping::{nearest_snapped_edge, snap};

//! Core engine
//!
//! The pure heart of the crate:
//! - `grid`: rectangular cell grid model
//! - `labels`: injected label lookup
//! - `render`: box-drawing renderer
//! - `build`: grid construction from external layout shapes

pub mod build;
pub mod grid;
pub mod labels;
pub mod render;

// Re-export the main types and functions
pub use build::{grid_from_flow_pair, grid_from_flow_single, grid_from_placements, CellPlacement};
pub use grid::Grid;
pub use labels::LabelMap;
pub use render::render_grid;

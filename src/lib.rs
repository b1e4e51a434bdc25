//! # gridgram
//!
//! Box-drawing layout diagram generator for responsive CSS grid pages.
//!
//! ## Features
//!
//! - **Merged spans**: cells covering several rows/columns render as
//!   one block with borders dropped inside the span
//! - **Proper junctions**: every intersection picks the box-drawing
//!   glyph (┼ ├ ┤ ┬ ┴ …) matching exactly the line segments meeting
//!   there
//! - **Three responsive views**: 4-column desktop placement, 2-column
//!   paired flow, 1-column stacked flow
//! - **Page extraction**: reads CSS `grid-column`/`grid-row`
//!   placements and HTML source order straight from a page source
//! - **README injection**: splices the rendered block between
//!   `<!-- LAYOUT:START -->` / `<!-- LAYOUT:END -->` markers
//!
//! ## Usage Examples
//!
//! ### Rendering a grid
//!
//! ```rust
//! use gridgram::{render_diagram_with_labels, Grid, LabelMap};
//!
//! let grid = Grid::from_rows(vec![
//!     vec![Some("a".into()), Some("b".into())],
//!     vec![Some("a".into()), Some("c".into())],
//! ])
//! .unwrap();
//!
//! let mut labels = LabelMap::new();
//! labels.insert("a", "ALPHA", "A");
//!
//! let diagram = render_diagram_with_labels(&grid, &labels, 8);
//! assert!(diagram.starts_with("┌"));
//! assert!(diagram.contains("ALPHA"));
//! ```
//!
//! ### Generating the README block from a page source
//!
//! ```rust
//! let src = r#"
//! <section class="cell cell-a"></section>
//! <section class="cell cell-b"></section>
//! <style>
//! .cell-a { grid-column: 1 / 2; grid-row: 1 / 2; }
//! .cell-b { grid-column: 2 / 3; grid-row: 1 / 2; }
//! </style>
//! "#;
//!
//! let block = gridgram::page_layout_block(src).unwrap();
//! assert!(block.contains("**4 columns**"));
//! ```

/// Core engine - grid model, labels, renderer, builders
pub mod core;

/// Data layer - static default labels
pub mod data;

/// Feature modules - page extraction, view assembly, marker injection
pub mod features;

/// Utility modules
pub mod utils;

// Re-export the core engine
pub use core::build::{
    grid_from_flow_pair, grid_from_flow_single, grid_from_placements, CellPlacement,
};
pub use core::grid::Grid;
pub use core::labels::LabelMap;
pub use core::render::render_grid;

// Re-export feature modules
pub use features::markers::{splice_between_markers, LAYOUT_MARKER_END, LAYOUT_MARKER_START};
pub use features::placements::{extract_placements, extract_source_order};
pub use features::views::{render_views, ViewOptions};

// Re-export data and utilities
pub use data::labels::DEFAULT_LABELS;
pub use utils::error::{LayoutError, LayoutResult};

/// Render a grid as a box-drawing diagram using the built-in labels
///
/// # Arguments
/// * `grid` - rectangular cell grid
/// * `column_width` - interior character width per logical column
///
/// # Returns
/// The rendered diagram text
pub fn render_diagram(grid: &Grid, column_width: usize) -> String {
    render_grid(grid, &LabelMap::with_defaults(), column_width)
}

/// Render a grid as a box-drawing diagram with an injected label map
pub fn render_diagram_with_labels(grid: &Grid, labels: &LabelMap, column_width: usize) -> String {
    render_grid(grid, labels, column_width)
}

/// Build the complete layout block from a page source
///
/// Extracts grid placements and source order, renders the three
/// responsive views with default labels and widths, and returns the
/// assembled markdown block.
pub fn page_layout_block(src: &str) -> LayoutResult<String> {
    page_layout_block_with_options(src, &LabelMap::with_defaults(), &ViewOptions::default())
}

/// Build the complete layout block with custom labels and options
pub fn page_layout_block_with_options(
    src: &str,
    labels: &LabelMap,
    options: &ViewOptions,
) -> LayoutResult<String> {
    let placements = extract_placements(src)?;
    let order = extract_source_order(src)?;
    render_views(&placements, &order, labels, options)
}

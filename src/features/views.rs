//! Responsive view assembly
//!
//! Renders the same cell set at three responsive breakpoints and
//! assembles the markdown block that gets injected into the README.

use indexmap::IndexMap;

use crate::core::build::{
    grid_from_flow_pair, grid_from_flow_single, grid_from_placements, CellPlacement,
};
use crate::core::labels::LabelMap;
use crate::core::render::render_grid;
use crate::utils::error::LayoutResult;

/// View assembly options
#[derive(Debug, Clone)]
pub struct ViewOptions {
    /// Column width of the 4-column desktop view
    pub width_four: usize,
    /// Column width of the 2-column tablet view
    pub width_two: usize,
    /// Column width of the 1-column mobile view
    pub width_single: usize,
    /// Identifier that always spans the full width of the tablet view
    pub full_width_id: String,
}

impl Default for ViewOptions {
    fn default() -> Self {
        ViewOptions {
            width_four: 16,
            width_two: 20,
            width_single: 40,
            full_width_id: "c".to_string(),
        }
    }
}

impl ViewOptions {
    /// Narrow widths for embedding in space-constrained documents
    pub fn compact() -> Self {
        ViewOptions {
            width_four: 10,
            width_two: 14,
            width_single: 24,
            ..ViewOptions::default()
        }
    }
}

/// Assemble the full layout block: all three views plus source order
pub fn render_views(
    placements: &IndexMap<String, CellPlacement>,
    order: &[String],
    labels: &LabelMap,
    options: &ViewOptions,
) -> LayoutResult<String> {
    let four = render_grid(
        &grid_from_placements(placements)?,
        labels,
        options.width_four,
    );
    let two = render_grid(
        &grid_from_flow_pair(order, &options.full_width_id)?,
        labels,
        options.width_two,
    );
    let single = render_grid(&grid_from_flow_single(order)?, labels, options.width_single);

    let order_line = order
        .iter()
        .map(|id| id.to_uppercase())
        .collect::<Vec<_>>()
        .join(" → ");

    Ok(format!(
        "**4 columns** (desktop, 768px+)\n\n```\n{}\n```\n\n\
         **2 columns** (tablet, 580px+)\n\n```\n{}\n```\n\n\
         **1 column** (mobile)\n\n```\n{}\n```\n\n\
         Source order: {}",
        four, two, single, order_line
    ))
}

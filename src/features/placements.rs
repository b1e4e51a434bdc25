//! Page source extraction
//!
//! Pulls the layout facts out of a page source: per-cell CSS grid
//! placements for the desktop view and the HTML source order for the
//! flow views.

use indexmap::IndexMap;
use lazy_static::lazy_static;
use regex::Regex;

use crate::core::build::CellPlacement;
use crate::utils::error::{LayoutError, LayoutResult};

lazy_static! {
    /// `.cell-x { ... }` style blocks that mention grid placement
    static ref CELL_BLOCK: Regex =
        Regex::new(r"\.cell-([a-z][a-z0-9]*)\s*\{([^}]*grid-(?:column|row)[^}]*)\}").unwrap();
    /// `grid-column: start / end`
    static ref GRID_COLUMN: Regex = Regex::new(r"grid-column:\s*(\d+)\s*/\s*(\d+)").unwrap();
    /// `grid-row: start / end`
    static ref GRID_ROW: Regex = Regex::new(r"grid-row:\s*(\d+)\s*/\s*(\d+)").unwrap();
    /// `class="cell cell-x"` in document order
    static ref SOURCE_CELL: Regex =
        Regex::new(r#"class="cell\s+cell-([a-z][a-z0-9]*)""#).unwrap();
}

/// Extract per-identifier grid placements from a page source
///
/// Every `.cell-<id>` style block carrying grid placement must declare
/// both `grid-column` and `grid-row` as explicit `start / end` line
/// pairs; a block with only one of the two fails with
/// `MissingSpanData`. The returned map preserves declaration order.
pub fn extract_placements(src: &str) -> LayoutResult<IndexMap<String, CellPlacement>> {
    let mut placements = IndexMap::new();
    for caps in CELL_BLOCK.captures_iter(src) {
        let id = caps[1].to_string();
        let block = &caps[2];
        let row = capture_range(&GRID_ROW, block);
        let col = capture_range(&GRID_COLUMN, block);
        match (row, col) {
            (Some(row), Some(col)) => {
                placements.insert(id, CellPlacement::new(row, col));
            }
            _ => return Err(LayoutError::missing_span(id)),
        }
    }
    if placements.is_empty() {
        return Err(LayoutError::empty_input("no grid placements in page source"));
    }
    Ok(placements)
}

fn capture_range(pattern: &Regex, block: &str) -> Option<(usize, usize)> {
    let caps = pattern.captures(block)?;
    let start = caps[1].parse().ok()?;
    let end = caps[2].parse().ok()?;
    Some((start, end))
}

/// Extract the cell order from the HTML source
pub fn extract_source_order(src: &str) -> LayoutResult<Vec<String>> {
    let order: Vec<String> = SOURCE_CELL
        .captures_iter(src)
        .map(|caps| caps[1].to_string())
        .collect();
    if order.is_empty() {
        return Err(LayoutError::empty_input("no cells in page source"));
    }
    Ok(order)
}

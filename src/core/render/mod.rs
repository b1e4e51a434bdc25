//! Box-drawing grid renderer
//!
//! Renders a rectangular grid of labeled slots into a diagram built
//! from single-line box-drawing characters. Adjacent slots holding the
//! same identifier merge into one cell: the border between them is
//! dropped, and every junction where regions meet picks the glyph
//! matching exactly the line segments that remain.

mod junction;

#[cfg(test)]
mod tests;

use junction::junction_glyph;

use crate::core::grid::Grid;
use crate::core::labels::LabelMap;

/// Render a grid as a box-drawing diagram
///
/// `column_width` is the interior character width reserved per logical
/// column; a cell spanning several columns absorbs the widths of the
/// borders it removes. The output is a newline-joined block: a border
/// line above each grid row, two content lines per row, and a closing
/// bottom border. Every line has character length
/// `cols * (column_width + 1) + 1`. A grid with no rows or no columns
/// renders as an empty string.
///
/// Pure and total: no I/O, no state, and a text result for every
/// rectangular grid and positive width.
pub fn render_grid(grid: &Grid, labels: &LabelMap, column_width: usize) -> String {
    let rows = grid.row_count();
    let cols = grid.col_count();
    if rows == 0 || cols == 0 {
        return String::new();
    }

    let mut lines = Vec::with_capacity(rows * 3 + 1);
    for r in 0..rows {
        lines.push(border_line(grid, r, column_width));

        let spans = row_spans(grid, r);
        for line_idx in 0..2 {
            let mut content = String::new();
            for span in &spans {
                let inner_width = column_width * span.len + (span.len - 1);
                content.push('│');
                let text = span_text(grid, labels, r, span, line_idx);
                push_fitted(&mut content, &text, inner_width);
            }
            content.push('│');
            lines.push(content);
        }
    }
    lines.push(border_line(grid, rows, column_width));

    lines.join("\n")
}

/// Border line above grid row `r` (`r == row_count` yields the bottom border)
fn border_line(grid: &Grid, r: usize, column_width: usize) -> String {
    let cols = grid.col_count();
    let mut line = String::new();
    for c in 0..cols {
        line.push(corner_glyph(grid, r, c));
        // Inside a vertically merged span no border separates the two
        // rows; the gap stays blank.
        let merged = r > 0
            && grid.slot(r - 1, c).is_some()
            && grid.slot(r - 1, c) == grid.slot(r, c);
        let fill = if merged { ' ' } else { '─' };
        for _ in 0..column_width {
            line.push(fill);
        }
    }
    line.push(corner_glyph(grid, r, cols));
    line
}

/// Pick the glyph at the corner where four (possibly empty) grid
/// regions meet
///
/// A segment leaves the corner wherever the cell identity changes
/// across that boundary. The outer border is always drawn, so an edge
/// position forces its along-edge flags on and its outward flag off;
/// the same rule yields the dedicated corner and edge-tee glyphs
/// without a second lookup path.
fn corner_glyph(grid: &Grid, r: usize, c: usize) -> char {
    let at_top = r == 0;
    let at_bottom = r == grid.row_count();
    let at_left = c == 0;
    let at_right = c == grid.col_count();

    let (r, c) = (r as isize, c as isize);
    let top_left = grid.slot_signed(r - 1, c - 1);
    let top_right = grid.slot_signed(r - 1, c);
    let bottom_left = grid.slot_signed(r, c - 1);
    let bottom_right = grid.slot_signed(r, c);

    let up = !at_top && (at_left || at_right || top_left != top_right);
    let down = !at_bottom && (at_left || at_right || bottom_left != bottom_right);
    let left = !at_left && (at_top || at_bottom || top_left != bottom_left);
    let right = !at_right && (at_top || at_bottom || top_right != bottom_right);

    junction_glyph(up, right, down, left)
}

/// Maximal run of identical consecutive slots within one grid row
struct RowSpan<'a> {
    start: usize,
    len: usize,
    id: Option<&'a str>,
}

fn row_spans(grid: &Grid, r: usize) -> Vec<RowSpan<'_>> {
    let cols = grid.col_count();
    let mut spans = Vec::new();
    let mut c = 0;
    while c < cols {
        let id = grid.slot(r, c);
        let mut len = 1;
        while c + len < cols && grid.slot(r, c + len) == id {
            len += 1;
        }
        spans.push(RowSpan { start: c, len, id });
        c += len;
    }
    spans
}

/// Content text for one span on one of its two lines
///
/// Only the first grid row of a vertically merged span carries text;
/// continuation rows and empty spans stay blank.
fn span_text(
    grid: &Grid,
    labels: &LabelMap,
    r: usize,
    span: &RowSpan<'_>,
    line_idx: usize,
) -> String {
    let Some(id) = span.id else {
        return String::new();
    };
    let first_row = r == 0 || grid.slot(r - 1, span.start) != span.id;
    if !first_row {
        return String::new();
    }
    if line_idx == 0 {
        format!("  {}", labels.long(id))
    } else {
        format!("  [{}]", labels.short(id))
    }
}

/// Append `text` truncated or right-padded to exactly `width` characters
fn push_fitted(out: &mut String, text: &str, width: usize) {
    let mut written = 0;
    for ch in text.chars().take(width) {
        out.push(ch);
        written += 1;
    }
    for _ in written..width {
        out.push(' ');
    }
}

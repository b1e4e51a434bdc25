//! Marker-delimited document injection
//!
//! Splices a generated block into a surrounding document between
//! fixed start/end markers, leaving everything else untouched.

use crate::utils::error::{LayoutError, LayoutResult};

/// Start marker delimiting the generated layout block
pub const LAYOUT_MARKER_START: &str = "<!-- LAYOUT:START -->";
/// End marker delimiting the generated layout block
pub const LAYOUT_MARKER_END: &str = "<!-- LAYOUT:END -->";

/// Replace the content between `start` and `end` markers with `block`
///
/// The markers stay in place and the block is surrounded by single
/// newlines, so re-splicing an already-injected document is
/// idempotent. Fails when either marker is missing, so the caller
/// never silently writes an unchanged document.
pub fn splice_between_markers(
    doc: &str,
    block: &str,
    start: &str,
    end: &str,
) -> LayoutResult<String> {
    let start_at = doc
        .find(start)
        .ok_or_else(|| LayoutError::parse(format!("start marker '{}' not found", start)))?;
    let after_start = start_at + start.len();
    let end_at = doc[after_start..]
        .find(end)
        .map(|at| after_start + at)
        .ok_or_else(|| LayoutError::parse(format!("end marker '{}' not found", end)))?;

    let mut out = String::with_capacity(doc.len() + block.len());
    out.push_str(&doc[..after_start]);
    out.push('\n');
    out.push_str(block);
    out.push('\n');
    out.push_str(&doc[end_at..]);
    Ok(out)
}

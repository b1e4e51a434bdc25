//! Feature modules - document-level capabilities
//!
//! Specialized handlers around the core renderer:
//! - Page source extraction (CSS placements, HTML source order)
//! - Responsive view assembly
//! - Marker-delimited README injection

pub mod markers;
pub mod placements;
pub mod views;

// Re-export commonly used items
pub use markers::{splice_between_markers, LAYOUT_MARKER_END, LAYOUT_MARKER_START};
pub use placements::{extract_placements, extract_source_order};
pub use views::{render_views, ViewOptions};

//! Data layer - static mappings
//!
//! Static data used when no explicit configuration is injected:
//! - Default cell labels for the stock dashboard layout

pub mod labels;

pub use labels::{default_labels, DEFAULT_LABELS};

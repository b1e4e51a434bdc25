//! Utility modules
//!
//! - `error`: unified error and result types

pub mod error;

pub use error::{LayoutError, LayoutResult};

//! Error handling for layout diagram generation
//!
//! This module provides a unified error type and result type for all
//! grid construction and page extraction operations.

use std::fmt;

/// Layout error type
#[derive(Debug, Clone)]
pub enum LayoutError {
    /// A grid (or a placement that would produce one) is not rectangular
    InvalidGridShape { message: String },
    /// A cell is missing required placement data
    MissingSpanData { identifier: String },
    /// An input collection that must be non-empty is empty
    EmptyInput { message: String },
    /// Input text could not be parsed
    ParseError { message: String },
    /// IO error (for file operations)
    IoError { message: String },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::InvalidGridShape { message } => {
                write!(f, "Invalid grid shape: {}", message)
            }
            LayoutError::MissingSpanData { identifier } => {
                write!(f, "Missing placement data for cell '{}'", identifier)
            }
            LayoutError::EmptyInput { message } => {
                write!(f, "Empty input: {}", message)
            }
            LayoutError::ParseError { message } => {
                write!(f, "Parse error: {}", message)
            }
            LayoutError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
        }
    }
}

impl std::error::Error for LayoutError {}

impl From<std::io::Error> for LayoutError {
    fn from(err: std::io::Error) -> Self {
        LayoutError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type for layout operations
pub type LayoutResult<T> = Result<T, LayoutError>;

// Convenience constructors for errors
impl LayoutError {
    pub fn invalid_grid(message: impl Into<String>) -> Self {
        LayoutError::InvalidGridShape {
            message: message.into(),
        }
    }

    pub fn missing_span(identifier: impl Into<String>) -> Self {
        LayoutError::MissingSpanData {
            identifier: identifier.into(),
        }
    }

    pub fn empty_input(message: impl Into<String>) -> Self {
        LayoutError::EmptyInput {
            message: message.into(),
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        LayoutError::ParseError {
            message: message.into(),
        }
    }

    pub fn io(message: impl Into<String>) -> Self {
        LayoutError::IoError {
            message: message.into(),
        }
    }
}

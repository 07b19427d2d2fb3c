//! Validation error types

use std::fmt;

/// Validation error for caller-supplied values
#[derive(Debug, Clone)]
pub enum ValidationError {
    /// Not a column callers are allowed to sort by
    UnsortableColumn { value: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsortableColumn { value } => {
                write!(f, "'{}' is not a sortable column", value)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

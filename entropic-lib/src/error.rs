//! Error types for the storefront library
//!
//! The filter, scoring, sort and cart operations are total and never
//! produce these. Errors only come from loading data off disk, resolving
//! ids against the catalog, and validating user-submitted forms.

use std::fmt;

use thiserror::Error;

/// Result type alias for storefront operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in storefront operations
#[derive(Error, Debug)]
pub enum Error {
    /// Catalog data violates an invariant (duplicate id, bad price)
    #[error("catalog error: {0}")]
    Catalog(String),

    /// Product or other record not found
    #[error("not found: {0}")]
    NotFound(String),

    /// Invalid input provided
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// One or more form fields failed validation
    #[error("validation failed: {}", join_fields(.0))]
    Validation(Vec<FieldError>),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A single rejected form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Name of the offending field (e.g. "email")
    pub field: &'static str,
    /// Human readable reason shown next to the field
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn join_fields(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

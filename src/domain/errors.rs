//! Domain validation errors.

use std::fmt;

/// Errors that can occur during domain value object validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided ID is empty.
    EmptyId,

    /// The provided phone number is invalid.
    InvalidPhone(String),

    /// A match query was built without any candidate names.
    EmptyQuery,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "ID cannot be empty"),
            Self::InvalidPhone(phone) => write!(f, "Invalid phone number: {}", phone),
            Self::EmptyQuery => write!(f, "Match query needs at least one name"),
        }
    }
}

impl std::error::Error for ValidationError {}

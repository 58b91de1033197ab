//! PhoneLabel value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Label attached to a phone number in the address book (`"mobile"`, `"home"`,
/// `"work"`, or whatever the platform stores).
///
/// Labels are compared verbatim. The label filter of a search keeps a number
/// only when its label is equal to the requested one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhoneLabel(String);

impl PhoneLabel {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PhoneLabel {
    fn from(label: &str) -> Self {
        Self::new(label)
    }
}

impl From<String> for PhoneLabel {
    fn from(label: String) -> Self {
        Self(label)
    }
}

impl fmt::Display for PhoneLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

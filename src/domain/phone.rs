//! PhoneNumber value object.

use super::errors::ValidationError;
use crate::matching::normalize;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A phone number as stored in the address book.
///
/// The raw text is kept verbatim (`010-1234-5678`, `+82 10 1234 5678`, ...).
/// Matching, prefix checks and tokens always work on [`PhoneNumber::normalized`].
///
/// # Example
///
/// ```
/// use contact_resolver::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("010-1234-5678").unwrap();
/// assert_eq!(phone.normalized(), "01012345678");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber.
    ///
    /// Any text with at least one digit is accepted, since address books
    /// hold things like `02-555-0000 ext 12` or `1-800-FLOWERS`.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !Self::is_valid(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    fn is_valid(phone: &str) -> bool {
        phone.chars().any(|c| c.is_ascii_digit())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The number with every formatting character removed.
    pub fn normalized(&self) -> String {
        normalize(&self.0)
    }

    /// The normalized form as a `PhoneNumber`.
    pub fn to_normalized(&self) -> PhoneNumber {
        // normalizing keeps every digit, so the result is still valid
        Self(self.normalized())
    }

    /// Whether the normalized number starts with `prefix` (e.g. `"01"` for
    /// mobile numbers).
    ///
    /// Formatting is ignored, so `(010) 1234-5678` counts as mobile even
    /// though its raw text starts with `(`.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.normalized().starts_with(prefix)
    }
}

impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

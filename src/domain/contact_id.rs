//! ContactId value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Identifier of an address book entry, as assigned by the contacts provider.
///
/// Identifiers are opaque to the resolver; the only rule is that they are
/// not empty.
///
/// # Example
///
/// ```
/// use contact_resolver::domain::ContactId;
///
/// let id = ContactId::new("AB12-CD34:ABPerson").unwrap();
/// assert_eq!(id.as_str(), "AB12-CD34:ABPerson");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContactId(String);

impl ContactId {
    /// Create a new ContactId, rejecting empty identifiers.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(ValidationError::EmptyId);
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Serialize for ContactId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ContactId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ContactId::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_id_rejects_empty() {
        assert_eq!(ContactId::new(""), Err(ValidationError::EmptyId));
    }

    #[test]
    fn test_contact_id_round_trips_as_plain_string() {
        let id = ContactId::new("410FE041-5C4E").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"410FE041-5C4E\"");

        let parsed: ContactId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_contact_id_deserialization_empty_fails() {
        let result: Result<ContactId, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }
}

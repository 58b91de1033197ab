//! Contact record as enumerated from the device address book.

use crate::domain::{ContactId, PhoneLabel, PhoneNumber};
use serde::{Deserialize, Serialize};

/// A phone number together with its optional address book label.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LabeledNumber {
    pub number: PhoneNumber,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<PhoneLabel>,
}

impl LabeledNumber {
    pub fn new(number: PhoneNumber, label: Option<PhoneLabel>) -> Self {
        Self { number, label }
    }
}

/// One entry of the device address book.
///
/// The display name used for matching is [`ContactRecord::full_name`]: family
/// name followed by given name with no separator, which is how names are
/// written in the target locale (`"김" + "민수"` → `"김민수"`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactRecord {
    pub id: ContactId,

    #[serde(default)]
    pub family_name: String,

    #[serde(default)]
    pub given_name: String,

    /// Phone numbers in address book order
    #[serde(default)]
    pub phone_numbers: Vec<LabeledNumber>,
}

impl ContactRecord {
    /// Create a contact with no phone numbers.
    pub fn new(id: ContactId, family_name: impl Into<String>, given_name: impl Into<String>) -> Self {
        Self {
            id,
            family_name: family_name.into(),
            given_name: given_name.into(),
            phone_numbers: Vec::new(),
        }
    }

    /// Builder-style helper to append a number.
    pub fn with_number(mut self, number: PhoneNumber, label: Option<PhoneLabel>) -> Self {
        self.phone_numbers.push(LabeledNumber::new(number, label));
        self
    }

    /// Family name + given name, in that order.
    pub fn full_name(&self) -> String {
        format!("{}{}", self.family_name, self.given_name)
    }

    /// Length of the full name in characters (not bytes).
    pub fn full_name_len(&self) -> usize {
        self.family_name.chars().count() + self.given_name.chars().count()
    }

    pub fn has_phone_numbers(&self) -> bool {
        !self.phone_numbers.is_empty()
    }

    /// Copy of this record carrying only `numbers`.
    pub fn with_numbers(&self, numbers: Vec<LabeledNumber>) -> Self {
        Self {
            id: self.id.clone(),
            family_name: self.family_name.clone(),
            given_name: self.given_name.clone(),
            phone_numbers: numbers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(family: &str, given: &str) -> ContactRecord {
        ContactRecord::new(ContactId::new("c-1").unwrap(), family, given)
    }

    #[test]
    fn test_full_name_is_family_then_given() {
        let contact = record("김", "민수");
        assert_eq!(contact.full_name(), "김민수");
        assert_eq!(contact.full_name_len(), 3);

        let contact = record("Kim", "Alice");
        assert_eq!(contact.full_name(), "KimAlice");
    }

    #[test]
    fn test_with_numbers_keeps_identity() {
        let contact = record("Kim", "Alice")
            .with_number(PhoneNumber::new("010-1111-2222").unwrap(), Some("mobile".into()))
            .with_number(PhoneNumber::new("02-123-4567").unwrap(), Some("home".into()));

        let filtered = contact.with_numbers(contact.phone_numbers[1..].to_vec());
        assert_eq!(filtered.id, contact.id);
        assert_eq!(filtered.full_name(), contact.full_name());
        assert_eq!(filtered.phone_numbers.len(), 1);
        assert_eq!(filtered.phone_numbers[0].label, Some(PhoneLabel::from("home")));
    }

    #[test]
    fn test_deserialize_address_book_entry() {
        let json = r#"{
            "id": "A1",
            "family_name": "Park",
            "given_name": "Alice",
            "phone_numbers": [
                {"number": "010-3333-4444", "label": "mobile"},
                {"number": "031-000-0000"}
            ]
        }"#;

        let contact: ContactRecord = serde_json::from_str(json).unwrap();
        assert_eq!(contact.full_name(), "ParkAlice");
        assert_eq!(contact.phone_numbers.len(), 2);
        assert!(contact.phone_numbers[1].label.is_none());
    }

    #[test]
    fn test_deserialize_defaults_missing_fields() {
        let contact: ContactRecord = serde_json::from_str(r#"{"id": "A2"}"#).unwrap();
        assert_eq!(contact.full_name(), "");
        assert!(!contact.has_phone_numbers());
    }
}

//! Search results returned to the protocol layer.

use super::query::MatchType;
use crate::domain::{PhoneLabel, Token};
use crate::models::ContactRecord;
use serde::Serialize;

/// A matched contact with the numbers selected for it and one token per
/// number, in the same order.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchedContact {
    pub contact: ContactRecord,
    pub tokens: Vec<Token>,
}

/// Outcome of a search: the match type that was reached and the ordered
/// contacts.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    pub match_type: MatchType,
    pub contacts: Vec<MatchedContact>,
}

/// One selectable recipient as presented to the voice agent: a name and a
/// token, never a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecipientCandidate {
    pub name: String,
    pub token: Token,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<PhoneLabel>,
}

impl MatchResult {
    pub fn empty(match_type: MatchType) -> Self {
        Self {
            match_type,
            contacts: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Split every contact into one candidate per phone number.
    ///
    /// The agent addresses a single number at a time, so a contact with a
    /// mobile and a work number becomes two candidates with the same name.
    pub fn recipients(&self) -> Vec<RecipientCandidate> {
        self.contacts
            .iter()
            .flat_map(|matched| {
                let name = matched.contact.full_name();
                matched
                    .contact
                    .phone_numbers
                    .iter()
                    .zip(&matched.tokens)
                    .map(move |(number, token)| RecipientCandidate {
                        name: name.clone(),
                        token: token.clone(),
                        label: number.label.clone(),
                    })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ContactId, PhoneNumber};

    #[test]
    fn test_recipients_split_per_number() {
        let contact = ContactRecord::new(ContactId::new("1").unwrap(), "김", "민수")
            .with_number(PhoneNumber::new("010-1111-2222").unwrap(), Some("mobile".into()))
            .with_number(PhoneNumber::new("02-333-4444").unwrap(), None);

        let result = MatchResult {
            match_type: MatchType::Exact,
            contacts: vec![MatchedContact {
                contact,
                tokens: vec![Token::from("t1"), Token::from("t2")],
            }],
        };

        let recipients = result.recipients();
        assert_eq!(recipients.len(), 2);
        assert_eq!(recipients[0].name, "김민수");
        assert_eq!(recipients[0].token, Token::from("t1"));
        assert_eq!(recipients[0].label, Some(PhoneLabel::from("mobile")));
        assert_eq!(recipients[1].token, Token::from("t2"));
        assert!(recipients[1].label.is_none());
    }

    #[test]
    fn test_recipient_json_has_no_number() {
        let candidate = RecipientCandidate {
            name: "AliceKim".to_string(),
            token: Token::from("abcd"),
            label: None,
        };

        let json = serde_json::to_value(&candidate).unwrap();
        assert_eq!(json, serde_json::json!({"name": "AliceKim", "token": "abcd"}));
    }

    #[test]
    fn test_empty_result() {
        let result = MatchResult::empty(MatchType::Partial);
        assert!(result.is_empty());
        assert!(result.recipients().is_empty());
    }
}

//! Append-only token → phone number map.

use crate::domain::{PhoneNumber, Token};
use std::collections::HashMap;

/// Maps every token handed out in a search result back to its normalized
/// phone number.
///
/// Entries are never evicted; the store lives as long as the resolver. It is
/// owned by the resolver worker, which is the only code path that inserts.
#[derive(Debug, Default)]
pub struct TokenStore {
    entries: HashMap<Token, PhoneNumber>,
}

impl TokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Token for `number` of the contact named `full_name`, recording the
    /// mapping on first use.
    pub fn token_for(&mut self, full_name: &str, number: &PhoneNumber) -> Token {
        let normalized = number.to_normalized();
        let token = Token::derive(full_name, normalized.as_str());

        self.entries.entry(token.clone()).or_insert(normalized);
        token
    }

    /// Normalized number behind `token`, if this store issued it.
    pub fn resolve(&self, token: &Token) -> Option<&PhoneNumber> {
        self.entries.get(token)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

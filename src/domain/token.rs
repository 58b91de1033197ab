//! Recipient token value object.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// Number of digest bytes kept in a token.
const TOKEN_BYTES: usize = 8;

/// Opaque stand-in for a `(contact name, phone number)` pair.
///
/// Tokens are handed to the protocol layer in place of phone numbers. They
/// are derived deterministically, so the same pair always yields the same
/// token within and across runs. Only the resolver's token store can map a
/// token back to its number.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
    /// Derive the token for a contact's full name and a normalized number.
    ///
    /// The digest input is `"name: {full_name}, phoneNumber: {number}"`; the
    /// token is the first 8 bytes of its SHA-256 rendered as lowercase hex.
    pub fn derive(full_name: &str, normalized_number: &str) -> Self {
        let digest = Sha256::digest(
            format!("name: {}, phoneNumber: {}", full_name, normalized_number).as_bytes(),
        );

        let hex = digest[..TOKEN_BYTES]
            .iter()
            .map(|byte| format!("{:02x}", byte))
            .collect::<String>();

        Self(hex)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Tokens arrive back from the protocol layer as plain strings.
impl From<String> for Token {
    fn from(token: String) -> Self {
        Self(token)
    }
}

impl From<&str> for Token {
    fn from(token: &str) -> Self {
        Self(token.to_string())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

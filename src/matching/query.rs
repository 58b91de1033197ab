//! Search queries handed over by the protocol layer.

use crate::domain::{PhoneLabel, ValidationError};
use serde::{Deserialize, Serialize};

/// How a set of contacts was matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    /// Normalized full name equals a query name
    Exact,

    /// Normalized full name contains a query name, or the reverse
    Partial,
}

/// A recipient lookup: candidate names, an optional number label, and a hint
/// about the kind of match the caller expects.
///
/// The hint is only a hint. An exact hit always wins over partial search, and
/// an `Exact` hint forbids falling back to partial search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchQuery {
    names: Vec<String>,
    label: Option<PhoneLabel>,
    hint: MatchType,
}

impl MatchQuery {
    /// Create a query; at least one name is required.
    pub fn new(names: Vec<String>, hint: MatchType) -> Result<Self, ValidationError> {
        if names.is_empty() {
            return Err(ValidationError::EmptyQuery);
        }

        Ok(Self {
            names,
            label: None,
            hint,
        })
    }

    /// Restrict results to numbers carrying `label`.
    pub fn with_label(mut self, label: impl Into<PhoneLabel>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Build the query for a candidates request from the voice agent.
    ///
    /// Names the server already resolved are looked up exactly. Without any,
    /// the name the user spoke is looked up partially. Returns `None` when
    /// neither is available.
    pub fn from_candidates(
        server_candidates: &[String],
        intended_name: Option<&str>,
        label: Option<&str>,
    ) -> Option<Self> {
        let query = if !server_candidates.is_empty() {
            Self::new(server_candidates.to_vec(), MatchType::Exact).ok()?
        } else {
            Self::new(vec![intended_name?.to_string()], MatchType::Partial).ok()?
        };

        Some(match label {
            Some(label) => query.with_label(label),
            None => query,
        })
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn label(&self) -> Option<&PhoneLabel> {
        self.label.as_ref()
    }

    pub fn hint(&self) -> MatchType {
        self.hint
    }
}

//! Recipient name matching.
//!
//! This module normalizes spoken names, matches them against an address
//! book snapshot, selects the numbers to offer and attaches tokens.

pub mod engine;
pub mod normalizer;
pub mod number_filter;
pub mod query;
pub mod result;

pub use engine::MatchingEngine;
pub use normalizer::normalize;
pub use number_filter::select_numbers;
pub use query::{MatchQuery, MatchType};
pub use result::{MatchResult, MatchedContact, RecipientCandidate};

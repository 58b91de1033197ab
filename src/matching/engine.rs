//! Recipient matching against an address book snapshot.
//!
//! Matching runs in two phases:
//! - exact: normalized full name equals a normalized query name
//! - partial: one normalized name contains the other, ranked by how close
//!   the two lengths are
//!
//! Any exact hit ends the search. Partial search only runs when nothing
//! matched exactly and the caller allowed it.

use super::normalizer::normalize;
use super::number_filter::select_numbers;
use super::query::{MatchQuery, MatchType};
use super::result::{MatchResult, MatchedContact};
use crate::cache::{CacheSnapshot, CachedContact};
use crate::config::{Config, DEFAULT_MAX_RECIPIENT_COUNT, DEFAULT_MOBILE_PREFIX};
use crate::models::ContactRecord;
use crate::tokens::TokenStore;
use std::cmp::Ordering;

/// Finds, ranks and tokenizes the contacts a spoken name refers to.
#[derive(Debug, Clone)]
pub struct MatchingEngine {
    max_recipient_count: usize,
    mobile_prefix: String,
}

impl MatchingEngine {
    pub fn new(max_recipient_count: usize, mobile_prefix: impl Into<String>) -> Self {
        Self {
            max_recipient_count,
            mobile_prefix: mobile_prefix.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.max_recipient_count, config.mobile_prefix.clone())
    }

    pub fn max_recipient_count(&self) -> usize {
        self.max_recipient_count
    }

    /// Run `query` against `snapshot`.
    ///
    /// Every number in the result gets a token from `tokens`, which records
    /// new tokens as a side effect. Never fails: no match is an empty result
    /// carrying the match type that was reached.
    pub fn search(
        &self,
        query: &MatchQuery,
        snapshot: &CacheSnapshot,
        tokens: &mut TokenStore,
    ) -> MatchResult {
        let names: Vec<String> = query
            .names()
            .iter()
            .map(|name| normalize(name))
            .collect();

        let exact = Self::exact_matches(&names, snapshot);

        let (match_type, matched) = if !exact.is_empty() || query.hint() == MatchType::Exact {
            (MatchType::Exact, exact)
        } else {
            let partial = Self::partial_matches(&names, snapshot);
            // ranking only looks at the first name
            let reference_len = names.first().map_or(0, |name| name.chars().count());
            (MatchType::Partial, Self::rank(partial, reference_len))
        };

        tracing::debug!(
            names = names.len(),
            match_type = ?match_type,
            matched = matched.len(),
            "Matched contacts before number selection"
        );

        let contacts = matched
            .into_iter()
            .filter_map(|cached| select_numbers(&cached.record, query.label(), &self.mobile_prefix))
            .take(self.max_recipient_count)
            .map(|contact| Self::attach_tokens(contact, tokens))
            .collect();

        MatchResult {
            match_type,
            contacts,
        }
    }

    /// Contacts whose normalized name equals a query name, in query order
    /// and then snapshot order. A contact matching two names appears twice.
    fn exact_matches<'a>(names: &[String], snapshot: &'a CacheSnapshot) -> Vec<&'a CachedContact> {
        let mut matched = Vec::new();

        for name in names.iter().filter(|name| !name.is_empty()) {
            matched.extend(
                snapshot
                    .contacts()
                    .iter()
                    .filter(|contact| contact.normalized_name == *name),
            );
        }

        matched
    }

    /// Contacts whose normalized name contains a query name or is contained
    /// in one, in query order and then snapshot order, without de-duplication.
    fn partial_matches<'a>(names: &[String], snapshot: &'a CacheSnapshot) -> Vec<&'a CachedContact> {
        let mut matched = Vec::new();

        for name in names.iter().filter(|name| !name.is_empty()) {
            matched.extend(snapshot.contacts().iter().filter(|contact| {
                !contact.normalized_name.is_empty()
                    && (contact.normalized_name.contains(name.as_str())
                        || name.contains(contact.normalized_name.as_str()))
            }));
        }

        matched
    }

    /// Order partial matches with [`compare_partial`].
    ///
    /// `compare_partial` is not transitive across mixed name lengths and
    /// `slice::sort_by` may panic on such a comparator, so this is a plain
    /// stable merge sort.
    fn rank<'a>(matched: Vec<&'a CachedContact>, reference_len: usize) -> Vec<&'a CachedContact> {
        if matched.len() <= 1 {
            return matched;
        }

        let mut left = matched;
        let right = left.split_off(left.len() / 2);
        let left = Self::rank(left, reference_len);
        let right = Self::rank(right, reference_len);

        let mut merged = Vec::with_capacity(left.len() + right.len());
        let mut left = left.into_iter().peekable();
        let mut right = right.into_iter().peekable();

        while let (Some(l), Some(r)) = (left.peek(), right.peek()) {
            if compare_partial(reference_len, r, l) == Ordering::Less {
                merged.extend(right.next());
            } else {
                merged.extend(left.next());
            }
        }
        merged.extend(left);
        merged.extend(right);

        merged
    }

    /// `max(q/r, r/q)` over character counts; 1.0 is a perfect length match.
    fn similarity(query_len: usize, name_len: usize) -> f64 {
        match (query_len, name_len) {
            (0, 0) => 1.0,
            (0, _) | (_, 0) => f64::INFINITY,
            (q, r) => {
                let (q, r) = (q as f64, r as f64);
                (q / r).max(r / q)
            }
        }
    }

    fn attach_tokens(contact: ContactRecord, tokens: &mut TokenStore) -> MatchedContact {
        let full_name = contact.full_name();
        let issued = contact
            .phone_numbers
            .iter()
            .map(|entry| tokens.token_for(&full_name, &entry.number))
            .collect();

        MatchedContact {
            contact,
            tokens: issued,
        }
    }
}

impl Default for MatchingEngine {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_RECIPIENT_COUNT, DEFAULT_MOBILE_PREFIX)
    }
}

/// Ranking order of two partial matches.
///
/// Names of equal length (raw full name, in characters) are ordered by full
/// name. Otherwise the closer normalized length to the reference name comes
/// first, with full name deciding equal scores.
pub fn compare_partial(reference_len: usize, a: &CachedContact, b: &CachedContact) -> Ordering {
    if a.full_name_len == b.full_name_len {
        return a.full_name.cmp(&b.full_name);
    }

    MatchingEngine::similarity(reference_len, a.normalized_len)
        .total_cmp(&MatchingEngine::similarity(reference_len, b.normalized_len))
        .then_with(|| a.full_name.cmp(&b.full_name))
}

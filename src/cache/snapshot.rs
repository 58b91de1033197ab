//! Immutable address book snapshots.

use crate::matching::normalize;
use crate::models::ContactRecord;
use chrono::{DateTime, Utc};

/// A contact together with the name forms used for matching, computed once
/// when the snapshot is built.
#[derive(Debug, Clone, PartialEq)]
pub struct CachedContact {
    pub record: ContactRecord,

    /// Family name + given name
    pub full_name: String,

    /// Length of `full_name` in characters
    pub full_name_len: usize,

    /// `full_name` after normalization
    pub normalized_name: String,

    /// Length of `normalized_name` in characters
    pub normalized_len: usize,
}

impl CachedContact {
    pub fn new(record: ContactRecord) -> Self {
        let full_name = record.full_name();
        let full_name_len = record.full_name_len();
        let normalized_name = normalize(&full_name);
        let normalized_len = normalized_name.chars().count();

        Self {
            record,
            full_name,
            full_name_len,
            normalized_name,
            normalized_len,
        }
    }
}

/// The complete set of searchable contacts at one point in time.
///
/// Contacts are ordered by full-name length, shortest first; contacts of
/// equal length keep the order the provider returned them in. Contacts
/// without any phone number are left out since they can never be a
/// recipient.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheSnapshot {
    contacts: Vec<CachedContact>,
    generation: u64,
    refreshed_at: Option<DateTime<Utc>>,
}

impl CacheSnapshot {
    /// The snapshot in place before the first successful refresh.
    pub fn empty() -> Self {
        Self {
            contacts: Vec::new(),
            generation: 0,
            refreshed_at: None,
        }
    }

    /// Build a snapshot from freshly enumerated records.
    pub fn build(records: Vec<ContactRecord>, generation: u64) -> Self {
        let mut contacts: Vec<CachedContact> = records
            .into_iter()
            .filter(ContactRecord::has_phone_numbers)
            .map(CachedContact::new)
            .collect();

        // stable: equal lengths keep provider order
        contacts.sort_by_key(|contact| contact.full_name_len);

        Self {
            contacts,
            generation,
            refreshed_at: Some(Utc::now()),
        }
    }

    pub fn contacts(&self) -> &[CachedContact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// 0 for the initial empty snapshot, then 1, 2, ... per successful refresh.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn refreshed_at(&self) -> Option<DateTime<Utc>> {
        self.refreshed_at
    }
}

impl Default for CacheSnapshot {
    fn default() -> Self {
        Self::empty()
    }
}

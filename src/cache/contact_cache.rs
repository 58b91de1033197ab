//! Holder of the current address book snapshot.

use super::snapshot::CacheSnapshot;
use crate::models::ContactRecord;
use serde::Serialize;
use std::sync::Arc;

/// Lifecycle of the cache.
///
/// The cache starts `Empty` and becomes `Populated` on the first successful
/// refresh. It never goes back: a failed refresh keeps the stale contacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheState {
    Empty,
    Populated,
}

/// Owns the current [`CacheSnapshot`].
///
/// Replacement swaps one `Arc` for another, so a snapshot handed out earlier
/// stays valid and unchanged while the cache moves on.
#[derive(Debug)]
pub struct ContactCache {
    current: Arc<CacheSnapshot>,
}

impl ContactCache {
    pub fn new() -> Self {
        Self {
            current: Arc::new(CacheSnapshot::empty()),
        }
    }

    /// The snapshot searches should run against.
    pub fn snapshot(&self) -> Arc<CacheSnapshot> {
        Arc::clone(&self.current)
    }

    pub fn state(&self) -> CacheState {
        if self.current.generation() == 0 {
            CacheState::Empty
        } else {
            CacheState::Populated
        }
    }

    /// Build a snapshot from `records` and install it as the next generation.
    pub fn replace(&mut self, records: Vec<ContactRecord>) -> Arc<CacheSnapshot> {
        let next = CacheSnapshot::build(records, self.current.generation() + 1);
        self.current = Arc::new(next);
        self.snapshot()
    }
}

impl Default for ContactCache {
    fn default() -> Self {
        Self::new()
    }
}

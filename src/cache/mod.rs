//! Contact cache.
//!
//! Holds the immutable snapshot of the address book that searches run
//! against. Snapshots are built completely and then swapped in, so a search
//! sees either the old or the new contacts, never a mix.

pub mod contact_cache;
pub mod snapshot;

pub use contact_cache::{CacheState, ContactCache};
pub use snapshot::{CacheSnapshot, CachedContact};

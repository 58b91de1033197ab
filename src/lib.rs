//! Contact resolver - recipient lookup for a voice messaging agent.
//!
//! Given names heard in a spoken request, the resolver finds matching
//! contacts in the local address book, picks the phone numbers worth
//! offering, and hands back opaque tokens in place of the numbers. The real
//! number is only recovered from a token when the message is sent.
//!
//! # Architecture
//!
//! - **domain**: Validated value types (ids, phone numbers, labels, tokens)
//! - **models**: Contact records as read from the address book
//! - **matching**: Name normalization, exact and partial matching, ranking
//! - **cache**: Immutable address book snapshots
//! - **tokens**: Append-only token to number map
//! - **providers**: Address book sources and change notifications
//! - **services**: The resolver worker and its handles
//! - **observability**: Counters and timing
//! - **config**: Configuration from environment variables
//! - **error**: Error types

pub mod cache;
pub mod config;
pub mod domain;
pub mod error;
pub mod matching;
pub mod models;
pub mod observability;
pub mod providers;
pub mod services;
pub mod tokens;

pub use config::Config;
pub use domain::{ContactId, PhoneLabel, PhoneNumber, Token};
pub use error::{ConfigError, ProviderError, ResolverError};
pub use matching::{MatchQuery, MatchResult, MatchType, RecipientCandidate};
pub use models::{ContactRecord, LabeledNumber};
pub use providers::{ContactsProvider, JsonFileContactsProvider};
pub use services::{RecipientResolver, RecipientService, ResolverHandle};

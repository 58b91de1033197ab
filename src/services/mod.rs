//! Application service layer.
//!
//! The resolver serializes every refresh, search and token lookup through a
//! single worker task. Callers hold a [`ResolverHandle`] and never touch the
//! cache or the token store directly.

mod resolver;
mod worker;

pub use resolver::{RecipientResolver, RecipientService, ResolverHandle};
pub use worker::{RefreshOutcome, ResolverStatus};

use super::notifier::{ChangeHandler, ChangeSubscription};
use crate::error::ProviderResult;
use crate::models::ContactRecord;
use async_trait::async_trait;

/// Source of address book contents.
///
/// Abstracts the platform contact store so the resolver can run against a
/// device address book, an exported file, or a test double.
#[async_trait]
pub trait ContactsProvider: Send + Sync {
    /// Enumerate every contact currently in the address book.
    ///
    /// Fails with `PermissionDenied` when access was not granted and with
    /// `EnumerationFailure` for anything else.
    async fn enumerate(&self) -> ProviderResult<Vec<ContactRecord>>;

    /// Register `handler` to be called whenever the address book changes.
    ///
    /// The handler stays registered until the returned guard is dropped.
    fn subscribe(&self, handler: ChangeHandler) -> ChangeSubscription;
}

//! Contacts providers.
//!
//! A provider is the resolver's only view of the address book: it enumerates
//! contacts on demand and tells subscribers when the book changes.

mod json_file;
mod notifier;
mod traits;

pub use json_file::JsonFileContactsProvider;
pub use notifier::{ChangeHandler, ChangeNotifier, ChangeSubscription};
pub use traits::ContactsProvider;

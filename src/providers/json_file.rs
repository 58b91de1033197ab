use super::notifier::{ChangeHandler, ChangeNotifier, ChangeSubscription};
use super::traits::ContactsProvider;
use crate::domain::{ContactId, PhoneLabel, PhoneNumber};
use crate::error::{ProviderError, ProviderResult};
use crate::models::{ContactRecord, LabeledNumber};
use async_trait::async_trait;
use serde::Deserialize;
use std::io;
use std::path::{Path, PathBuf};

/// Contact entry as written in the file, before validation.
#[derive(Debug, Deserialize)]
struct StoredContact {
    id: String,

    #[serde(default)]
    family_name: String,

    #[serde(default)]
    given_name: String,

    #[serde(default)]
    phone_numbers: Vec<StoredNumber>,
}

#[derive(Debug, Deserialize)]
struct StoredNumber {
    number: String,

    #[serde(default)]
    label: Option<String>,
}

impl StoredContact {
    /// Convert into a record, dropping numbers that fail validation.
    ///
    /// Returns `None` only when the id itself is invalid.
    fn into_record(self) -> Option<ContactRecord> {
        let id = match ContactId::new(self.id) {
            Ok(id) => id,
            Err(e) => {
                tracing::warn!(error = %e, "Skipping address book entry");
                return None;
            }
        };

        let phone_numbers = self
            .phone_numbers
            .into_iter()
            .filter_map(|stored| match PhoneNumber::new(stored.number) {
                Ok(number) => Some(LabeledNumber::new(number, stored.label.map(PhoneLabel::from))),
                Err(e) => {
                    tracing::warn!(contact = %id, error = %e, "Skipping phone number");
                    None
                }
            })
            .collect();

        Some(ContactRecord::new(id, self.family_name, self.given_name).with_numbers(phone_numbers))
    }
}

/// Contacts provider backed by an address book exported as JSON.
///
/// The file holds an array of contact records and is re-read on every
/// enumeration. Whoever rewrites the file calls [`notify_changed`] so that
/// subscribers refresh.
///
/// [`notify_changed`]: JsonFileContactsProvider::notify_changed
#[derive(Debug)]
pub struct JsonFileContactsProvider {
    path: PathBuf,
    notifier: ChangeNotifier,
}

impl JsonFileContactsProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            notifier: ChangeNotifier::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Tell subscribers the address book file has changed.
    pub fn notify_changed(&self) {
        self.notifier.notify();
    }

    fn map_io_error(&self, err: io::Error) -> ProviderError {
        match err.kind() {
            io::ErrorKind::PermissionDenied => ProviderError::PermissionDenied,
            _ => ProviderError::EnumerationFailure(format!(
                "cannot read {}: {}",
                self.path.display(),
                err
            )),
        }
    }
}

#[async_trait]
impl ContactsProvider for JsonFileContactsProvider {
    async fn enumerate(&self) -> ProviderResult<Vec<ContactRecord>> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| self.map_io_error(e))?;

        let stored: Vec<StoredContact> = serde_json::from_slice(&bytes).map_err(|e| {
            ProviderError::EnumerationFailure(format!(
                "invalid address book {}: {}",
                self.path.display(),
                e
            ))
        })?;

        let contacts: Vec<ContactRecord> = stored
            .into_iter()
            .filter_map(StoredContact::into_record)
            .collect();

        tracing::debug!(
            path = %self.path.display(),
            contacts = contacts.len(),
            "Address book file read"
        );

        Ok(contacts)
    }

    fn subscribe(&self, handler: ChangeHandler) -> ChangeSubscription {
        self.notifier.subscribe(handler)
    }
}

use async_trait::async_trait;
use contact_resolver::error::{ProviderError, ProviderResult};
use contact_resolver::models::ContactRecord;
use contact_resolver::providers::{ChangeHandler, ChangeNotifier, ChangeSubscription, ContactsProvider};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Mock contacts provider for testing.
///
/// Serves an in-memory address book. Individual enumerations can be
/// scripted ahead of time with [`push_result`] and [`push_failure`]; once the
/// script runs out, the current address book is returned.
///
/// [`push_result`]: MockContactsProvider::push_result
/// [`push_failure`]: MockContactsProvider::push_failure
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockContactsProvider {
    contacts: Arc<Mutex<Vec<ContactRecord>>>,
    script: Arc<Mutex<VecDeque<ProviderResult<Vec<ContactRecord>>>>>,
    enumerate_calls: Arc<Mutex<usize>>,
    notifier: ChangeNotifier,
}

#[allow(dead_code)]
impl MockContactsProvider {
    /// Create a provider with an empty address book.
    pub fn new() -> Self {
        Self {
            contacts: Arc::new(Mutex::new(Vec::new())),
            script: Arc::new(Mutex::new(VecDeque::new())),
            enumerate_calls: Arc::new(Mutex::new(0)),
            notifier: ChangeNotifier::new(),
        }
    }

    /// Create a provider serving the given contacts.
    pub fn with_contacts(contacts: Vec<ContactRecord>) -> Self {
        let provider = Self::new();
        provider.set_contacts(contacts);
        provider
    }

    /// Replace the address book.
    pub fn set_contacts(&self, contacts: Vec<ContactRecord>) {
        *self.contacts.lock().unwrap() = contacts;
    }

    /// Script the next unscripted enumeration to return these contacts.
    pub fn push_result(&self, contacts: Vec<ContactRecord>) {
        self.script.lock().unwrap().push_back(Ok(contacts));
    }

    /// Script the next unscripted enumeration to fail.
    pub fn push_failure(&self, error: ProviderError) {
        self.script.lock().unwrap().push_back(Err(error));
    }

    /// Fire a change notification to every subscriber.
    pub fn notify(&self) {
        self.notifier.notify();
    }

    pub fn subscriber_count(&self) -> usize {
        self.notifier.subscriber_count()
    }

    pub fn enumerate_calls(&self) -> usize {
        *self.enumerate_calls.lock().unwrap()
    }
}

impl Default for MockContactsProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactsProvider for MockContactsProvider {
    async fn enumerate(&self) -> ProviderResult<Vec<ContactRecord>> {
        *self.enumerate_calls.lock().unwrap() += 1;

        if let Some(scripted) = self.script.lock().unwrap().pop_front() {
            return scripted;
        }

        Ok(self.contacts.lock().unwrap().clone())
    }

    fn subscribe(&self, handler: ChangeHandler) -> ChangeSubscription {
        self.notifier.subscribe(handler)
    }
}

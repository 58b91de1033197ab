//! Change notification fan-out for providers.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, Weak};

/// Callback invoked on every address book change.
///
/// Handlers run on the notifying thread and must not block.
pub type ChangeHandler = Arc<dyn Fn() + Send + Sync>;

type HandlerMap = Mutex<HashMap<u64, ChangeHandler>>;

/// Registry of change handlers that providers embed.
///
/// Cloning shares the same registry.
#[derive(Clone, Default)]
pub struct ChangeNotifier {
    handlers: Arc<HandlerMap>,
    next_id: Arc<AtomicU64>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler`; it is removed again when the guard is dropped.
    pub fn subscribe(&self, handler: ChangeHandler) -> ChangeSubscription {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);

        if let Ok(mut handlers) = self.handlers.lock() {
            handlers.insert(id, handler);
        }

        ChangeSubscription {
            id,
            handlers: Arc::downgrade(&self.handlers),
        }
    }

    /// Call every registered handler once.
    pub fn notify(&self) {
        // snapshot first so handlers may subscribe/unsubscribe while running
        let handlers: Vec<ChangeHandler> = match self.handlers.lock() {
            Ok(handlers) => handlers.values().cloned().collect(),
            Err(_) => return,
        };

        tracing::trace!(subscribers = handlers.len(), "Address book changed");

        for handler in handlers {
            handler();
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.handlers.lock().map(|h| h.len()).unwrap_or(0)
    }
}

impl std::fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// Guard for a registered change handler. Dropping it unsubscribes.
#[must_use = "dropping the subscription unsubscribes immediately"]
pub struct ChangeSubscription {
    id: u64,
    handlers: Weak<HandlerMap>,
}

impl ChangeSubscription {
    /// Unsubscribe explicitly. Same as dropping the guard.
    pub fn unsubscribe(self) {}
}

impl Drop for ChangeSubscription {
    fn drop(&mut self) {
        if let Some(handlers) = self.handlers.upgrade() {
            if let Ok(mut handlers) = handlers.lock() {
                handlers.remove(&self.id);
            }
        }
    }
}

impl std::fmt::Debug for ChangeSubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeSubscription").field("id", &self.id).finish()
    }
}

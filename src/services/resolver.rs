//! Recipient resolver service.
//!
//! [`RecipientResolver`] owns the worker task and the change subscription.
//! Callers talk to it through cloned [`ResolverHandle`]s.

use super::worker::{Command, RefreshOutcome, ResolverStatus, ResolverWorker};
use crate::config::Config;
use crate::domain::{PhoneNumber, Token};
use crate::error::{ResolverError, ResolverResult};
use crate::matching::{MatchQuery, MatchResult, MatchingEngine};
use crate::observability::MetricsTracker;
use crate::providers::{ChangeSubscription, ContactsProvider};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{info, warn};

/// Recipient operations exposed to the agent layer.
#[async_trait]
pub trait RecipientService: Send + Sync {
    /// Search the current snapshot and issue tokens for the selected numbers.
    async fn search(&self, query: MatchQuery) -> ResolverResult<MatchResult>;

    /// Look up the number behind a previously issued token.
    async fn resolve_token(&self, token: &Token) -> ResolverResult<Option<PhoneNumber>>;

    /// Re-enumerate the provider and replace the snapshot on success.
    async fn refresh(&self) -> ResolverResult<RefreshOutcome>;

    async fn status(&self) -> ResolverResult<ResolverStatus>;
}

/// Cloneable handle to a running resolver worker.
#[derive(Clone)]
pub struct ResolverHandle {
    commands: mpsc::UnboundedSender<Command>,
    metrics: MetricsTracker,
}

impl ResolverHandle {
    async fn request<T>(
        &self,
        build: impl FnOnce(oneshot::Sender<T>) -> Command,
    ) -> ResolverResult<T> {
        let (reply, response) = oneshot::channel();
        self.commands
            .send(build(reply))
            .map_err(|_| ResolverError::WorkerStopped)?;
        response.await.map_err(|_| ResolverError::WorkerStopped)
    }

    pub async fn search(&self, query: MatchQuery) -> ResolverResult<MatchResult> {
        self.request(|reply| Command::Search { query, reply }).await
    }

    pub async fn resolve_token(&self, token: &Token) -> ResolverResult<Option<PhoneNumber>> {
        let token = token.clone();
        self.request(|reply| Command::Resolve { token, reply }).await
    }

    pub async fn refresh(&self) -> ResolverResult<RefreshOutcome> {
        self.request(|reply| Command::Refresh { reply: Some(reply) })
            .await
    }

    pub async fn status(&self) -> ResolverResult<ResolverStatus> {
        self.request(|reply| Command::Status { reply }).await
    }

    /// Queue a refresh without waiting for it.
    pub fn request_refresh(&self) -> ResolverResult<()> {
        self.commands
            .send(Command::Refresh { reply: None })
            .map_err(|_| ResolverError::WorkerStopped)
    }

    pub fn metrics(&self) -> &MetricsTracker {
        &self.metrics
    }
}

#[async_trait]
impl RecipientService for ResolverHandle {
    async fn search(&self, query: MatchQuery) -> ResolverResult<MatchResult> {
        ResolverHandle::search(self, query).await
    }

    async fn resolve_token(&self, token: &Token) -> ResolverResult<Option<PhoneNumber>> {
        ResolverHandle::resolve_token(self, token).await
    }

    async fn refresh(&self) -> ResolverResult<RefreshOutcome> {
        ResolverHandle::refresh(self).await
    }

    async fn status(&self) -> ResolverResult<ResolverStatus> {
        ResolverHandle::status(self).await
    }
}

/// Owner of the resolver worker.
///
/// Dropping the resolver releases the change subscription. The worker itself
/// keeps serving outstanding handles until the last one is gone.
pub struct RecipientResolver {
    handle: ResolverHandle,
    subscription: Option<ChangeSubscription>,
    worker: Option<JoinHandle<()>>,
}

impl RecipientResolver {
    /// Spawn the worker, load the first snapshot and subscribe to provider
    /// changes.
    ///
    /// A failed initial load is logged and leaves the cache empty; the next
    /// change notification or explicit refresh retries.
    pub async fn start(provider: Arc<dyn ContactsProvider>, config: &Config) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let metrics = MetricsTracker::new();

        let worker = ResolverWorker::new(
            provider.clone(),
            MatchingEngine::from_config(config),
            metrics.clone(),
        );
        let worker = tokio::spawn(worker.run(rx));

        let handle = ResolverHandle {
            commands: tx.clone(),
            metrics: metrics.clone(),
        };

        // Queued ahead of any notification-driven refresh.
        let (reply, initial) = oneshot::channel();
        let queued = tx.send(Command::Refresh { reply: Some(reply) });

        let subscription = provider.subscribe(Arc::new(move || {
            metrics.track_change_notification();
            if tx.send(Command::Refresh { reply: None }).is_err() {
                tracing::debug!("Change notification after resolver stopped");
            }
        }));

        let outcome = match queued {
            Ok(()) => initial.await.map_err(|_| ResolverError::WorkerStopped),
            Err(_) => Err(ResolverError::WorkerStopped),
        };

        match outcome {
            Ok(RefreshOutcome::Replaced {
                contacts,
                generation,
            }) => info!(contacts, generation, "Recipient resolver started"),
            Ok(RefreshOutcome::KeptStale { error }) => {
                warn!(error = %error, "Recipient resolver started with an empty cache")
            }
            Err(e) => warn!(error = %e, "Recipient resolver worker exited during startup"),
        }

        Self {
            handle,
            subscription: Some(subscription),
            worker: Some(worker),
        }
    }

    pub fn handle(&self) -> &ResolverHandle {
        &self.handle
    }

    /// Release the subscription, let queued commands finish, then stop the
    /// worker and wait for it.
    pub async fn shutdown(mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }

        // Ignore send failure: the worker is already gone.
        let _ = self.handle.commands.send(Command::Shutdown);

        if let Some(worker) = self.worker.take() {
            if let Err(e) = worker.await {
                warn!(error = %e, "Resolver worker did not stop cleanly");
            }
        }

        tracing::debug!("{}", self.handle.metrics.summary());
        info!("Recipient resolver stopped");
    }
}

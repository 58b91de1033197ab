//! The resolver worker.
//!
//! One tokio task owns the contact cache and the token store. Every request
//! arrives as a [`Command`] and runs to completion before the next one is
//! taken off the queue, so refreshes and searches never interleave.

use crate::cache::{CacheState, ContactCache};
use crate::domain::{PhoneNumber, Token};
use crate::error::ProviderError;
use crate::matching::{MatchQuery, MatchResult, MatchingEngine};
use crate::observability::{MetricsTracker, Timer};
use crate::providers::ContactsProvider;
use crate::tokens::TokenStore;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, trace, warn};

/// Result of one refresh attempt.
#[derive(Debug)]
pub enum RefreshOutcome {
    /// A new snapshot was installed
    Replaced { contacts: usize, generation: u64 },

    /// The provider failed; the previous snapshot stays in service
    KeptStale { error: ProviderError },
}

impl RefreshOutcome {
    pub fn is_replaced(&self) -> bool {
        matches!(self, Self::Replaced { .. })
    }
}

/// Point-in-time view of the resolver state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolverStatus {
    pub cache_state: CacheState,
    pub contacts: usize,
    pub generation: u64,
    pub refreshed_at: Option<DateTime<Utc>>,
    pub tokens: usize,
}

/// Requests understood by the worker.
pub(crate) enum Command {
    /// `reply` is `None` for refreshes triggered by change notifications
    Refresh {
        reply: Option<oneshot::Sender<RefreshOutcome>>,
    },
    Search {
        query: MatchQuery,
        reply: oneshot::Sender<MatchResult>,
    },
    Resolve {
        token: Token,
        reply: oneshot::Sender<Option<PhoneNumber>>,
    },
    Status {
        reply: oneshot::Sender<ResolverStatus>,
    },
    Shutdown,
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Self::Refresh { .. } => "refresh",
            Self::Search { .. } => "search",
            Self::Resolve { .. } => "resolve",
            Self::Status { .. } => "status",
            Self::Shutdown => "shutdown",
        }
    }
}

pub(crate) struct ResolverWorker {
    provider: Arc<dyn ContactsProvider>,
    cache: ContactCache,
    tokens: TokenStore,
    engine: MatchingEngine,
    metrics: MetricsTracker,
}

impl ResolverWorker {
    pub(crate) fn new(
        provider: Arc<dyn ContactsProvider>,
        engine: MatchingEngine,
        metrics: MetricsTracker,
    ) -> Self {
        Self {
            provider,
            cache: ContactCache::new(),
            tokens: TokenStore::new(),
            engine,
            metrics,
        }
    }

    /// Process commands until shutdown or until every sender is gone.
    pub(crate) async fn run(mut self, mut commands: mpsc::UnboundedReceiver<Command>) {
        debug!("Resolver worker started");

        while let Some(command) = commands.recv().await {
            trace!(command = command.name(), "Dispatching command");

            match command {
                Command::Refresh { reply } => {
                    let outcome = self.refresh().await;
                    if let Some(reply) = reply {
                        let _ = reply.send(outcome);
                    }
                }
                Command::Search { query, reply } => {
                    let _ = reply.send(self.search(&query));
                }
                Command::Resolve { token, reply } => {
                    let _ = reply.send(self.tokens.resolve(&token).cloned());
                }
                Command::Status { reply } => {
                    let _ = reply.send(self.status());
                }
                Command::Shutdown => break,
            }
        }

        info!(
            tokens = self.tokens.len(),
            generation = self.cache.snapshot().generation(),
            "Resolver worker stopped"
        );
    }

    async fn refresh(&mut self) -> RefreshOutcome {
        let timer = Timer::new("refresh");

        match self.provider.enumerate().await {
            Ok(records) => {
                let snapshot = self.cache.replace(records);
                let duration_ms = timer.finish();
                self.metrics.track_refresh(duration_ms, snapshot.len(), true);

                info!(
                    contacts = snapshot.len(),
                    generation = snapshot.generation(),
                    "Contact cache refreshed"
                );

                RefreshOutcome::Replaced {
                    contacts: snapshot.len(),
                    generation: snapshot.generation(),
                }
            }
            Err(error) => {
                let duration_ms = timer.finish();
                let current = self.cache.snapshot();
                self.metrics.track_refresh(duration_ms, current.len(), false);

                warn!(
                    error = %error,
                    contacts = current.len(),
                    generation = current.generation(),
                    "Contact refresh failed, keeping previous snapshot"
                );

                RefreshOutcome::KeptStale { error }
            }
        }
    }

    fn search(&mut self, query: &MatchQuery) -> MatchResult {
        let timer = Timer::new("search");
        let tokens_before = self.tokens.len();

        let snapshot = self.cache.snapshot();
        let result = self.engine.search(query, &snapshot, &mut self.tokens);

        self.metrics.track_search(
            timer.finish(),
            result.len(),
            self.tokens.len() - tokens_before,
        );

        result
    }

    fn status(&self) -> ResolverStatus {
        let snapshot = self.cache.snapshot();

        ResolverStatus {
            cache_state: self.cache.state(),
            contacts: snapshot.len(),
            generation: snapshot.generation(),
            refreshed_at: snapshot.refreshed_at(),
            tokens: self.tokens.len(),
        }
    }
}

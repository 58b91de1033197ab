mod mocks;

use contact_resolver::cache::CacheState;
use contact_resolver::domain::{ContactId, PhoneNumber};
use contact_resolver::error::{ProviderError, ResolverError};
use contact_resolver::matching::{MatchQuery, MatchType};
use contact_resolver::models::ContactRecord;
use contact_resolver::services::RefreshOutcome;
use contact_resolver::{Config, RecipientResolver};
use mocks::MockContactsProvider;
use std::sync::Arc;

fn contact(id: &str, name: &str, number: &str) -> ContactRecord {
    ContactRecord::new(ContactId::new(id).unwrap(), "", name)
        .with_number(PhoneNumber::new(number).unwrap(), None)
}

fn exact(name: &str) -> MatchQuery {
    MatchQuery::new(vec![name.to_string()], MatchType::Exact).unwrap()
}

async fn start(provider: &Arc<MockContactsProvider>) -> RecipientResolver {
    RecipientResolver::start(provider.clone(), &Config::default()).await
}

#[tokio::test]
async fn test_start_subscribes_and_populates() {
    let provider = Arc::new(MockContactsProvider::with_contacts(vec![contact(
        "1",
        "Alice",
        "01011112222",
    )]));
    let resolver = start(&provider).await;

    assert_eq!(provider.enumerate_calls(), 1);
    assert_eq!(provider.subscriber_count(), 1);

    let status = resolver.handle().status().await.unwrap();
    assert_eq!(status.cache_state, CacheState::Populated);
    assert_eq!(status.contacts, 1);
    assert_eq!(status.generation, 1);
    assert!(status.refreshed_at.is_some());

    resolver.shutdown().await;
}

#[tokio::test]
async fn test_failed_refresh_keeps_snapshot() {
    let provider = Arc::new(MockContactsProvider::with_contacts(vec![contact(
        "1",
        "Alice",
        "01011112222",
    )]));
    let resolver = start(&provider).await;
    let handle = resolver.handle().clone();
    let before = handle.status().await.unwrap();

    provider.push_failure(ProviderError::PermissionDenied);
    let outcome = handle.refresh().await.unwrap();
    assert!(matches!(
        outcome,
        RefreshOutcome::KeptStale {
            error: ProviderError::PermissionDenied
        }
    ));

    let after = handle.status().await.unwrap();
    assert_eq!(after, before);

    let result = handle.search(exact("Alice")).await.unwrap();
    assert_eq!(result.len(), 1);
    assert_eq!(handle.metrics().refresh_failures_total(), 1);

    resolver.shutdown().await;
}

#[tokio::test]
async fn test_failed_first_load_then_recovery() {
    let provider = Arc::new(MockContactsProvider::with_contacts(vec![contact(
        "1",
        "Alice",
        "01011112222",
    )]));
    provider.push_failure(ProviderError::EnumerationFailure("store locked".to_string()));

    let resolver = start(&provider).await;
    let handle = resolver.handle().clone();

    let status = handle.status().await.unwrap();
    assert_eq!(status.cache_state, CacheState::Empty);
    assert!(handle.search(exact("Alice")).await.unwrap().is_empty());

    let outcome = handle.refresh().await.unwrap();
    assert!(outcome.is_replaced());
    assert_eq!(handle.search(exact("Alice")).await.unwrap().len(), 1);

    resolver.shutdown().await;
}

#[tokio::test]
async fn test_each_notification_refreshes_in_order() {
    let provider = Arc::new(MockContactsProvider::new());
    let resolver = start(&provider).await;
    let handle = resolver.handle().clone();

    provider.push_result(vec![contact("1", "Alice", "01011111111")]);
    provider.push_result(vec![contact("2", "Bob", "01022222222")]);
    provider.push_result(vec![
        contact("2", "Bob", "01022222222"),
        contact("3", "Carol", "01033333333"),
    ]);

    provider.notify();
    provider.notify();
    provider.notify();

    // Queued behind the three refreshes
    let status = handle.status().await.unwrap();
    assert_eq!(provider.enumerate_calls(), 4);
    assert_eq!(status.generation, 4);
    assert_eq!(status.contacts, 2);
    assert_eq!(handle.metrics().change_notifications_total(), 3);

    assert!(handle.search(exact("Alice")).await.unwrap().is_empty());
    assert_eq!(handle.search(exact("Carol")).await.unwrap().len(), 1);

    resolver.shutdown().await;
}

#[tokio::test]
async fn test_tokens_survive_refresh() {
    let provider = Arc::new(MockContactsProvider::with_contacts(vec![contact(
        "1",
        "Alice",
        "01011112222",
    )]));
    let resolver = start(&provider).await;
    let handle = resolver.handle().clone();

    let result = handle.search(exact("Alice")).await.unwrap();
    let token = result.contacts[0].tokens[0].clone();

    provider.set_contacts(vec![]);
    tokio_test::assert_ok!(handle.refresh().await);

    let number = handle.resolve_token(&token).await.unwrap();
    assert_eq!(number.unwrap().as_str(), "01011112222");

    resolver.shutdown().await;
}

#[tokio::test]
async fn test_shutdown_releases_subscription() {
    let provider = Arc::new(MockContactsProvider::new());
    let resolver = start(&provider).await;
    let handle = resolver.handle().clone();

    resolver.shutdown().await;

    assert_eq!(provider.subscriber_count(), 0);

    // Notifications after shutdown reach nobody
    provider.notify();
    assert_eq!(provider.enumerate_calls(), 1);

    assert_eq!(
        handle.search(exact("Alice")).await.unwrap_err(),
        ResolverError::WorkerStopped
    );
    assert_eq!(
        handle.refresh().await.unwrap_err(),
        ResolverError::WorkerStopped
    );
}

#[tokio::test]
async fn test_dropping_resolver_releases_subscription() {
    let provider = Arc::new(MockContactsProvider::new());
    let resolver = start(&provider).await;
    assert_eq!(provider.subscriber_count(), 1);

    drop(resolver);
    assert_eq!(provider.subscriber_count(), 0);
}

#[tokio::test]
async fn test_concurrent_callers_share_one_worker() {
    let contacts = (0..20)
        .map(|i| contact(&i.to_string(), &format!("Lee{}", i), "01012345678"))
        .collect();
    let provider = Arc::new(MockContactsProvider::with_contacts(contacts));
    let resolver = start(&provider).await;

    let searches = (0..20).map(|i| {
        let handle = resolver.handle().clone();
        async move { handle.search(exact(&format!("Lee{}", i))).await }
    });
    let refreshes = (0..5).map(|_| {
        let handle = resolver.handle().clone();
        async move { handle.refresh().await.map(|outcome| outcome.is_replaced()) }
    });

    let (found, refreshed) = tokio::join!(
        futures::future::join_all(searches),
        futures::future::join_all(refreshes)
    );

    for result in found {
        assert_eq!(result.unwrap().len(), 1);
    }
    assert!(refreshed.into_iter().all(|r| r == Ok(true)));

    let status = resolver.handle().status().await.unwrap();
    assert_eq!(status.generation, 6);
    assert_eq!(status.tokens, 20);

    resolver.shutdown().await;
}

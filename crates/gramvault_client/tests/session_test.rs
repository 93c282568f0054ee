//! Session acquisition: token selection, flood rotation, broadcasts.

mod client_test_helpers;

use client_test_helpers::{MockConnector, MockRemoteClient, MockRepository};
use gramvault_client::{acquire_session, RateLimitSignal};
use gramvault_core::{CredentialToken, VaultConfigBuilder, VaultUser};
use gramvault_error::{ClientErrorKind, GramVaultErrorKind, RemoteError, RemoteErrorKind};
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;

fn user_with_tokens(tokens: Vec<CredentialToken>) -> VaultUser {
    VaultUser::new("u1", "12345", "hash", None, false, tokens)
}

fn config() -> gramvault_core::VaultConfig {
    VaultConfigBuilder::default()
        .fallback_token("fallback-secret".to_string())
        .build()
        .unwrap()
}

fn flood(seconds: u64) -> RemoteError {
    RemoteError::new(RemoteErrorKind::FloodWait { seconds })
}

#[tokio::test]
async fn connects_with_the_preferred_token() {
    let repo = MockRepository::with_user(user_with_tokens(vec![
        CredentialToken::new("a", "secret-a"),
        CredentialToken::new("b", "secret-b"),
    ]));
    let connector = MockConnector::scripted(vec![Arc::new(MockRemoteClient::default())]);
    let signal = RateLimitSignal::new();

    let session = acquire_session(&repo, &connector, &config(), &signal)
        .await
        .unwrap();

    assert_eq!(session.token_id(), Some("a"));
    assert_eq!(
        connector.used_secrets.lock().unwrap().as_slice(),
        ["secret-a"]
    );
    assert!(session.client().is_connected());
    assert!(!signal.current().is_rate_limited());
}

#[tokio::test]
async fn flood_wait_rotates_to_a_fresh_token() {
    let repo = MockRepository::with_user(user_with_tokens(vec![
        CredentialToken::new("a", "secret-a"),
        CredentialToken::new("b", "secret-b"),
    ]));
    let connector = MockConnector::scripted(vec![
        Arc::new(MockRemoteClient::failing_connect(flood(30))),
        Arc::new(MockRemoteClient::default()),
    ]);
    let signal = RateLimitSignal::new();

    let session = acquire_session(&repo, &connector, &config(), &signal)
        .await
        .unwrap();

    // The throttled token got a cool-down and the retry used the other one.
    assert_eq!(
        repo.recorded_cool_downs(),
        vec![("a".to_string(), Duration::from_secs(30))]
    );
    assert_eq!(
        connector.used_secrets.lock().unwrap().as_slice(),
        ["secret-a", "secret-b"]
    );
    assert_eq!(session.token_id(), Some("b"));

    // Cleared again after the successful connect.
    assert!(!signal.current().is_rate_limited());
}

#[tokio::test]
async fn flood_on_both_attempts_surfaces_connection_failed() {
    let repo = MockRepository::with_user(user_with_tokens(vec![
        CredentialToken::new("a", "secret-a"),
        CredentialToken::new("b", "secret-b"),
    ]));
    let connector = MockConnector::scripted(vec![
        Arc::new(MockRemoteClient::failing_connect(flood(30))),
        Arc::new(MockRemoteClient::failing_connect(flood(60))),
    ]);
    let signal = RateLimitSignal::new();

    let err = acquire_session(&repo, &connector, &config(), &signal)
        .await
        .unwrap_err();

    match err.kind() {
        GramVaultErrorKind::Client(client_err) => {
            assert!(matches!(
                client_err.kind,
                ClientErrorKind::ConnectionFailed(_)
            ));
        }
        other => panic!("unexpected error kind: {:?}", other),
    }
    // The broadcast still shows the throttle so the UI can count down.
    assert!(signal.current().is_rate_limited());
    assert_eq!(signal.current().retry_after_seconds(), 30);
}

#[tokio::test]
async fn empty_token_list_falls_back_to_the_configured_token() {
    let repo = MockRepository::with_user(user_with_tokens(vec![]));
    let connector = MockConnector::scripted(vec![Arc::new(MockRemoteClient::default())]);
    let signal = RateLimitSignal::new();

    let session = acquire_session(&repo, &connector, &config(), &signal)
        .await
        .unwrap();

    assert_eq!(session.token_id(), None);
    assert_eq!(
        connector.used_secrets.lock().unwrap().as_slice(),
        ["fallback-secret"]
    );
}

#[tokio::test]
async fn missing_user_is_a_typed_error() {
    let repo = MockRepository::default();
    let connector = MockConnector::default();
    let signal = RateLimitSignal::new();

    let err = acquire_session(&repo, &connector, &config(), &signal)
        .await
        .unwrap_err();

    match err.kind() {
        GramVaultErrorKind::Client(client_err) => {
            assert!(matches!(client_err.kind, ClientErrorKind::MissingUser(_)));
        }
        other => panic!("unexpected error kind: {:?}", other),
    }
}

#[tokio::test]
async fn cool_down_write_failure_does_not_block_the_retry() {
    let repo = MockRepository::with_user(user_with_tokens(vec![
        CredentialToken::new("a", "secret-a"),
        CredentialToken::new("b", "secret-b"),
    ]));
    repo.fail_cool_down_writes.store(true, Ordering::SeqCst);
    let connector = MockConnector::scripted(vec![
        Arc::new(MockRemoteClient::failing_connect(flood(10))),
        Arc::new(MockRemoteClient::default()),
    ]);
    let signal = RateLimitSignal::new();

    let session = acquire_session(&repo, &connector, &config(), &signal)
        .await
        .unwrap();

    assert_eq!(session.token_id(), Some("b"));
    assert!(repo.recorded_cool_downs().is_empty());
}

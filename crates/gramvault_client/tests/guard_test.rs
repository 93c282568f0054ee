//! Mutual exclusion and lifecycle behavior of the connection guard.

mod client_test_helpers;

use client_test_helpers::MockRemoteClient;
use gramvault_client::{ConnectionGuard, MediaPayload, RemoteClient};
use gramvault_error::{ClientErrorKind, GramVaultErrorKind, RemoteError, RemoteErrorKind};
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;

fn photo() -> MediaPayload {
    MediaPayload::Photo {
        id: 1,
        access_hash: 2,
    }
}

#[tokio::test]
async fn concurrent_guarded_operations_never_overlap() {
    let guard = ConnectionGuard::new();
    let client = Arc::new(MockRemoteClient::with_operation_delay(
        Duration::from_millis(10),
    ));

    let mut tasks = Vec::new();
    for _ in 0..8 {
        let guard = guard.clone();
        let client = Arc::clone(&client);
        tasks.push(tokio::spawn(async move {
            guard
                .with_connection(Some(client.as_ref()), |c| async move {
                    c.download_media(&photo(), None).await.map_err(Into::into)
                })
                .await
                .unwrap();
        }));
    }
    for task in tasks {
        task.await.unwrap();
    }

    assert_eq!(client.max_in_flight.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn missing_handle_is_connection_unavailable() {
    let guard = ConnectionGuard::new();
    let result = guard
        .with_connection(None::<&MockRemoteClient>, |c| async move {
            c.download_media(&photo(), None).await.map_err(Into::into)
        })
        .await;

    let err = result.unwrap_err();
    match err.kind() {
        GramVaultErrorKind::Client(client_err) => {
            assert_eq!(client_err.kind, ClientErrorKind::ConnectionUnavailable);
        }
        other => panic!("unexpected error kind: {:?}", other),
    }
}

#[tokio::test]
async fn disconnected_client_is_connected_before_the_operation() {
    let guard = ConnectionGuard::new();
    let client = MockRemoteClient::default();
    assert!(!client.is_connected());

    guard
        .with_connection(Some(&client), |c| async move {
            assert!(c.is_connected());
            Ok(())
        })
        .await
        .unwrap();
    assert_eq!(client.connect_calls.load(Ordering::SeqCst), 1);

    // Already connected: no second connect.
    guard
        .with_connection(Some(&client), |_| async move { Ok(()) })
        .await
        .unwrap();
    assert_eq!(client.connect_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn connect_failure_maps_to_connection_failed() {
    let guard = ConnectionGuard::new();
    let client = MockRemoteClient::failing_connect(RemoteError::new(RemoteErrorKind::Transport(
        "socket closed".to_string(),
    )));

    let result = guard
        .with_connection(Some(&client), |_| async move { Ok(()) })
        .await;

    let err = result.unwrap_err();
    match err.kind() {
        GramVaultErrorKind::Client(client_err) => {
            assert!(matches!(
                client_err.kind,
                ClientErrorKind::ConnectionFailed(_)
            ));
        }
        other => panic!("unexpected error kind: {:?}", other),
    }
}

#[tokio::test]
async fn operation_failure_releases_the_lock() {
    let guard = ConnectionGuard::new();
    let client = MockRemoteClient::connected();

    let failed: Result<(), _> = guard
        .with_connection(Some(&client), |_| async move {
            Err(RemoteError::new(RemoteErrorKind::Rpc {
                code: "MSG_ID_INVALID".to_string(),
            })
            .into())
        })
        .await;
    assert!(failed.is_err());

    // A wedged lock would hang this follow-up call.
    guard
        .with_connection(Some(&client), |_| async move { Ok(()) })
        .await
        .unwrap();
}

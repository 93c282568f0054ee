//! Shared mocks for client crate tests.

use async_trait::async_trait;
use futures::stream;
use gramvault_client::{
    ChannelRef, ChunkStream, ClientConnector, MediaPayload, RemoteClient, RemoteResult,
    SentMessage, UploadSource, UploadedHandle,
};
use gramvault_core::{UploadedFileRecord, VaultRepository, VaultUser};
use gramvault_error::{GramVaultResult, RemoteError, RemoteErrorKind};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Remote client mock with an instrumented in-flight counter.
///
/// `max_in_flight` records the highest number of simultaneously executing
/// remote operations, which the mutual-exclusion tests assert never
/// exceeds one.
#[derive(Default)]
pub struct MockRemoteClient {
    pub connected: AtomicBool,
    pub connect_calls: AtomicUsize,
    pub disconnect_calls: AtomicUsize,
    pub in_flight: AtomicUsize,
    pub max_in_flight: AtomicUsize,
    pub operation_delay: Option<Duration>,
    pub connect_error: Mutex<Option<RemoteError>>,
}

impl MockRemoteClient {
    pub fn connected() -> Self {
        let client = Self::default();
        client.connected.store(true, Ordering::SeqCst);
        client
    }

    pub fn with_operation_delay(delay: Duration) -> Self {
        let mut client = Self::connected();
        client.operation_delay = Some(delay);
        client
    }

    pub fn failing_connect(error: RemoteError) -> Self {
        let client = Self::default();
        *client.connect_error.lock().unwrap() = Some(error);
        client
    }

    async fn track<T>(&self, result: T) -> T {
        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(current, Ordering::SeqCst);
        if let Some(delay) = self.operation_delay {
            tokio::time::sleep(delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        result
    }
}

#[async_trait]
impl RemoteClient for MockRemoteClient {
    fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    async fn connect(&self) -> RemoteResult<()> {
        self.connect_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(error) = self.connect_error.lock().unwrap().clone() {
            return Err(error);
        }
        self.connected.store(true, Ordering::SeqCst);
        Ok(())
    }

    async fn disconnect(&self) -> RemoteResult<()> {
        self.disconnect_calls.fetch_add(1, Ordering::SeqCst);
        self.connected.store(false, Ordering::SeqCst);
        Ok(())
    }

    async fn upload_file(
        &self,
        source: &UploadSource,
        _workers: usize,
        on_progress: &(dyn Fn(usize, f64) + Send + Sync),
    ) -> RemoteResult<UploadedHandle> {
        on_progress(0, 1.0);
        self.track(Ok(UploadedHandle::new(source.size_bytes(), 1))).await
    }

    async fn send_file(
        &self,
        _channel: &ChannelRef,
        upload: &UploadedHandle,
    ) -> RemoteResult<SentMessage> {
        self.track(Ok(SentMessage::new(*upload.upload_id()))).await
    }

    async fn get_entity(&self, _channel: &ChannelRef) -> RemoteResult<()> {
        self.track(Ok(())).await
    }

    async fn get_messages(
        &self,
        _channel: &ChannelRef,
        ids: &[i64],
    ) -> RemoteResult<Vec<serde_json::Value>> {
        let messages = ids
            .iter()
            .map(|id| serde_json::json!({ "id": id, "media": null }))
            .collect();
        self.track(Ok(messages)).await
    }

    async fn delete_messages(
        &self,
        _channel: &ChannelRef,
        ids: &[i64],
        _revoke: bool,
    ) -> RemoteResult<usize> {
        self.track(Ok(ids.len())).await
    }

    async fn download_media(
        &self,
        _media: &MediaPayload,
        _thumb: Option<u32>,
    ) -> RemoteResult<Vec<u8>> {
        self.track(Ok(b"mock-bytes".to_vec())).await
    }

    fn iter_download(&self, _media: &MediaPayload, request_size: usize) -> ChunkStream<'_> {
        Box::pin(stream::iter(vec![
            Ok(vec![1u8; request_size]),
            Ok(vec![2u8; request_size]),
        ]))
    }
}

/// Repository mock recording cool-down writes.
#[derive(Default)]
pub struct MockRepository {
    pub user: Mutex<Option<VaultUser>>,
    pub cool_downs: Mutex<Vec<(String, Duration)>>,
    pub fail_cool_down_writes: AtomicBool,
}

impl MockRepository {
    pub fn with_user(user: VaultUser) -> Self {
        let repo = Self::default();
        *repo.user.lock().unwrap() = Some(user);
        repo
    }

    pub fn recorded_cool_downs(&self) -> Vec<(String, Duration)> {
        self.cool_downs.lock().unwrap().clone()
    }
}

#[async_trait]
impl VaultRepository for MockRepository {
    async fn get_user(&self) -> GramVaultResult<Option<VaultUser>> {
        Ok(self.user.lock().unwrap().clone())
    }

    async fn update_token_cool_down(
        &self,
        token_id: &str,
        wait: Duration,
    ) -> GramVaultResult<()> {
        if self.fail_cool_down_writes.load(Ordering::SeqCst) {
            return Err(gramvault_error::ConfigError::new("persistence down").into());
        }
        self.cool_downs
            .lock()
            .unwrap()
            .push((token_id.to_string(), wait));
        Ok(())
    }

    async fn register_uploaded_file(&self, _record: &UploadedFileRecord) -> GramVaultResult<()> {
        Ok(())
    }

    async fn delete_file_record(&self, _record_id: &str) -> GramVaultResult<()> {
        Ok(())
    }
}

/// Connector handing out scripted clients, one per `build` call.
#[derive(Default)]
pub struct MockConnector {
    pub clients: Mutex<Vec<Arc<MockRemoteClient>>>,
    pub used_secrets: Mutex<Vec<String>>,
}

impl MockConnector {
    pub fn scripted(clients: Vec<Arc<MockRemoteClient>>) -> Self {
        Self {
            clients: Mutex::new(clients),
            used_secrets: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl ClientConnector for MockConnector {
    async fn build(&self, token_secret: &str) -> RemoteResult<Arc<dyn RemoteClient>> {
        self.used_secrets
            .lock()
            .unwrap()
            .push(token_secret.to_string());
        let mut clients = self.clients.lock().unwrap();
        if clients.is_empty() {
            return Err(RemoteError::new(RemoteErrorKind::Transport(
                "no scripted client".to_string(),
            )));
        }
        Ok(clients.remove(0))
    }
}

//! Fake game API for runner, batch and scheduler tests.

#![allow(clippy::unwrap_used, reason = "test helper")]

use std::collections::HashMap;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use voxelplay_client::{ClientError, VoxelApi};
use voxelplay_types::models::{BotConfig, Endpoint, EndpointCall};

use crate::context::{BotContext, Console};

/// A call as seen by [`FakeApi`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub endpoint: Endpoint,
    pub token: String,
    pub progress: Option<u32>,
    pub mission_id: Option<String>,
}

#[derive(Default)]
pub struct FakeApi {
    failures: HashMap<Endpoint, u16>,
    delay: Option<Duration>,
    calls: Mutex<Vec<RecordedCall>>,
    in_flight: AtomicUsize,
    peak_in_flight: AtomicUsize,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes `endpoint` answer with HTTP `status`.
    pub fn failing(mut self, endpoint: Endpoint, status: u16) -> Self {
        self.failures.insert(endpoint, status);
        self
    }

    /// Makes every call take `delay` of (virtual) time.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_to(&self, endpoint: Endpoint) -> Vec<RecordedCall> {
        self.calls().into_iter().filter(|c| c.endpoint == endpoint).collect()
    }

    pub fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl VoxelApi for FakeApi {
    async fn call(&self, call: &EndpointCall, token: &str) -> Result<Value, ClientError> {
        self.calls.lock().unwrap().push(RecordedCall {
            endpoint: call.endpoint,
            token: token.to_string(),
            progress: call.progress,
            mission_id: call.mission_id.clone(),
        });

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(now, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        match self.failures.get(&call.endpoint) {
            Some(&status) => Err(ClientError::HttpStatus { status, message: String::new() }),
            None => Ok(serde_json::json!({ "ok": true, "path": call.path() })),
        }
    }
}

/// Context over `api` with a hidden console and the given token file.
pub fn test_context(api: Arc<FakeApi>, data_file: &Path) -> BotContext {
    let config = BotConfig { data_file: data_file.to_path_buf(), ..BotConfig::default() };
    BotContext::new(config, api, Console::hidden())
}

/// Writes `tokens` one per line into a fresh temp file.
pub fn token_file(tokens: &[&str]) -> tempfile::NamedTempFile {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    for token in tokens {
        writeln!(file, "{}", token).unwrap();
    }
    file
}

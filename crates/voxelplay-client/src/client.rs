use crate::error::ClientError;
use crate::types::ClientConfig;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE, ORIGIN, REFERER, USER_AGENT};
use reqwest::Client;
use serde_json::Value;
use voxelplay_types::models::EndpointCall;

pub struct VoxelClient {
    client: Client,
    config: ClientConfig,
}

impl VoxelClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let client = Client::builder()
            .default_headers(default_headers(&config)?)
            .timeout(config.timeout)
            // Every call opens its own connection.
            .pool_max_idle_per_host(0)
            .build()
            .map_err(|e| ClientError::Build(e.to_string()))?;
        Ok(Self { client, config })
    }

    /// Posts `call` for `token`, retrying transient failures within the time budget.
    pub async fn post(&self, call: &EndpointCall, token: &str) -> Result<Value, ClientError> {
        match tokio::time::timeout(self.config.timeout, self.post_with_retry(call, token)).await {
            Ok(result) => result,
            Err(_) => Err(ClientError::Timeout(self.config.timeout)),
        }
    }

    async fn post_with_retry(
        &self,
        call: &EndpointCall,
        token: &str,
    ) -> Result<Value, ClientError> {
        let mut retries = 0;

        loop {
            match self.post_once(call, token).await {
                Ok(payload) => return Ok(payload),
                Err(err) if self.is_retryable(&err) && retries < self.config.retry.max_retries => {
                    retries += 1;
                    let wait = self.config.retry.backoff(retries);
                    tracing::debug!(
                        "[Client] {} failed ({}), retry {} in {:?}",
                        call.path(),
                        err,
                        retries,
                        wait
                    );
                    tokio::time::sleep(wait).await;
                }
                Err(err) => return Err(err),
            }
        }
    }

    async fn post_once(&self, call: &EndpointCall, token: &str) -> Result<Value, ClientError> {
        let resp = self
            .client
            .post(self.config.endpoint_url(call.path()))
            .json(&call.body(token))
            .send()
            .await
            .map_err(|e| ClientError::from_transport(e, self.config.timeout))?;

        let status = resp.status();

        if !status.is_success() {
            let message = resp.text().await.unwrap_or_default();
            return Err(ClientError::HttpStatus {
                status: status.as_u16(),
                message,
            });
        }

        let bytes = resp
            .bytes()
            .await
            .map_err(|e| ClientError::from_transport(e, self.config.timeout))?;
        let payload: Value = serde_json::from_slice(&bytes)
            .map_err(|e| ClientError::InvalidResponse(e.to_string()))?;

        if is_falsy(&payload) {
            return Err(ClientError::EmptyPayload);
        }
        Ok(payload)
    }

    fn is_retryable(&self, err: &ClientError) -> bool {
        match err {
            ClientError::HttpStatus { status, .. } => {
                self.config.retry.should_retry_status(*status)
            },
            ClientError::Connection(_) => true,
            _ => false,
        }
    }
}

fn default_headers(config: &ClientConfig) -> Result<HeaderMap, ClientError> {
    let origin = config.origin();
    let value = |raw: &str| {
        HeaderValue::from_str(raw).map_err(|e| ClientError::Build(format!("{}: {}", raw, e)))
    };

    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, value(&config.user_agent)?);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(ORIGIN, value(origin)?);
    headers.insert(REFERER, value(&format!("{}/", origin))?);
    Ok(headers)
}

/// JSON values the game API uses to signal "nothing happened".
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

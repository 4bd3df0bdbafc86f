use async_trait::async_trait;
use serde_json::Value;
use voxelplay_types::models::EndpointCall;

use crate::client::VoxelClient;
use crate::error::ClientError;

/// Seam between the account runner and the HTTP layer.
#[async_trait]
pub trait VoxelApi: Send + Sync {
    async fn call(&self, call: &EndpointCall, token: &str) -> Result<Value, ClientError>;
}

#[async_trait]
impl VoxelApi for VoxelClient {
    async fn call(&self, call: &EndpointCall, token: &str) -> Result<Value, ClientError> {
        self.post(call, token).await
    }
}

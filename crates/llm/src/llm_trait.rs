use async_trait::async_trait;
use enhancer_common::Result;

use crate::types::GenerateRequest;

/// Common trait for completion backends
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Generate text from a prompt
    async fn generate(&self, request: GenerateRequest) -> Result<String>;

    /// Backend name, for logs and health reporting
    fn provider(&self) -> &'static str;
}

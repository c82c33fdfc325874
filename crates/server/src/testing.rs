//! Test doubles for the completion backend and the template source

use async_trait::async_trait;
use enhancer_common::{EnhancerError, Result};
use enhancer_llm::{GenerateOptions, GenerateRequest, LlmClient};
use enhancer_templates::TemplateSource;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Barrier;

/// Scripted completion backend
///
/// Echoes the prompt back, fails when the prompt contains a configured
/// marker and can delay or rendezvous individual calls.
#[derive(Default)]
pub struct FakeLlm {
    fail_marker: Option<String>,
    delays: Vec<(String, u64)>,
    barrier: Option<Arc<Barrier>>,
    calls: Mutex<Vec<GenerateRequest>>,
}

impl FakeLlm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_on(mut self, marker: &str) -> Self {
        self.fail_marker = Some(marker.to_string());
        self
    }

    pub fn with_delay_for(mut self, marker: &str, millis: u64) -> Self {
        self.delays.push((marker.to_string(), millis));
        self
    }

    pub fn with_barrier(mut self, barrier: Arc<Barrier>) -> Self {
        self.barrier = Some(barrier);
        self
    }

    pub fn prompts(&self) -> Vec<String> {
        self.calls.lock().unwrap().iter().map(|r| r.prompt.clone()).collect()
    }

    pub fn models(&self) -> Vec<String> {
        self.calls.lock().unwrap().iter().map(|r| r.model.clone()).collect()
    }

    pub fn options(&self) -> Vec<Option<GenerateOptions>> {
        self.calls.lock().unwrap().iter().map(|r| r.options.clone()).collect()
    }
}

#[async_trait]
impl LlmClient for FakeLlm {
    async fn generate(&self, request: GenerateRequest) -> Result<String> {
        self.calls.lock().unwrap().push(request.clone());

        if let Some(barrier) = &self.barrier {
            barrier.wait().await;
        }

        let delay = self
            .delays
            .iter()
            .find(|(marker, _)| request.prompt.contains(marker.as_str()))
            .map(|(_, millis)| *millis);
        if let Some(millis) = delay {
            tokio::time::sleep(Duration::from_millis(millis)).await;
        }

        match &self.fail_marker {
            Some(marker) if request.prompt.contains(marker.as_str()) => {
                Err(EnhancerError::llm("scripted failure"))
            }
            _ => Ok(request.prompt),
        }
    }

    fn provider(&self) -> &'static str {
        "fake"
    }
}

/// Template document held in memory
pub struct StaticSource(pub Option<String>);

impl StaticSource {
    pub fn text(text: &str) -> Self {
        Self(Some(text.to_string()))
    }

    pub fn unreadable() -> Self {
        Self(None)
    }
}

#[async_trait]
impl TemplateSource for StaticSource {
    async fn load(&self) -> Result<String> {
        self.0
            .clone()
            .ok_or_else(|| EnhancerError::template_source("library.md: permission denied"))
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

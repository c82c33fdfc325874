//! Enhancer LLM Integration
//!
//! Completion backends (Gemini, Ollama) and enhancement prompts

mod client;
mod gemini;
mod llm_trait;
mod ollama;
mod prompts;
mod types;

pub use client::build_client;
pub use gemini::GeminiClient;
pub use llm_trait::LlmClient;
pub use ollama::OllamaClient;
pub use prompts::{enhancement_prompt, SEPARATOR, TRANSCRIPT_LABEL};
pub use types::{GenerateOptions, GenerateRequest};

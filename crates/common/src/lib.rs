pub mod config;
pub mod error;
pub mod logger;

// Re-export commonly used types
pub use config::{AppConfig, LlmProvider};
pub use error::EnhancerError;
pub type Result<T> = std::result::Result<T, EnhancerError>;

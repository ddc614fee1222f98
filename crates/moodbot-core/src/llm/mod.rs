//! Text generation provider abstraction.
//!
//! Defines the `LLM` trait the controller depends on, scoped to this
//! system's single-turn contract: one question string in, one reply string
//! out. The Gemini client is the production implementation; tests swap in
//! mocks behind the same trait.

use crate::errors::ChatError;
use async_trait::async_trait;

pub mod gemini;

pub use gemini::GeminiClient;

#[async_trait]
pub trait LLM: Send + Sync {
    async fn generate(&self, question: &str) -> Result<String, ChatError>;
}

//! Error types for the chat session.
//!
//! Every failure below the controller keeps its source distinct (transport,
//! payload, configuration) so logs stay useful, while the controller itself
//! collapses all of them into one user-facing fallback message.

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum ChatError {
    #[error("LLM interaction failed: {0}")]
    Llm(String),
    #[error("Parsing error: {0}")]
    Parsing(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for ChatError {
    fn from(err: std::io::Error) -> Self {
        ChatError::Io(err.to_string())
    }
}

impl From<reqwest::Error> for ChatError {
    fn from(err: reqwest::Error) -> Self {
        ChatError::Llm(err.to_string())
    }
}

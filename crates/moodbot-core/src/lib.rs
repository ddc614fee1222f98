//! Core library for the MoodBot chat companion.
//!
//! This crate owns everything that is not presentation: the session data
//! model, the conversation controller that drives one generation request
//! per user turn, the Gemini client behind a provider trait, and the
//! configuration layer that resolves the API credential at startup.
//! Front ends read the controller's state and invoke its operations; they
//! never talk to the generation endpoint directly.

pub mod config;
pub mod controller;
pub mod core_types;
pub mod errors;
pub mod llm;

pub use config::MoodbotConfig;
pub use controller::{ConversationController, SubmitOutcome, FALLBACK_REPLY};
pub use core_types::{Message, Role, SessionState};
pub use errors::ChatError;
pub use llm::LLM;

#[cfg(test)]
pub mod test_utils;

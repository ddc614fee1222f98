//! Data model for a single chat session.
//!
//! A session is an insertion-ordered sequence of immutable messages, each
//! tagged with who produced it, plus the unsent input draft and the flag
//! marking an outstanding generation request. The controller is the sole
//! owner of this state; front ends only read snapshots of it.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Question,
    Answer,
}

/// One turn in the conversation. Created once, never mutated.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn question(content: impl Into<String>) -> Self {
        Self {
            role: Role::Question,
            content: content.into(),
        }
    }

    pub fn answer(content: impl Into<String>) -> Self {
        Self {
            role: Role::Answer,
            content: content.into(),
        }
    }
}

/// Mutable state of the current session.
///
/// `pending` is true while exactly one generation request is outstanding;
/// the conversation lives for the session only and is never persisted.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub conversation: Vec<Message>,
    pub draft: String,
    pub pending: bool,
}

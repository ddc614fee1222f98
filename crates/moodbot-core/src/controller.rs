//! Conversation controller.
//!
//! Owns the session state and drives exactly one generation request per
//! accepted user turn. The lifecycle is `idle -> pending -> idle`: pending
//! is entered only from idle and always cleared when the request resolves,
//! success or failure. There is no cancellation and no retry; a failed turn
//! is terminal and the user resubmits manually.

use std::sync::{Arc, Mutex};

use crate::core_types::{Message, SessionState};
use crate::llm::LLM;

/// Fixed literal substituted for any generation failure. The underlying
/// error is logged but never surfaced to the user beyond this string.
pub const FALLBACK_REPLY: &str = "Sorry - Something went wrong. Please try again!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The reply was appended to the conversation.
    Answered,
    /// Generation failed; the fallback message was appended instead.
    FellBack,
    /// A request was already in flight; nothing changed.
    Busy,
    /// The input was empty after trimming; nothing changed.
    EmptyInput,
}

pub struct ConversationController {
    state: Mutex<SessionState>,
    llm: Arc<dyn LLM>,
}

impl ConversationController {
    pub fn new(llm: Arc<dyn LLM>) -> Self {
        Self {
            state: Mutex::new(SessionState::default()),
            llm,
        }
    }

    /// Replace the draft unconditionally. No validation.
    pub fn update_draft(&self, text: &str) {
        self.state.lock().unwrap().draft = text.to_string();
    }

    pub fn draft(&self) -> String {
        self.state.lock().unwrap().draft.clone()
    }

    /// Snapshot of the conversation for rendering.
    pub fn conversation(&self) -> Vec<Message> {
        self.state.lock().unwrap().conversation.clone()
    }

    pub fn is_pending(&self) -> bool {
        self.state.lock().unwrap().pending
    }

    /// Submit one user turn.
    ///
    /// Appends the question, issues the request, and appends the reply or
    /// the fallback once it resolves. Refused while a request is already
    /// outstanding. The state lock is never held across the await.
    pub async fn submit(&self, text: &str) -> SubmitOutcome {
        let question = text.trim();
        if question.is_empty() {
            return SubmitOutcome::EmptyInput;
        }

        {
            let mut state = self.state.lock().unwrap();
            if state.pending {
                log::debug!("submit refused: a request is already in flight");
                return SubmitOutcome::Busy;
            }
            state.pending = true;
            state.draft.clear();
            state.conversation.push(Message::question(question));
        }

        let result = self.llm.generate(question).await;

        let mut state = self.state.lock().unwrap();
        let outcome = match result {
            Ok(reply) => {
                state.conversation.push(Message::answer(reply));
                SubmitOutcome::Answered
            }
            Err(err) => {
                log::error!("generation failed: {}", err);
                state.conversation.push(Message::answer(FALLBACK_REPLY));
                SubmitOutcome::FellBack
            }
        };
        state.pending = false;
        outcome
    }

    /// Submit the current draft, as a form submission does.
    pub async fn submit_draft(&self) -> SubmitOutcome {
        let draft = self.draft();
        self.submit(&draft).await
    }
}

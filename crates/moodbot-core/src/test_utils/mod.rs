//! Mock LLM implementations for controller tests.

use crate::errors::ChatError;
use crate::llm::LLM;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

/// A configurable mock LLM for testing
pub struct MockLLM {
    responses: Mutex<VecDeque<String>>,
    call_count: Mutex<usize>,
    should_fail: bool,
    error_message: String,
}

impl MockLLM {
    pub fn with_responses(responses: Vec<&str>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().map(String::from).collect()),
            call_count: Mutex::new(0),
            should_fail: false,
            error_message: String::new(),
        }
    }

    pub fn with_error(error_message: &str) -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            call_count: Mutex::new(0),
            should_fail: true,
            error_message: error_message.to_string(),
        }
    }

    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

#[async_trait]
impl LLM for MockLLM {
    async fn generate(&self, _question: &str) -> Result<String, ChatError> {
        *self.call_count.lock().unwrap() += 1;

        if self.should_fail {
            return Err(ChatError::Llm(self.error_message.clone()));
        }

        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| ChatError::Llm("mock ran out of responses".to_string()))
    }
}

/// A mock LLM that holds the request open for a fixed delay before replying,
/// used to observe the pending state mid-flight.
pub struct StallingLLM {
    reply: String,
    delay: Duration,
}

impl StallingLLM {
    pub fn new(reply: &str, delay: Duration) -> Self {
        Self {
            reply: reply.to_string(),
            delay,
        }
    }
}

#[async_trait]
impl LLM for StallingLLM {
    async fn generate(&self, _question: &str) -> Result<String, ChatError> {
        tokio::time::sleep(self.delay).await;
        Ok(self.reply.clone())
    }
}

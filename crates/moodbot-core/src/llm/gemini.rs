//! Google Gemini API client implementation
//!
//! This module provides a native Google Gemini API client that directly
//! integrates with Google's Generative AI `generateContent` endpoint.

use crate::errors::ChatError;
use crate::llm::LLM;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Google Gemini API client
pub struct GeminiClient {
    api_key: String,
    model: String,
    client: Client,
    base_url: String,
}

impl GeminiClient {
    /// Create a new Gemini client
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            api_key,
            model,
            client: Client::new(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
        }
    }

    /// Create a new Gemini client with custom base URL
    pub fn with_base_url(api_key: String, model: String, base_url: String) -> Self {
        Self {
            api_key,
            model,
            client: Client::new(),
            base_url,
        }
    }
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: GeminiContent,
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorDetails,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorDetails {
    code: u16,
    message: String,
}

fn build_request(question: &str) -> GeminiRequest {
    GeminiRequest {
        contents: vec![GeminiContent {
            parts: vec![GeminiPart {
                text: question.to_string(),
            }],
        }],
    }
}

fn extract_reply(response: GeminiResponse) -> Result<String, ChatError> {
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content.parts.into_iter().next())
        .map(|part| part.text)
        .ok_or_else(|| ChatError::Parsing("no candidates in Gemini response".to_string()))
}

#[async_trait]
impl LLM for GeminiClient {
    async fn generate(&self, question: &str) -> Result<String, ChatError> {
        let request = build_request(question);

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        log::debug!("Gemini request for model {}", self.model);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| ChatError::Llm(format!("Gemini API request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            if let Ok(gemini_error) = serde_json::from_str::<GeminiError>(&error_text) {
                return Err(ChatError::Llm(format!(
                    "Gemini API error {}: {}",
                    gemini_error.error.code, gemini_error.error.message
                )));
            }

            return Err(ChatError::Llm(format!(
                "Gemini API request failed with status {}: {}",
                status, error_text
            )));
        }

        let gemini_response: GeminiResponse = response
            .json()
            .await
            .map_err(|e| ChatError::Parsing(format!("Failed to parse Gemini response: {}", e)))?;

        extract_reply(gemini_response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    #[test]
    fn test_gemini_client_creation() {
        let client = GeminiClient::new("test-key".to_string(), "gemini-pro".to_string());
        assert_eq!(client.api_key, "test-key");
        assert_eq!(client.model, "gemini-pro");
        assert_eq!(
            client.base_url,
            "https://generativelanguage.googleapis.com/v1beta"
        );
    }

    #[test]
    fn test_request_body_matches_wire_shape() {
        let request = build_request("How are you?");
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "contents": [{ "parts": [{ "text": "How are you?" }] }] })
        );
    }

    #[test]
    fn test_extract_reply_reads_first_candidate() {
        let response: GeminiResponse = serde_json::from_value(json!({
            "candidates": [{ "content": { "parts": [{ "text": "Hello" }] } }]
        }))
        .unwrap();

        assert_eq!(extract_reply(response).unwrap(), "Hello");
    }

    #[test]
    fn test_extract_reply_fails_without_candidates() {
        let response: GeminiResponse = serde_json::from_value(json!({})).unwrap();
        let err = extract_reply(response).unwrap_err();
        assert!(matches!(err, ChatError::Parsing(_)));
    }

    #[test]
    fn test_extract_reply_fails_without_parts() {
        let response: GeminiResponse = serde_json::from_value(json!({
            "candidates": [{ "content": { "parts": [] } }]
        }))
        .unwrap();

        let err = extract_reply(response).unwrap_err();
        assert!(matches!(err, ChatError::Parsing(_)));
    }

    #[tokio::test]
    async fn test_generate_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/models/gemini-pro:generateContent")
            .match_query(Matcher::UrlEncoded("key".into(), "test-key".into()))
            .match_body(Matcher::Json(json!({
                "contents": [{ "parts": [{ "text": "Hi" }] }]
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "candidates": [{ "content": { "parts": [{ "text": "Hello" }] } }]
                })
                .to_string(),
            )
            .create_async()
            .await;

        let client = GeminiClient::with_base_url(
            "test-key".to_string(),
            "gemini-pro".to_string(),
            server.url(),
        );

        let reply = client.generate("Hi").await.unwrap();
        assert_eq!(reply, "Hello");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_generate_decodes_error_envelope() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/models/gemini-pro:generateContent")
            .match_query(Matcher::Any)
            .with_status(400)
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "error": { "code": 400, "message": "API key not valid" }
                })
                .to_string(),
            )
            .create_async()
            .await;

        let client = GeminiClient::with_base_url(
            "bad-key".to_string(),
            "gemini-pro".to_string(),
            server.url(),
        );

        let err = client.generate("Hi").await.unwrap_err();
        match err {
            ChatError::Llm(message) => {
                assert!(message.contains("400"));
                assert!(message.contains("API key not valid"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_generate_fails_on_non_json_body() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/models/gemini-pro:generateContent")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let client = GeminiClient::with_base_url(
            "test-key".to_string(),
            "gemini-pro".to_string(),
            server.url(),
        );

        let err = client.generate("Hi").await.unwrap_err();
        assert!(matches!(err, ChatError::Parsing(_)));
    }
}

//! Configuration for the chat session.
//!
//! A small YAML file selects the model and how the Gemini credential is
//! resolved. The credential is read once at startup; there is no rotation
//! or refresh. Resolution order: inline `api_key`, then the variable named
//! by `api_key_env`, then `GEMINI_API_KEY`.

use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

use crate::errors::ChatError;
use crate::llm::GeminiClient;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodbotConfig {
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default)]
    pub auth: GeminiAuth,
    /// Override for the Gemini endpoint, used by tests and proxies.
    #[serde(default)]
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GeminiAuth {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub api_key_env: Option<String>,
}

fn default_model() -> String {
    "gemini-pro".to_string()
}

impl Default for MoodbotConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            auth: GeminiAuth::default(),
            base_url: None,
        }
    }
}

impl MoodbotConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ChatError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| ChatError::Config(format!("failed to read {}: {}", path.display(), e)))?;
        serde_yaml::from_str(&raw)
            .map_err(|e| ChatError::Config(format!("invalid configuration: {}", e)))
    }

    pub fn resolve_api_key(&self) -> Result<String, ChatError> {
        if let Some(key) = &self.auth.api_key {
            return Ok(key.clone());
        }

        if let Some(env_var) = &self.auth.api_key_env {
            return env::var(env_var).map_err(|_| {
                ChatError::Config(format!(
                    "environment variable {} not found for Gemini API key",
                    env_var
                ))
            });
        }

        env::var("GEMINI_API_KEY").map_err(|_| {
            ChatError::Config(
                "no API key found for Gemini. Set GEMINI_API_KEY or provide api_key in the configuration".to_string(),
            )
        })
    }

    /// Build the Gemini client this configuration describes.
    pub fn into_client(self) -> Result<GeminiClient, ChatError> {
        let api_key = self.resolve_api_key()?;

        Ok(match self.base_url {
            Some(base_url) => GeminiClient::with_base_url(api_key, self.model, base_url),
            None => GeminiClient::new(api_key, self.model),
        })
    }
}

// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Gemini API client for text generation.
//!
//! One synchronous call per request against the Generative Language REST
//! API. No retries, no streaming, no local token limits; any failure is
//! collapsed to [`GenerationError::Internal`] so provider error shapes
//! never leak past this boundary.

use serde::{Deserialize, Serialize};

/// Model used for all generation requests.
pub const GENERATION_MODEL: &str = "gemini-1.5-flash";

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gateway failure, already logged with full detail at the call site.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("generation request failed")]
    Internal,
}

/// Gemini API client.
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl GeminiClient {
    /// Create a new client with the given API key.
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Create a client against a non-default endpoint (tests).
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            api_key,
        }
    }

    /// Generate text from a prompt with the given model.
    pub async fn generate(&self, model: &str, prompt: &str) -> Result<String, GenerationError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, model);

        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .http
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, model, "Gemini request failed");
                GenerationError::Internal
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(%status, body = %body, model, "Gemini returned error status");
            return Err(GenerationError::Internal);
        }

        let completion: GenerateContentResponse = response.json().await.map_err(|e| {
            tracing::error!(error = %e, model, "Failed to parse Gemini response");
            GenerationError::Internal
        })?;

        completion.text().ok_or_else(|| {
            tracing::error!(model, "Gemini response contained no candidates");
            GenerationError::Internal
        })
    }
}

// ─── Wire types (Generative Language API) ────────────────────────

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Content,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, if any.
    fn text(&self) -> Option<String> {
        let candidate = self.candidates.first()?;
        if candidate.content.parts.is_empty() {
            return None;
        }
        Some(
            candidate
                .content
                .parts
                .iter()
                .map(|p| p.text.as_str())
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_text_extraction() {
        let raw = serde_json::json!({
            "candidates": [{
                "content": {
                    "parts": [{"text": "You are "}, {"text": "doing great."}],
                    "role": "model"
                },
                "finishReason": "STOP"
            }]
        });

        let response: GenerateContentResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(response.text().unwrap(), "You are doing great.");
    }

    #[test]
    fn test_empty_candidates() {
        let response: GenerateContentResponse = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(response.text().is_none());
    }
}

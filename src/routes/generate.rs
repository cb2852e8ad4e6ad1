// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Generation endpoints.
//!
//! Three callable endpoints, all with the same shape: validate one required
//! field, build a prompt, make one Gemini call, return the generated text.
//! Caller identity is supplied by the hosting platform in front of this
//! service; there is no auth logic here.

use crate::error::{AppError, Result};
use crate::services::{prompts, GENERATION_MODEL};
use crate::AppState;
use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Generation routes, named after the original callable endpoints.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/generateAffirmation", post(generate_affirmation))
        .route("/generateEncouragement", post(generate_encouragement))
        .route("/generateNewAffirmation", post(generate_new_affirmation))
}

/// Validate a required request field: absent and empty both reject.
fn require_field(value: Option<String>, message: &str) -> Result<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => {
            tracing::error!("{}", message);
            Err(AppError::InvalidArgument(message.to_string()))
        }
    }
}

// ─── Fresh Affirmation ───────────────────────────────────────

#[derive(Deserialize)]
struct AffirmationRequest {
    prompt: Option<String>,
}

#[derive(Serialize)]
pub struct AffirmationResponse {
    pub affirmation: String,
}

/// Generate an affirmation from the caller's raw prompt.
async fn generate_affirmation(
    State(state): State<Arc<AppState>>,
    Json(request): Json<AffirmationRequest>,
) -> Result<Json<AffirmationResponse>> {
    tracing::info!("generateAffirmation request received");

    let prompt = require_field(request.prompt, "No prompt provided")?;

    let affirmation = state
        .gemini
        .generate(GENERATION_MODEL, &prompt)
        .await
        .map_err(|_| AppError::Internal("Error generating affirmation".to_string()))?;

    tracing::info!("Affirmation generated successfully");
    Ok(Json(AffirmationResponse { affirmation }))
}

// ─── Encouragement ───────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct EncouragementRequest {
    completed_activity: Option<String>,
}

#[derive(Serialize)]
pub struct EncouragementResponse {
    pub encouragement: String,
}

/// Generate an encouraging sentence for a completed activity.
async fn generate_encouragement(
    State(state): State<Arc<AppState>>,
    Json(request): Json<EncouragementRequest>,
) -> Result<Json<EncouragementResponse>> {
    tracing::info!("generateEncouragement request received");

    let completed_activity =
        require_field(request.completed_activity, "No completedActivity provided")?;

    let prompt = prompts::encouragement_prompt(&completed_activity);
    let encouragement = state
        .gemini
        .generate(GENERATION_MODEL, &prompt)
        .await
        .map_err(|_| AppError::Internal("Error generating encouragement".to_string()))?;

    tracing::info!("Encouragement generated successfully");
    Ok(Json(EncouragementResponse { encouragement }))
}

// ─── Replacement Affirmation ─────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct NewAffirmationRequest {
    disliked_affirmation: Option<String>,
}

/// Generate a replacement for an affirmation the user disliked.
async fn generate_new_affirmation(
    State(state): State<Arc<AppState>>,
    Json(request): Json<NewAffirmationRequest>,
) -> Result<Json<AffirmationResponse>> {
    tracing::info!("generateNewAffirmation request received");

    let disliked =
        require_field(request.disliked_affirmation, "No dislikedAffirmation provided")?;

    let prompt = prompts::replacement_affirmation_prompt(&disliked);
    let affirmation = state
        .gemini
        .generate(GENERATION_MODEL, &prompt)
        .await
        .map_err(|_| AppError::Internal("Error generating new affirmation".to_string()))?;

    tracing::info!("New affirmation generated successfully");
    Ok(Json(AffirmationResponse { affirmation }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_field_rejects_missing_and_empty() {
        let err = require_field(None, "No prompt provided").unwrap_err();
        assert!(matches!(err, AppError::InvalidArgument(msg) if msg == "No prompt provided"));

        let err = require_field(Some(String::new()), "No prompt provided").unwrap_err();
        assert!(matches!(err, AppError::InvalidArgument(_)));
    }

    #[test]
    fn test_require_field_passes_value_through() {
        let value = require_field(Some("10k run".to_string()), "unused").unwrap();
        assert_eq!(value, "10k run");
    }
}

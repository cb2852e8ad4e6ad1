// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use std::sync::Arc;
use uplift_api::config::Config;
use uplift_api::routes::create_router;
use uplift_api::services::GeminiClient;
use uplift_api::AppState;

/// Check if emulator is available via environment variable.
#[allow(dead_code)]
pub fn emulator_available() -> bool {
    std::env::var("FIRESTORE_EMULATOR_HOST").is_ok()
}

/// Skip test with message if emulator not available.
#[macro_export]
macro_rules! require_emulator {
    () => {
        if !crate::common::emulator_available() {
            eprintln!("⚠️  Skipping: FIRESTORE_EMULATOR_HOST not set");
            return;
        }
    };
}

/// Create a test app wired to the given Gemini client.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app(gemini: GeminiClient) -> (axum::Router, Arc<AppState>) {
    let config = Config::test_default();
    let state = Arc::new(AppState { config, gemini });
    (create_router(state.clone()), state)
}

/// Spawn a local HTTP server that answers every request with the given
/// status and JSON body, standing in for the Gemini API.
/// Returns the base URL to hand to `GeminiClient::with_base_url`.
#[allow(dead_code)]
pub async fn spawn_mock_gemini(
    status: axum::http::StatusCode,
    body: serde_json::Value,
) -> String {
    let app = axum::Router::new().fallback(move || {
        let body = body.clone();
        async move { (status, axum::Json(body)) }
    });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock Gemini listener");
    let addr = listener.local_addr().expect("Mock listener has no address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Mock Gemini server failed");
    });

    format!("http://{}/v1beta", addr)
}

/// A well-formed generateContent response carrying the given text.
#[allow(dead_code)]
pub fn gemini_success_body(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [{
            "content": {
                "parts": [{"text": text}],
                "role": "model"
            },
            "finishReason": "STOP"
        }]
    })
}

/// Create a test database connection against the emulator.
///
/// Uses a caller-supplied project ID so each test gets an isolated
/// namespace within the emulator.
#[allow(dead_code)]
pub async fn test_db(project_id: &str) -> uplift_api::db::FirestoreDb {
    uplift_api::db::FirestoreDb::new(project_id)
        .await
        .expect("Failed to connect to Firestore emulator")
}

/// Raw emulator client for seeding test data outside the typed wrapper.
#[allow(dead_code)]
pub async fn raw_emulator_client(project_id: &str) -> firestore::FirestoreDb {
    let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
        Ok(gcloud_sdk::Token {
            token_type: "Bearer".to_string(),
            token: gcloud_sdk::SecretValue::new(
                "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                    .to_string()
                    .into(),
            ),
            expiry: chrono::Utc::now() + chrono::Duration::hours(1),
        })
    });

    firestore::FirestoreDb::with_options_token_source(
        firestore::FirestoreDbOptions::new(project_id.to_string()),
        gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
        gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
    )
    .await
    .expect("Failed to connect raw client to Firestore emulator")
}

/// Unique per-test project ID to isolate emulator state.
#[allow(dead_code)]
pub fn unique_project_id(prefix: &str) -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    format!("{}-{}", prefix, nanos)
}

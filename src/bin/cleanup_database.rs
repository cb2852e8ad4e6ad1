// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore schema cleanup.
//!
//! Migrates every user's `daily_activities` map to the canonical shape
//! (drops the legacy `completed` field, forces `isActive`), then purges the
//! legacy `activities` subcollections and the `user_activities` collection.
//!
//! Credentials come from the ambient GCP environment; point
//! GOOGLE_APPLICATION_CREDENTIALS at a service account key file to run this
//! against a real project:
//!
//! ```text
//! GCP_PROJECT_ID=<project> cargo run --bin cleanup_database
//! ```

use uplift_api::db::FirestoreDb;
use uplift_api::services::maintenance;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().compact().init();

    dotenvy::dotenv().ok();
    let project_id =
        std::env::var("GCP_PROJECT_ID").unwrap_or_else(|_| "local-dev".to_string());

    tracing::info!(project = %project_id, "Starting database cleanup");

    let db = FirestoreDb::new(&project_id).await?;
    let summary = maintenance::migrate_daily_activities(&db).await?;

    tracing::info!(
        users_scanned = summary.users_scanned,
        users_rewritten = summary.users_rewritten,
        documents_purged = summary.documents_purged,
        "Database cleanup complete"
    );

    Ok(())
}

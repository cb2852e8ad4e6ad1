// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore client wrapper with typed operations.
//!
//! Provides high-level operations for:
//! - Users (listing, rewriting the `daily_activities` map)
//! - Accomplishments (daily report queries)
//! - Batched collection purges (legacy data cleanup)

use crate::db::{collections, DOCUMENT_NAME_FIELD};
use crate::error::AppError;
use crate::models::{Accomplishment, DailyActivity, User};
use chrono::{DateTime, Utc};
use firestore::{FirestoreDocument, FirestoreQueryDirection, ParentPathBuilder};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Partial user document used for masked updates of the activities map.
#[derive(Serialize, Deserialize)]
struct DailyActivitiesUpdate {
    daily_activities: HashMap<String, DailyActivity>,
}

/// Outcome of a batched collection purge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PurgeStats {
    /// Documents deleted
    pub documents: usize,
    /// Batch commits issued (one per non-empty page)
    pub batches: usize,
}

/// Firestore database client.
#[derive(Clone)]
pub struct FirestoreDb {
    client: Option<firestore::FirestoreDb>,
}

impl FirestoreDb {
    /// Create a new Firestore client.
    ///
    /// For local development with emulator, set FIRESTORE_EMULATOR_HOST.
    pub async fn new(project_id: &str) -> Result<Self, AppError> {
        // If the emulator environment variable is set, use unauthenticated connection
        // to avoid local credential warnings and leakage.
        if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            return Self::create_emulator_client(project_id).await;
        }

        let client = firestore::FirestoreDb::new(project_id)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to Firestore: {}", e)))?;

        tracing::info!(project = project_id, "Connected to Firestore");

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a Firestore client for the emulator with unauthenticated access.
    async fn create_emulator_client(project_id: &str) -> Result<Self, AppError> {
        tracing::info!("Using unauthenticated connection for Firestore Emulator");

        // Use ExternalJwtFunctionSource to provide a dummy token without needing
        // a custom TokenSource implementation struct.
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

        let options = firestore::FirestoreDbOptions::new(project_id.to_string());

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| {
            AppError::Database(format!("Failed to connect to Firestore Emulator: {}", e))
        })?;

        tracing::info!(
            project = project_id,
            "Connected to Firestore (Emulator/Unauthenticated)"
        );

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a mock Firestore client for testing (offline mode).
    ///
    /// All database operations will return an error if called.
    pub fn new_mock() -> Self {
        Self { client: None }
    }

    /// Helper to get the client or return an error if offline.
    fn get_client(&self) -> Result<&firestore::FirestoreDb, AppError> {
        self.client
            .as_ref()
            .ok_or_else(|| AppError::Database("Database not connected (offline mode)".to_string()))
    }

    /// Build the parent path for a user's subcollections.
    pub fn user_parent_path(&self, user_id: &str) -> Result<ParentPathBuilder, AppError> {
        self.get_client()?
            .parent_path(collections::USERS, user_id)
            .map_err(|e| AppError::Database(e.to_string()))
    }

    // ─── User Operations ─────────────────────────────────────────

    /// List every user document together with its document ID.
    ///
    /// Fetches raw documents because the document ID (the auth UID) is not
    /// duplicated inside the user fields.
    pub async fn list_users(&self) -> Result<Vec<(String, User)>, AppError> {
        let docs: Vec<FirestoreDocument> = self
            .get_client()?
            .fluent()
            .select()
            .from(collections::USERS)
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        docs.iter()
            .map(|doc| {
                let user = firestore::FirestoreDb::deserialize_doc_to::<User>(doc)
                    .map_err(|e| AppError::Database(e.to_string()))?;
                Ok((document_id(doc).to_string(), user))
            })
            .collect()
    }

    /// Replace a user's entire `daily_activities` map.
    ///
    /// Masked update: only the activities field is touched, the rest of the
    /// user document is left alone.
    pub async fn set_daily_activities(
        &self,
        user_id: &str,
        activities: &HashMap<String, DailyActivity>,
    ) -> Result<(), AppError> {
        let update = DailyActivitiesUpdate {
            daily_activities: activities.clone(),
        };

        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .fields(firestore::paths!(DailyActivitiesUpdate::{daily_activities}))
            .in_col(collections::USERS)
            .document_id(user_id)
            .object(&update)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    // ─── Accomplishment Operations ───────────────────────────────

    /// Get one user's accomplishments within `[start, end)`, oldest first.
    pub async fn accomplishments_for_range(
        &self,
        user_id: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Accomplishment>, AppError> {
        let parent = self.user_parent_path(user_id)?;

        self.get_client()?
            .fluent()
            .select()
            .from(collections::ACCOMPLISHMENTS)
            .parent(&parent)
            .filter(|q| {
                q.for_all([
                    q.field("timestamp")
                        .greater_than_or_equal(firestore::FirestoreTimestamp(start)),
                    q.field("timestamp")
                        .less_than(firestore::FirestoreTimestamp(end)),
                ])
            })
            .order_by([("timestamp", FirestoreQueryDirection::Ascending)])
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    // ─── Batched Collection Purge ────────────────────────────────

    /// Delete every document in a collection, one page at a time.
    ///
    /// Repeatedly fetches up to `page_size` documents ordered by document
    /// name, deletes the page in a single transaction, and re-queries the
    /// same path. Each commit shrinks the remaining set by exactly
    /// `min(page_size, remaining)`, so the loop terminates after
    /// `ceil(N / page_size)` commits. Pages are strictly sequential: the
    /// next query must observe the previous commit or the loop would spin
    /// on the same documents.
    ///
    /// Safe to re-run: an already-empty collection yields zero commits.
    /// Any query or commit error aborts the purge and propagates.
    pub async fn delete_collection(
        &self,
        parent: Option<&ParentPathBuilder>,
        collection_id: &str,
        page_size: u32,
    ) -> Result<PurgeStats, AppError> {
        let client = self.get_client()?;
        let mut stats = PurgeStats::default();

        loop {
            let select = client.fluent().select().from(collection_id);
            let select = match parent {
                Some(p) => select.parent(p),
                None => select,
            };

            let page: Vec<FirestoreDocument> = select
                .order_by([(DOCUMENT_NAME_FIELD, FirestoreQueryDirection::Ascending)])
                .limit(page_size)
                .query()
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;

            if page.is_empty() {
                break;
            }

            let mut transaction = client
                .begin_transaction()
                .await
                .map_err(|e| AppError::Database(format!("Failed to begin transaction: {}", e)))?;

            for doc in &page {
                let delete = client.fluent().delete().from(collection_id);
                let delete = match parent {
                    Some(p) => delete.parent(p),
                    None => delete,
                };
                delete
                    .document_id(document_id(doc))
                    .add_to_transaction(&mut transaction)
                    .map_err(|e| {
                        AppError::Database(format!(
                            "Failed to add deletion to transaction for {}: {}",
                            collection_id, e
                        ))
                    })?;
            }

            transaction.commit().await.map_err(|e| {
                AppError::Database(format!("Failed to commit batch deletion: {}", e))
            })?;

            stats.documents += page.len();
            stats.batches += 1;

            // Yield between pages so a large purge cannot starve the executor.
            tokio::task::yield_now().await;
        }

        tracing::debug!(
            collection = collection_id,
            documents = stats.documents,
            batches = stats.batches,
            "Collection purge complete"
        );

        Ok(stats)
    }
}

/// Extract the document ID (last path segment) from a raw document name.
fn document_id(doc: &FirestoreDocument) -> &str {
    doc.name.rsplit('/').next().unwrap_or_default()
}

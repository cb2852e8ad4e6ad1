// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Daily activity and accomplishment models for storage.

use serde::{Deserialize, Serialize};

/// Canonical daily activity entry as stored in `users.daily_activities`.
///
/// Entry field names are camelCase in Firestore because the client app
/// writes them that way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyActivity {
    pub id: String,
    pub name: String,
    pub emoji: String,
    pub is_active: bool,
}

/// Daily activity entry as it may exist in the store before migration.
///
/// Pre-migration documents can carry a legacy `completed` flag and may
/// lack `isActive` entirely, so both are optional on the read side.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredDailyActivity {
    pub id: String,
    pub name: String,
    pub emoji: String,
    #[serde(default)]
    pub is_active: Option<bool>,
    /// Legacy field, dropped by the schema migration
    #[serde(default)]
    pub completed: Option<bool>,
}

/// Accomplishment record under `users/{uid}/accomplishments`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Accomplishment {
    /// Name of the completed activity
    pub activity: String,
    /// When the activity was completed (native Firestore timestamp)
    #[serde(with = "firestore::serialize_as_timestamp")]
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

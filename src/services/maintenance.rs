// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Schema migration for the daily activities map.
//!
//! Migrates each user's `daily_activities` entries to the canonical
//! four-field shape (dropping the legacy `completed` flag), then purges the
//! legacy per-user `activities` subcollections and the top-level
//! `user_activities` collection.
//!
//! Offline tool: a concurrent client write to `daily_activities` during the
//! read-rewrite-write window is lost (last-writer-wins).

use crate::db::{collections, FirestoreDb};
use crate::error::AppError;
use crate::models::{DailyActivity, StoredDailyActivity};
use std::collections::HashMap;

/// Page size for legacy collection purges.
pub const PURGE_PAGE_SIZE: u32 = 50;

/// Counters reported by [`migrate_daily_activities`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MigrationSummary {
    /// User documents scanned
    pub users_scanned: usize,
    /// Users whose activities map was rewritten
    pub users_rewritten: usize,
    /// Legacy documents deleted across all purged collections
    pub documents_purged: usize,
}

/// Rewrite an activities map to the canonical shape.
///
/// Every entry is re-emitted with `is_active` forced to `true` and the
/// legacy `completed` field dropped. Returns the rewritten map and whether
/// any entry carried the legacy field.
pub fn rewrite_daily_activities(
    activities: &HashMap<String, StoredDailyActivity>,
) -> (HashMap<String, DailyActivity>, bool) {
    let mut rewritten = HashMap::with_capacity(activities.len());
    let mut had_legacy = false;

    for (activity_id, activity) in activities {
        rewritten.insert(
            activity_id.clone(),
            DailyActivity {
                id: activity.id.clone(),
                name: activity.name.clone(),
                emoji: activity.emoji.clone(),
                is_active: true,
            },
        );
        if activity.completed.is_some() {
            had_legacy = true;
        }
    }

    (rewritten, had_legacy)
}

/// Run the full migration across all users.
///
/// For each user: rewrite the activities map (persisted only when a legacy
/// field was found), then unconditionally purge the user's legacy
/// `activities` subcollection. Finally purge the top-level
/// `user_activities` collection.
pub async fn migrate_daily_activities(db: &FirestoreDb) -> Result<MigrationSummary, AppError> {
    let mut summary = MigrationSummary::default();

    let users = db.list_users().await?;
    summary.users_scanned = users.len();

    for (user_id, user) in users {
        if let Some(activities) = &user.daily_activities {
            let (rewritten, had_legacy) = rewrite_daily_activities(activities);

            if had_legacy {
                tracing::info!(user = %user_id, "Rewriting daily activities");
                db.set_daily_activities(&user_id, &rewritten).await?;
                summary.users_rewritten += 1;
            }
        }

        tracing::info!(user = %user_id, "Purging legacy activities subcollection");
        let parent = db.user_parent_path(&user_id)?;
        let stats = db
            .delete_collection(Some(&parent), collections::ACTIVITIES, PURGE_PAGE_SIZE)
            .await?;
        summary.documents_purged += stats.documents;
    }

    tracing::info!("Purging user_activities collection");
    let stats = db
        .delete_collection(None, collections::USER_ACTIVITIES, PURGE_PAGE_SIZE)
        .await?;
    summary.documents_purged += stats.documents;

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored(completed: Option<bool>, is_active: Option<bool>) -> StoredDailyActivity {
        StoredDailyActivity {
            id: "walk".to_string(),
            name: "Walk".to_string(),
            emoji: "🚶".to_string(),
            is_active,
            completed,
        }
    }

    #[test]
    fn test_rewrite_drops_legacy_field() {
        let mut activities = HashMap::new();
        activities.insert("walk".to_string(), stored(Some(true), None));

        let (rewritten, had_legacy) = rewrite_daily_activities(&activities);

        assert!(had_legacy);
        let entry = &rewritten["walk"];
        assert!(entry.is_active);
        assert_eq!(entry.id, "walk");
        assert_eq!(entry.name, "Walk");
        assert_eq!(entry.emoji, "🚶");
    }

    #[test]
    fn test_rewrite_forces_is_active_even_when_previously_false() {
        let mut activities = HashMap::new();
        activities.insert("walk".to_string(), stored(None, Some(false)));

        let (rewritten, had_legacy) = rewrite_daily_activities(&activities);

        assert!(!had_legacy);
        assert!(rewritten["walk"].is_active);
    }

    #[test]
    fn test_rewrite_empty_map() {
        let (rewritten, had_legacy) = rewrite_daily_activities(&HashMap::new());
        assert!(rewritten.is_empty());
        assert!(!had_legacy);
    }

    #[test]
    fn test_legacy_detection_spans_entries() {
        let mut activities = HashMap::new();
        activities.insert("walk".to_string(), stored(None, Some(true)));
        activities.insert("read".to_string(), stored(Some(false), Some(true)));

        let (rewritten, had_legacy) = rewrite_daily_activities(&activities);

        assert!(had_legacy);
        assert_eq!(rewritten.len(), 2);
    }
}

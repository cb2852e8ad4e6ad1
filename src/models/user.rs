//! User model for storage.

use crate::models::StoredDailyActivity;
use serde::Deserialize;
use std::collections::HashMap;

/// User profile stored in Firestore, keyed by the auth UID.
///
/// The client app owns these documents; the maintenance tooling only reads
/// them and rewrites the `daily_activities` map, so everything else is
/// left unmodelled.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct User {
    /// Map from activity ID to the stored activity entry
    #[serde(default)]
    pub daily_activities: Option<HashMap<String, StoredDailyActivity>>,
}

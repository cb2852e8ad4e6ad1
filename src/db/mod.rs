//! Database layer (Firestore).

pub mod firestore;

pub use firestore::{FirestoreDb, PurgeStats};

/// Collection names as constants.
pub mod collections {
    pub const USERS: &str = "users";
    /// Legacy per-user subcollection, purge-only
    pub const ACTIVITIES: &str = "activities";
    /// Accomplishments subcollection under each user
    pub const ACCOMPLISHMENTS: &str = "accomplishments";
    /// Legacy top-level collection, purge-only
    pub const USER_ACTIVITIES: &str = "user_activities";
}

/// Firestore's pseudo-field for ordering by document name.
pub const DOCUMENT_NAME_FIELD: &str = "__name__";

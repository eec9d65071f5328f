//! Domain data types.
//!
//! Entities are plain serde-derived structs. Record attributes shared by
//! every stored entity (identifier plus creation/update timestamps) live in
//! [`RecordMeta`] and are embedded by each concrete entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::interfaces::repository::Storable;

/// Lifecycle status of a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    /// Account is live. New users start here.
    #[default]
    Active,
    /// Account has been deactivated.
    Inactive,
    /// Account is awaiting activation.
    Pending,
}

/// Record attributes shared by every stored entity.
///
/// The identifier is immutable after creation. `updated_at` is refreshed by
/// the repository on every successful save and never precedes `created_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordMeta {
    /// Unique identifier the entity is stored under.
    pub id: String,
    /// When the entity was created.
    pub created_at: DateTime<Utc>,
    /// When the entity was last saved.
    pub updated_at: DateTime<Utc>,
}

impl RecordMeta {
    /// Create record attributes for a new entity, stamping both timestamps.
    pub fn new(id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Example concrete entity managed by [`crate::services::UserService`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Shared record attributes, flattened into the serialized form.
    #[serde(flatten)]
    pub record: RecordMeta,
    /// Display name.
    pub name: String,
    /// Contact email address; also the notification recipient.
    pub email: String,
    /// Lifecycle status.
    pub status: UserStatus,
}

impl User {
    /// Create a candidate user in the default [`UserStatus::Active`] status.
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            record: RecordMeta::new(id),
            name: name.into(),
            email: email.into(),
            status: UserStatus::Active,
        }
    }
}

impl Storable for User {
    fn record(&self) -> &RecordMeta {
        &self.record
    }

    fn record_mut(&mut self) -> &mut RecordMeta {
        &mut self.record
    }
}

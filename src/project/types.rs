/// Core project type definitions
///
/// Defines the stored project record and the request payload shape.
/// These types are serialized/deserialized as JSON on the HTTP surface
/// and mapped to rows of the `projects` table.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored project record
///
/// Mirrors one row of the `projects` table. The id is assigned by the
/// database on insert and never changes afterwards. Only `name`,
/// `start_date` and `completion_percentage` are guaranteed present;
/// every other field is nullable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Project {
    /// Auto-assigned primary key
    pub id: i64,
    /// Project name
    pub name: String,
    /// Business area the project belongs to
    pub area: Option<String>,
    /// Free-form description
    pub description: Option<String>,
    /// When work on the project started
    pub start_date: DateTime<Utc>,
    /// When work ended, if it has
    pub end_date: Option<DateTime<Utc>>,
    /// Progress figure; no range is enforced
    pub completion_percentage: f64,
    /// Free-form comments
    pub comments: Option<String>,
    /// Person responsible for the project
    pub owner: Option<String>,
}

/// Request body for project creation and update
///
/// Both operations accept the same field set, so one payload type serves
/// both. Every field is optional at the deserialization boundary: on
/// insert, absent fields bind NULL and the table's NOT NULL constraints
/// decide whether the row is acceptable; on update, absent fields keep
/// their stored values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectPayload {
    pub name: Option<String>,
    pub area: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub completion_percentage: Option<f64>,
    pub comments: Option<String>,
    pub owner: Option<String>,
}

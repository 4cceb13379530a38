//! Task record types.
//!
//! [`Task`] is the sole entity in the library: a scheduled item with a
//! title, a civil date-and-time, a duration, and a completion flag. Records
//! are immutable after creation except for `completed`, which the store
//! flips in place. [`NewTask`] is the validated record-without-id handed to
//! the store by the creation boundary.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Well-known category labels offered by the creation form.
///
/// Categories are an open set: storage accepts any label, these are only
/// the ones the UI lists.
pub const CATEGORIES: [&str; 6] = [
    "Work",
    "Personal",
    "Health",
    "Meeting",
    "Learning",
    "Other",
];

/// Task priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored task record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Opaque unique identifier, assigned by the store, immutable.
    pub id: Uuid,
    /// Non-empty at creation time; not re-validated afterwards.
    pub title: String,
    pub description: Option<String>,
    /// Civil (timezone-free) wall-clock moment the task is scheduled for.
    pub scheduled_at: NaiveDateTime,
    /// Length in minutes.
    pub duration_min: u32,
    /// Optional label from an open set; see [`CATEGORIES`].
    pub category: Option<String>,
    pub priority: Priority,
    /// The only field mutated post-creation.
    pub completed: bool,
}

impl Task {
    /// Scheduled end of the task.
    pub fn end_at(&self) -> NaiveDateTime {
        self.scheduled_at + Duration::minutes(i64::from(self.duration_min))
    }
}

/// A record-without-id, as emitted by the creation boundary and consumed
/// by [`TaskStore::add`](crate::store::TaskStore::add).
///
/// Stored tasks always start with `completed = false`, so the field is not
/// carried here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub scheduled_at: NaiveDateTime,
    pub duration_min: u32,
    pub category: Option<String>,
    pub priority: Priority,
}

impl NewTask {
    /// Create a record with the given title and schedule; everything else
    /// takes the form defaults (30 minutes, no description, no category,
    /// medium priority).
    pub fn new(title: impl Into<String>, scheduled_at: NaiveDateTime) -> Self {
        NewTask {
            title: title.into(),
            description: None,
            scheduled_at,
            duration_min: 30,
            category: None,
            priority: Priority::default(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_duration(mut self, minutes: u32) -> Self {
        self.duration_min = minutes;
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }
}

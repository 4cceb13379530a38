//! Task creation boundary.
//!
//! [`TaskDraft`] mirrors the creation form: loose field values collected
//! while the user types, checked all at once by [`TaskDraft::build`]. The
//! store never validates, so every rule lives here at the edge: non-empty
//! title, a selected date, a parseable `HH:MM` time, and a duration within
//! bounds.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidationError};
use crate::task::{NewTask, Priority};

/// Smallest accepted duration, in minutes.
pub const MIN_DURATION_MINUTES: u32 = 5;
/// Largest accepted duration, in minutes (a full 8-hour day).
pub const MAX_DURATION_MINUTES: u32 = 480;

/// Time-of-day the form starts with.
pub const DEFAULT_TIME: &str = "12:00";
/// Duration the form starts with, in minutes.
pub const DEFAULT_DURATION_MINUTES: u32 = 30;

/// Field values collected for a new task, before validation.
///
/// Unlike [`NewTask`] a draft may be incomplete or malformed; it becomes a
/// record only through [`build`](Self::build). There is no edit mode:
/// every successful build is a creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskDraft {
    pub title: String,
    /// Free text; whitespace-only input is normalized to no description.
    pub description: String,
    /// Calendar day; `None` until one is picked.
    pub date: Option<NaiveDate>,
    /// Time-of-day as typed, 24-hour `HH:MM`.
    pub time: String,
    pub duration_min: u32,
    pub category: Option<String>,
    pub priority: Priority,
}

impl Default for TaskDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            date: None,
            time: DEFAULT_TIME.to_string(),
            duration_min: DEFAULT_DURATION_MINUTES,
            category: None,
            priority: Priority::default(),
        }
    }
}

impl TaskDraft {
    /// Start a draft for the given day with the form defaults.
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            date: Some(date),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = time.into();
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

    /// Adopt a suggested slot: sets both the date and the time field.
    pub fn at_slot(mut self, slot: NaiveDateTime) -> Self {
        self.date = Some(slot.date());
        self.time = slot.format("%H:%M").to_string();
        self
    }

    /// Validate the draft and assemble the record for the store.
    ///
    /// # Errors
    ///
    /// Returns the first failed check: [`ValidationError::EmptyTitle`],
    /// [`ValidationError::MissingDate`], [`ValidationError::InvalidTime`]
    /// or [`ValidationError::DurationOutOfRange`].
    pub fn build(&self) -> Result<NewTask> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }

        let date = self.date.ok_or(ValidationError::MissingDate)?;

        let time = NaiveTime::parse_from_str(self.time.trim(), "%H:%M").map_err(|_| {
            ValidationError::InvalidTime {
                given: self.time.clone(),
            }
        })?;

        if !(MIN_DURATION_MINUTES..=MAX_DURATION_MINUTES).contains(&self.duration_min) {
            return Err(ValidationError::DurationOutOfRange {
                given: self.duration_min,
            });
        }

        let description = match self.description.trim() {
            "" => None,
            text => Some(text.to_string()),
        };
        let category = self
            .category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string);

        Ok(NewTask {
            title: title.to_string(),
            description,
            scheduled_at: date.and_time(time),
            duration_min: self.duration_min,
            category,
            priority: self.priority,
        })
    }
}

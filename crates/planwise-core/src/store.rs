//! In-memory task store.
//!
//! The store is the single owner of the task collection: every mutation
//! flows through it, and every other component receives read-only slices
//! or hands intents back to it. Records are kept in insertion order; day
//! views sort on derivation, not here.

use chrono::{Duration, NaiveDate};
use tracing::debug;
use uuid::Uuid;

use crate::task::{NewTask, Priority, Task};

/// Owner of the in-memory task collection.
///
/// Mutation surface is deliberately small: `add` appends, `set_completed`
/// flips the one mutable flag. There is no delete or edit operation, and
/// nothing is persisted; the collection lives and dies with the session.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// A store pre-seeded with the demo schedule around `today`.
    pub fn with_sample_schedule(today: NaiveDate) -> Self {
        let mut store = Self::new();
        for record in sample_schedule(today) {
            store.add(record);
        }
        store
    }

    // ── Mutations ────────────────────────────────────────────────────

    /// Append a record, assigning it a fresh unique id, and return the
    /// stored task.
    ///
    /// Never fails: malformed input is rejected upstream at the creation
    /// boundary, not validated here.
    pub fn add(&mut self, record: NewTask) -> Task {
        let task = Task {
            id: Uuid::new_v4(),
            title: record.title,
            description: record.description,
            scheduled_at: record.scheduled_at,
            duration_min: record.duration_min,
            category: record.category,
            priority: record.priority,
            completed: false,
        };
        debug!(id = %task.id, title = %task.title, "task added");
        self.tasks.push(task.clone());
        task
    }

    /// Set the `completed` flag of the matching record.
    ///
    /// Silently a no-op when the id is unknown.
    pub fn set_completed(&mut self, id: Uuid, completed: bool) {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.completed = completed;
                debug!(%id, completed, "task completion updated");
            }
            None => debug!(%id, "completion toggle for unknown task ignored"),
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    /// The full sequence, in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// The demo schedule a fresh session is seeded with: four tasks on `today`,
/// two on the following day.
pub fn sample_schedule(today: NaiveDate) -> Vec<NewTask> {
    let tomorrow = today + Duration::days(1);
    let rows: [(&str, NaiveDate, u32, u32, u32, &str, Priority); 6] = [
        ("Team meeting with design department", today, 10, 0, 60, "Meeting", Priority::High),
        ("Complete quarterly report", today, 14, 30, 90, "Work", Priority::Medium),
        ("Lunch with Sarah", today, 12, 0, 60, "Personal", Priority::Low),
        ("Gym workout", today, 18, 0, 45, "Health", Priority::Medium),
        ("Review marketing materials", tomorrow, 9, 30, 45, "Work", Priority::Medium),
        ("Call with client", tomorrow, 15, 0, 30, "Meeting", Priority::High),
    ];

    rows.into_iter()
        .filter_map(|(title, day, hour, minute, duration, category, priority)| {
            let scheduled_at = day.and_hms_opt(hour, minute, 0)?;
            Some(
                NewTask::new(title, scheduled_at)
                    .with_duration(duration)
                    .with_category(category)
                    .with_priority(priority),
            )
        })
        .collect()
}

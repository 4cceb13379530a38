//! Planner session state.
//!
//! The dashboard's view model: one owned store, a selected date, and the
//! completed-visibility flag. Views are derived on demand from here, and
//! every mutation intent flows through here into the store; no other
//! component holds the collection.

use chrono::{NaiveDate, NaiveDateTime};
use uuid::Uuid;

use crate::agenda;
use crate::config::Config;
use crate::draft::TaskDraft;
use crate::error::Result;
use crate::stats::{self, ProgressSummary};
use crate::store::TaskStore;
use crate::suggest::{self, Workday};
use crate::task::Task;

/// Session facade over the task store and the view selection.
#[derive(Debug, Clone)]
pub struct Planner {
    store: TaskStore,
    selected_date: NaiveDate,
    show_completed: bool,
    workday: Workday,
}

impl Planner {
    /// An empty planner focused on `date`.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            store: TaskStore::new(),
            selected_date: date,
            show_completed: true,
            workday: Workday::default(),
        }
    }

    /// A planner seeded with the demo schedule, focused on `today`.
    pub fn with_sample_schedule(today: NaiveDate) -> Self {
        Self {
            store: TaskStore::with_sample_schedule(today),
            ..Self::new(today)
        }
    }

    /// Adopt configured workday bounds.
    pub fn with_config(mut self, config: &Config) -> Self {
        self.workday = config.workday();
        self
    }

    // ── View selection ───────────────────────────────────────────────

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    pub fn select_date(&mut self, date: NaiveDate) {
        self.selected_date = date;
    }

    pub fn show_completed(&self) -> bool {
        self.show_completed
    }

    pub fn set_show_completed(&mut self, show: bool) {
        self.show_completed = show;
    }

    /// Flip the visibility flag; returns the new value.
    pub fn toggle_show_completed(&mut self) -> bool {
        self.show_completed = !self.show_completed;
        self.show_completed
    }

    // ── Derived views ────────────────────────────────────────────────

    /// The selected day's agenda under the current visibility flag.
    pub fn agenda(&self) -> Vec<&Task> {
        agenda::tasks_for_day(self.store.tasks(), self.selected_date, self.show_completed)
    }

    /// Candidate slots for the selected day.
    pub fn suggested_times(&self) -> Vec<NaiveDateTime> {
        suggest::suggest_times_with(self.workday, self.store.tasks(), self.selected_date)
    }

    /// Progress over the whole collection, not only the selected day.
    pub fn progress(&self) -> ProgressSummary {
        stats::summarize(self.store.tasks())
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    // ── Intents ──────────────────────────────────────────────────────

    /// Validate a draft and, on success, add the record to the store.
    ///
    /// # Errors
    ///
    /// Propagates the draft's [`ValidationError`](crate::ValidationError);
    /// the store is untouched on rejection.
    pub fn create_task(&mut self, draft: &TaskDraft) -> Result<Task> {
        let record = draft.build()?;
        Ok(self.store.add(record))
    }

    /// Forwarded to [`TaskStore::set_completed`]; unknown ids are a
    /// silent no-op.
    pub fn set_completed(&mut self, id: Uuid, completed: bool) {
        self.store.set_completed(id, completed);
    }
}

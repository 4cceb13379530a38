//! Candidate time-slot suggestion.
//!
//! The dashboard's "optimal times" strip: three fixed candidates per day,
//! derived from the configured workday. There is no optimization behind
//! it, and deliberately no pretence of one.

use chrono::{NaiveDate, NaiveDateTime};

use crate::task::Task;

/// Hour the default workday starts.
pub const DEFAULT_WORK_START_HOUR: u32 = 9;
/// Hour the default workday ends.
pub const DEFAULT_WORK_END_HOUR: u32 = 17;

/// The fixed midday anchor slot, emitted regardless of workday bounds.
const MIDDAY: (u32, u32) = (12, 30);

/// Workday bounds used to derive candidate slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Workday {
    pub start_hour: u32,
    pub end_hour: u32,
}

impl Default for Workday {
    fn default() -> Self {
        Self {
            start_hour: DEFAULT_WORK_START_HOUR,
            end_hour: DEFAULT_WORK_END_HOUR,
        }
    }
}

/// Suggest up to three candidate times on `date`'s calendar day with the
/// default workday: the workday start, 12:30, and two hours before the
/// workday end (09:00, 12:30, 15:00).
///
/// Deterministic given `date`: no randomness, no clock reads, no I/O.
///
/// `tasks` is accepted but not consulted, so suggestions can land on
/// already-busy slots.
// TODO: check candidates against the day's busy intervals (scheduled_at ..
// end_at) and skip occupied ones; needs a decision on what to emit when
// all three slots are taken.
pub fn suggest_times(tasks: &[Task], date: NaiveDate) -> Vec<NaiveDateTime> {
    suggest_times_with(Workday::default(), tasks, date)
}

/// Same derivation with explicit workday bounds.
pub fn suggest_times_with(
    workday: Workday,
    _tasks: &[Task],
    date: NaiveDate,
) -> Vec<NaiveDateTime> {
    let wind_down = workday.end_hour.saturating_sub(2);
    let candidates = [(workday.start_hour, 0), MIDDAY, (wind_down, 0)];

    candidates
        .into_iter()
        .filter_map(|(hour, minute)| date.and_hms_opt(hour, minute, 0))
        .collect()
}

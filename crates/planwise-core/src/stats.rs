//! Progress summaries over the task collection.
//!
//! Pure counting, derived fresh on every call; the numbers behind the
//! dashboard's progress chart.

use serde::{Deserialize, Serialize};

use crate::task::{Priority, Task};

/// Completed vs pending counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionBreakdown {
    pub completed: usize,
    pub pending: usize,
}

/// Task counts per priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityBreakdown {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

/// Snapshot of the whole collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressSummary {
    pub total: usize,
    pub completion: CompletionBreakdown,
    pub priority: PriorityBreakdown,
}

impl ProgressSummary {
    /// Share of completed tasks in `0.0..=1.0`; `0.0` for an empty
    /// collection.
    pub fn completion_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.completion.completed as f64 / self.total as f64
    }
}

/// Count the collection into a summary.
pub fn summarize(tasks: &[Task]) -> ProgressSummary {
    let completed = tasks.iter().filter(|t| t.completed).count();
    let by_priority = |p: Priority| tasks.iter().filter(|t| t.priority == p).count();

    ProgressSummary {
        total: tasks.len(),
        completion: CompletionBreakdown {
            completed,
            pending: tasks.len() - completed,
        },
        priority: PriorityBreakdown {
            high: by_priority(Priority::High),
            medium: by_priority(Priority::Medium),
            low: by_priority(Priority::Low),
        },
    }
}

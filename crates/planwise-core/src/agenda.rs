//! Day-view derivations over the task collection.
//!
//! Pure functions only: the store owns the data, these produce ordered
//! read-only views of it. Nothing here mutates or copies records.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::task::Task;

/// Tasks scheduled on `day`, ascending by scheduled time.
///
/// A task belongs to the day when the year, month and day components of
/// its `scheduled_at` match. When `show_completed` is false, completed
/// tasks are excluded. The sort is stable: tasks sharing a scheduled time
/// keep their input order.
pub fn tasks_for_day(tasks: &[Task], day: NaiveDate, show_completed: bool) -> Vec<&Task> {
    let mut selected: Vec<&Task> = tasks
        .iter()
        .filter(|t| t.scheduled_at.date() == day)
        .filter(|t| show_completed || !t.completed)
        .collect();
    selected.sort_by_key(|t| t.scheduled_at);
    selected
}

/// Group tasks by calendar day.
///
/// Keys come out ascending; each day's tasks stay in input order.
pub fn group_by_day(tasks: &[Task]) -> BTreeMap<NaiveDate, Vec<&Task>> {
    let mut grouped: BTreeMap<NaiveDate, Vec<&Task>> = BTreeMap::new();
    for task in tasks {
        grouped
            .entry(task.scheduled_at.date())
            .or_default()
            .push(task);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::{Priority, Task};
    use chrono::Duration;
    use proptest::prelude::*;
    use uuid::Uuid;

    fn jan(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, day).unwrap()
    }

    fn task(title: &str, day: NaiveDate, hour: u32, minute: u32) -> Task {
        Task {
            id: Uuid::new_v4(),
            title: title.to_string(),
            description: None,
            scheduled_at: day.and_hms_opt(hour, minute, 0).unwrap(),
            duration_min: 30,
            category: None,
            priority: Priority::Medium,
            completed: false,
        }
    }

    #[test]
    fn selects_only_the_requested_day() {
        let tasks = vec![
            task("same day", jan(5), 10, 0),
            task("next day", jan(6), 10, 0),
            task("previous day", jan(4), 10, 0),
        ];

        let view = tasks_for_day(&tasks, jan(5), true);
        let titles: Vec<_> = view.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["same day"]);
    }

    #[test]
    fn orders_ascending_by_scheduled_time() {
        // Insertion order is A then B; B is scheduled earlier.
        let tasks = vec![task("A", jan(5), 10, 0), task("B", jan(5), 9, 0)];

        let view = tasks_for_day(&tasks, jan(5), true);
        let titles: Vec<_> = view.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["B", "A"]);
    }

    #[test]
    fn equal_times_keep_input_order() {
        let tasks = vec![
            task("first", jan(5), 9, 0),
            task("second", jan(5), 9, 0),
            task("third", jan(5), 9, 0),
        ];

        let view = tasks_for_day(&tasks, jan(5), true);
        let titles: Vec<_> = view.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }

    #[test]
    fn hiding_completed_removes_exactly_the_completed() {
        let mut done = task("done", jan(5), 9, 0);
        done.completed = true;
        let tasks = vec![done, task("open", jan(5), 10, 0)];

        let hidden = tasks_for_day(&tasks, jan(5), false);
        assert_eq!(hidden.len(), 1);
        assert_eq!(hidden[0].title, "open");

        // Toggling back restores the completed task.
        let shown = tasks_for_day(&tasks, jan(5), true);
        assert_eq!(shown.len(), 2);
        assert!(shown.iter().any(|t| t.title == "done"));
    }

    #[test]
    fn groups_by_day_with_ascending_keys() {
        let tasks = vec![
            task("later", jan(7), 9, 0),
            task("earlier", jan(5), 9, 0),
            task("also earlier", jan(5), 11, 0),
        ];

        let grouped = group_by_day(&tasks);
        let days: Vec<_> = grouped.keys().copied().collect();
        assert_eq!(days, vec![jan(5), jan(7)]);
        assert_eq!(grouped[&jan(5)].len(), 2);
        // Values stay in input order, not time order.
        assert_eq!(grouped[&jan(5)][0].title, "earlier");
        assert_eq!(grouped[&jan(5)][1].title, "also earlier");
    }

    proptest! {
        #[test]
        fn filtered_view_is_sorted_and_day_homogeneous(
            specs in proptest::collection::vec((0i64..3, 0u32..24, any::<bool>()), 0..40)
        ) {
            let base = jan(5);
            let tasks: Vec<Task> = specs
                .iter()
                .enumerate()
                .map(|(i, &(offset, hour, completed))| {
                    let mut t = task(&format!("t{i}"), base + Duration::days(offset), hour, 0);
                    t.completed = completed;
                    t
                })
                .collect();

            let view = tasks_for_day(&tasks, base, false);

            prop_assert!(view.windows(2).all(|w| w[0].scheduled_at <= w[1].scheduled_at));
            prop_assert!(view.iter().all(|t| t.scheduled_at.date() == base && !t.completed));

            let expected = tasks
                .iter()
                .filter(|t| t.scheduled_at.date() == base && !t.completed)
                .count();
            prop_assert_eq!(view.len(), expected);

            // Equal scheduled times keep input order. Titles encode the
            // input index, so a tie must show ascending indices.
            let indices: Vec<usize> = view
                .iter()
                .map(|t| t.title[1..].parse().unwrap())
                .collect();
            prop_assert!(view
                .windows(2)
                .zip(indices.windows(2))
                .filter(|(w, _)| w[0].scheduled_at == w[1].scheduled_at)
                .all(|(_, idx)| idx[0] < idx[1]));
        }
    }
}

//! Integration tests for the planner session flow.

use chrono::{Duration, NaiveDate, Timelike};
use planwise_core::{Planner, TaskDraft};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 5).unwrap()
}

#[test]
fn test_full_planning_workflow() {
    let mut planner = Planner::with_sample_schedule(today());

    // The seeded day: four tasks, morning first.
    let agenda = planner.agenda();
    assert_eq!(agenda.len(), 4);
    assert_eq!(agenda[0].title, "Team meeting with design department");
    assert!(agenda.windows(2).all(|w| w[0].scheduled_at <= w[1].scheduled_at));

    // Knock out the gym session and hide it.
    let gym_id = agenda
        .iter()
        .find(|t| t.title == "Gym workout")
        .map(|t| t.id)
        .unwrap();
    planner.set_completed(gym_id, true);
    planner.set_show_completed(false);
    assert_eq!(planner.agenda().len(), 3);

    // Pick a suggested slot and schedule a new task into it.
    let slot = planner.suggested_times()[2];
    let draft = TaskDraft::for_date(today())
        .with_title("Write project update")
        .at_slot(slot)
        .with_duration(45)
        .with_category("Work");
    let created = planner.create_task(&draft).unwrap();
    assert_eq!(created.scheduled_at.hour(), 15);

    // The new task lands in chronological position.
    let titles: Vec<_> = planner.agenda().iter().map(|t| t.title.as_str()).collect();
    assert_eq!(
        titles,
        vec![
            "Team meeting with design department",
            "Lunch with Sarah",
            "Complete quarterly report",
            "Write project update",
        ]
    );

    // Progress counts the completed gym session across the whole store.
    let progress = planner.progress();
    assert_eq!(progress.total, 7);
    assert_eq!(progress.completion.completed, 1);
    assert_eq!(progress.completion.pending, 6);
}

#[test]
fn test_rejected_drafts_never_touch_the_store() {
    let mut planner = Planner::with_sample_schedule(today());
    let before = planner.store().len();

    let bad_drafts = [
        TaskDraft::for_date(today()),
        TaskDraft::for_date(today()).with_title("ok").with_time("25:00"),
        TaskDraft::for_date(today()).with_title("ok").with_duration(481),
        TaskDraft::default().with_title("no date"),
    ];
    for draft in &bad_drafts {
        assert!(planner.create_task(draft).is_err());
    }

    assert_eq!(planner.store().len(), before);
    assert_eq!(planner.progress().total, before);
}

#[test]
fn test_day_switching_and_suggestions() {
    let mut planner = Planner::with_sample_schedule(today());

    let tomorrow = today() + Duration::days(1);
    planner.select_date(tomorrow);
    assert_eq!(planner.agenda().len(), 2);

    // Suggestions follow the selected day.
    let slots = planner.suggested_times();
    assert_eq!(slots.len(), 3);
    assert!(slots.iter().all(|s| s.date() == tomorrow));
    assert_eq!(slots[0].hour(), 9);
    assert_eq!((slots[1].hour(), slots[1].minute()), (12, 30));
    assert_eq!(slots[2].hour(), 15);
}

#[test]
fn test_unknown_completion_ids_are_ignored() {
    let mut planner = Planner::with_sample_schedule(today());
    let before: Vec<_> = planner
        .store()
        .tasks()
        .iter()
        .map(|t| (t.id, t.completed))
        .collect();

    planner.set_completed(uuid::Uuid::new_v4(), true);

    let after: Vec<_> = planner
        .store()
        .tasks()
        .iter()
        .map(|t| (t.id, t.completed))
        .collect();
    assert_eq!(before, after);
}

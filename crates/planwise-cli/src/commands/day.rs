//! Agenda listing.

use std::path::Path;

use planwise_core::dates::{format_clock, format_day, format_duration};
use planwise_core::{Planner, Task};

use super::{load_config, parse_date, today};

pub fn run(
    config: Option<&Path>,
    date: Option<String>,
    hide_completed: bool,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config)?;
    let day = match date {
        Some(s) => parse_date(&s)?,
        None => today(),
    };

    let mut planner = Planner::with_sample_schedule(today()).with_config(&config);
    planner.select_date(day);
    planner.set_show_completed(!hide_completed);

    let agenda = planner.agenda();
    if json {
        println!("{}", serde_json::to_string_pretty(&agenda)?);
        return Ok(());
    }

    println!("Agenda for {}", format_day(day));
    if agenda.is_empty() {
        println!("  (no tasks)");
        return Ok(());
    }
    for task in agenda {
        println!("  {}", render_line(task));
    }
    Ok(())
}

/// One agenda row: checkbox, clock time, title, then the details.
pub(crate) fn render_line(task: &Task) -> String {
    let mark = if task.completed { "x" } else { " " };
    let mut line = format!(
        "[{mark}] {:>8}  {}  ({}, {})",
        format_clock(task.scheduled_at),
        task.title,
        format_duration(task.duration_min),
        task.priority,
    );
    if let Some(category) = &task.category {
        line.push_str(&format!(" [{category}]"));
    }
    line
}

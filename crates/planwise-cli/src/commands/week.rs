//! Week overview.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::NaiveDate;
use planwise_core::dates::week_days;
use planwise_core::{group_by_day, Planner, Task};

use super::{load_config, parse_date, today};

pub fn run(
    config: Option<&Path>,
    date: Option<String>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config)?;
    let day = match date {
        Some(s) => parse_date(&s)?,
        None => today(),
    };

    let planner = Planner::with_sample_schedule(today()).with_config(&config);
    let days = week_days(day);
    let mut grouped = group_by_day(planner.store().tasks());
    for bucket in grouped.values_mut() {
        bucket.sort_by_key(|t| t.scheduled_at);
    }

    if json {
        let week: BTreeMap<NaiveDate, Vec<&Task>> = days
            .iter()
            .map(|d| (*d, grouped.get(d).cloned().unwrap_or_default()))
            .collect();
        println!("{}", serde_json::to_string_pretty(&week)?);
        return Ok(());
    }

    println!(
        "Week of {} - {}",
        days[0].format("%b %-d"),
        days[6].format("%b %-d")
    );
    for d in days {
        println!("{}", d.format("%a %-d"));
        match grouped.get(&d) {
            Some(tasks) => {
                for task in tasks {
                    println!("  {}", super::day::render_line(task));
                }
            }
            None => println!("  (no tasks)"),
        }
    }
    Ok(())
}

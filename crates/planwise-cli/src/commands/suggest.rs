//! Start-time suggestions.

use std::path::Path;

use planwise_core::dates::{format_clock, format_day};
use planwise_core::Planner;

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

    let mut planner = Planner::with_sample_schedule(today()).with_config(&config);
    planner.select_date(day);
    let slots = planner.suggested_times();

    if json {
        println!("{}", serde_json::to_string_pretty(&slots)?);
        return Ok(());
    }

    println!("Suggested times for {}", format_day(day));
    for slot in slots {
        println!("  {}", format_clock(slot));
    }
    Ok(())
}

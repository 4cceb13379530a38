//! Weather panel command.

use std::path::Path;
use std::thread;
use std::time::Duration as StdDuration;

use chrono::Duration;
use planwise_core::weather::{WeatherPanel, WeatherReport};

use super::{load_config, now};

pub fn run(
    config: Option<&Path>,
    json: bool,
    fast: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config)?;
    if !json {
        println!("Loading weather...");
    }
    let report = fetch(config.weather.load_delay_ms, fast);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }
    print_report(&report);
    Ok(())
}

/// Run the panel's simulated load to completion.
pub(crate) fn fetch(delay_ms: u64, fast: bool) -> WeatherReport {
    let mut panel = WeatherPanel::load_with_delay(now(), delay_ms);
    let mut clock = now();
    loop {
        if fast {
            clock += Duration::milliseconds(500);
        } else {
            thread::sleep(StdDuration::from_millis(100));
            clock = now();
        }
        if let Some(report) = panel.tick(clock) {
            return report.clone();
        }
    }
}

pub(crate) fn print_report(report: &WeatherReport) {
    println!("{}: {}°C", report.location, report.current_temp_c);
    for row in &report.forecast {
        println!("  {}  {:>2}°C  {}", row.day, row.temp_c, row.condition);
    }
}

//! Progress summary.

use planwise_core::Planner;

use super::today;

pub fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let planner = Planner::with_sample_schedule(today());
    let summary = planner.progress();

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!(
        "Tasks: {} total, {} completed, {} pending",
        summary.total, summary.completion.completed, summary.completion.pending
    );
    println!(
        "Completion rate: {:.0}%",
        summary.completion_rate() * 100.0
    );
    println!(
        "Priority: {} high, {} medium, {} low",
        summary.priority.high, summary.priority.medium, summary.priority.low
    );
    Ok(())
}

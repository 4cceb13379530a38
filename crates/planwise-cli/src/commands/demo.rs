//! Scripted walk-through of a planning session.
//!
//! Exercises the whole session in one process: seeded agenda, completion
//! toggling, draft validation, slot suggestions, progress, and both
//! simulated widgets.

use std::path::Path;

use planwise_core::chat::ChatAssistant;
use planwise_core::dates::{format_clock, format_day};
use planwise_core::Planner;

use super::{chat::pump, load_config, now, today, weather};

pub fn run(config: Option<&Path>, fast: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config)?;
    let today = today();
    let mut planner = Planner::with_sample_schedule(today).with_config(&config);

    println!("Planwise demo, {}", format_day(today));

    println!("\nToday's agenda:");
    print_agenda(&planner);

    // Finish the first item of the day, then hide it.
    let first = planner
        .agenda()
        .first()
        .map(|t| t.id)
        .ok_or("sample agenda is empty")?;
    planner.set_completed(first, true);
    planner.set_show_completed(false);
    println!("\nFirst task done; agenda without completed tasks:");
    print_agenda(&planner);

    // Put a new task into the last suggested slot.
    let slots = planner.suggested_times();
    println!("\nSuggested times:");
    for slot in &slots {
        println!("  {}", format_clock(*slot));
    }
    let slot = *slots.last().ok_or("no slots suggested")?;
    let draft = config
        .starter_draft(today)
        .with_title("Write project update")
        .at_slot(slot)
        .with_category("Work");
    let task = planner.create_task(&draft)?;
    println!(
        "\nCreated '{}' at {}:",
        task.title,
        format_clock(task.scheduled_at)
    );
    print_agenda(&planner);

    let progress = planner.progress();
    println!(
        "\nProgress: {} of {} done ({:.0}%)",
        progress.completion.completed,
        progress.total,
        progress.completion_rate() * 100.0
    );

    println!("\nWeather:");
    weather::print_report(&weather::fetch(config.weather.load_delay_ms, fast));

    println!("\nChat:");
    let mut chat = ChatAssistant::open_with_delays(now(), config.chat_delays());
    println!("assistant: {}", chat.messages()[0].text);
    for line in ["What tasks do I have today?", "thanks!"] {
        println!("you: {line}");
        chat.send(line, now());
        pump(&mut chat, fast);
    }

    println!("\nDemo complete.");
    Ok(())
}

fn print_agenda(planner: &Planner) {
    for task in planner.agenda() {
        println!("  {}", super::day::render_line(task));
    }
}

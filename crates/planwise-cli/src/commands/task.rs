//! Task management commands for CLI.

use std::path::Path;

use clap::Subcommand;
use planwise_core::dates::format_day;
use planwise_core::{Planner, Priority, CATEGORIES};

use super::{load_config, parse_date, today};

#[derive(Subcommand)]
pub enum TaskAction {
    /// Create a task after validating the input
    Add {
        /// Task title
        title: String,
        /// Day to schedule on, YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,
        /// Start time, HH:MM
        #[arg(long)]
        time: Option<String>,
        /// Duration in minutes
        #[arg(long)]
        duration: Option<u32>,
        /// Task description
        #[arg(long)]
        description: Option<String>,
        /// Category label (open set; see `task categories`)
        #[arg(long)]
        category: Option<String>,
        /// Priority: low, medium or high (default: medium)
        #[arg(long, default_value = "medium")]
        priority: String,
        /// Print the created record as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the category labels offered by the creation form
    Categories,
}

pub fn run(config: Option<&Path>, action: TaskAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        TaskAction::Add {
            title,
            date,
            time,
            duration,
            description,
            category,
            priority,
            json,
        } => {
            let config = load_config(config)?;
            let day = match date {
                Some(s) => parse_date(&s)?,
                None => today(),
            };

            let mut draft = config.starter_draft(day).with_title(title);
            if let Some(time) = time {
                draft = draft.with_time(time);
            }
            if let Some(minutes) = duration {
                draft = draft.with_duration(minutes);
            }
            if let Some(description) = description {
                draft = draft.with_description(description);
            }
            if let Some(category) = category {
                draft = draft.with_category(category);
            }
            draft = draft.with_priority(match priority.as_str() {
                "low" => Priority::Low,
                "high" => Priority::High,
                _ => Priority::Medium,
            });

            let mut planner = Planner::with_sample_schedule(today()).with_config(&config);
            planner.select_date(day);
            let task = planner.create_task(&draft)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&task)?);
                return Ok(());
            }

            println!("Task created: {}", task.id);
            println!("{}", serde_json::to_string_pretty(&task)?);
            println!();
            println!("Agenda for {}", format_day(day));
            for task in planner.agenda() {
                println!("  {}", super::day::render_line(task));
            }
        }
        TaskAction::Categories => {
            for category in CATEGORIES {
                println!("{category}");
            }
        }
    }
    Ok(())
}

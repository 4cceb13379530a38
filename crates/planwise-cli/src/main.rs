use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "planwise", version, about = "Planwise day-planning CLI")]
struct Cli {
    /// Path to a TOML config file (built-in defaults when omitted)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the agenda for a day
    Day {
        /// Day to show, YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,
        /// Leave completed tasks out of the listing
        #[arg(long)]
        hide_completed: bool,
        /// Print the agenda as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the week around a day
    Week {
        /// Day whose week to show, YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,
        /// Print the week as JSON
        #[arg(long)]
        json: bool,
    },
    /// Task management
    Task {
        #[command(subcommand)]
        action: commands::task::TaskAction,
    },
    /// Suggest start times for a day
    Suggest {
        /// Day to suggest for, YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,
        /// Print the slots as JSON
        #[arg(long)]
        json: bool,
    },
    /// Progress summary across the schedule
    Stats {
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Talk to the scheduling assistant
    Chat {
        /// Send a single message and print the reply
        #[arg(long)]
        message: Option<String>,
        /// Skip the simulated typing delays
        #[arg(long)]
        fast: bool,
    },
    /// Show the weather panel
    Weather {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
        /// Skip the simulated load delay
        #[arg(long)]
        fast: bool,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Scripted walk-through of a planning session
    Demo {
        /// Skip the simulated widget delays
        #[arg(long)]
        fast: bool,
    },
    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "planwise=info,planwise_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = cli.config;
    let result = match cli.command {
        Commands::Day {
            date,
            hide_completed,
            json,
        } => commands::day::run(config.as_deref(), date, hide_completed, json),
        Commands::Week { date, json } => commands::week::run(config.as_deref(), date, json),
        Commands::Task { action } => commands::task::run(config.as_deref(), action),
        Commands::Suggest { date, json } => commands::suggest::run(config.as_deref(), date, json),
        Commands::Stats { json } => commands::stats::run(json),
        Commands::Chat { message, fast } => commands::chat::run(config.as_deref(), message, fast),
        Commands::Weather { json, fast } => commands::weather::run(config.as_deref(), json, fast),
        Commands::Config { action } => commands::config::run(config.as_deref(), action),
        Commands::Demo { fast } => commands::demo::run(config.as_deref(), fast),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "planwise", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

//! Configuration commands.

use std::path::Path;

use clap::Subcommand;
use planwise_core::Config;

use super::load_config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the resolved configuration as TOML
    Show,
    /// Print the built-in defaults as TOML
    Default,
    /// Get a config value by dotted key (e.g. "workday.start_hour")
    Get {
        /// Config key
        key: String,
    },
}

pub fn run(path: Option<&Path>, action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let config = load_config(path)?;
            print!("{}", config.to_toml_string()?);
        }
        ConfigAction::Default => {
            print!("{}", Config::default().to_toml_string()?);
        }
        ConfigAction::Get { key } => {
            let config = load_config(path)?;
            match config.get(&key) {
                Some(value) => println!("{value}"),
                None => {
                    eprintln!("unknown key: {key}");
                    std::process::exit(1);
                }
            }
        }
    }
    Ok(())
}

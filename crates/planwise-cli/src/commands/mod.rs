//! Command implementations.

pub mod chat;
pub mod config;
pub mod day;
pub mod demo;
pub mod stats;
pub mod suggest;
pub mod task;
pub mod weather;
pub mod week;

use std::path::Path;

use chrono::{Local, NaiveDate, NaiveDateTime};
use planwise_core::Config;

/// Today's civil date in local time.
pub(crate) fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// The local wall clock, as the widgets' injected time.
pub(crate) fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

pub(crate) fn parse_date(s: &str) -> Result<NaiveDate, Box<dyn std::error::Error>> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| format!("invalid date '{s}': expected YYYY-MM-DD").into())
}

/// Load the config file when one is given, built-in defaults otherwise.
pub(crate) fn load_config(path: Option<&Path>) -> Result<Config, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config file");
            Ok(Config::load(path)?)
        }
        None => Ok(Config::default()),
    }
}

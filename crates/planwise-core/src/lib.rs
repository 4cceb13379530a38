//! # Planwise Core Library
//!
//! This library provides the core scheduling logic for the Planwise day
//! planner. It implements a CLI-first philosophy where every operation is
//! available through a standalone CLI binary, with any GUI shell being a
//! thin layer over the same core library.
//!
//! ## Architecture
//!
//! - **Task Store**: An in-memory, insertion-ordered task collection that
//!   never validates; validation happens in the draft layer before records
//!   reach it
//! - **Agenda**: Pure day filtering and chronological ordering over borrowed
//!   task slices
//! - **Assistant Widgets**: Tick-driven state machines (chat, weather) that
//!   simulate response latency against an injected wall clock, so callers
//!   can cancel pending work and tests stay deterministic
//! - **Configuration**: TOML-based workday and widget settings
//!
//! ## Key Components
//!
//! - [`Planner`]: Session facade over the store and view selection
//! - [`TaskStore`]: In-memory task collection
//! - [`TaskDraft`]: Validation boundary that turns form input into records
//! - [`ChatAssistant`]: Keyword-matched canned-reply chat machine
//! - [`Config`]: Application configuration management

pub mod agenda;
pub mod chat;
pub mod config;
pub mod dates;
pub mod draft;
pub mod error;
pub mod planner;
pub mod stats;
pub mod store;
pub mod suggest;
pub mod task;
pub mod weather;

pub use agenda::{group_by_day, tasks_for_day};
pub use chat::{
    ChatAssistant, ChatDelays, ChatEvent, ChatMessage, ChatState, Sender, QUICK_SUGGESTIONS,
};
pub use config::Config;
pub use draft::TaskDraft;
pub use error::{ConfigError, ValidationError};
pub use planner::Planner;
pub use stats::{summarize, ProgressSummary};
pub use store::{sample_schedule, TaskStore};
pub use suggest::{suggest_times, Workday};
pub use task::{NewTask, Priority, Task, CATEGORIES};
pub use weather::{DayForecast, WeatherPanel, WeatherReport};

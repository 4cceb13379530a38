//! TOML-based application configuration.
//!
//! Tunables for:
//! - Workday bounds feeding the slot suggester
//! - Creation-form defaults (time of day, duration)
//! - Simulated delays for the chat assistant and the weather panel
//!
//! Nothing is written back to disk; the CLI reads an optional file and
//! otherwise runs on the built-in defaults.

use std::path::Path;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::chat;
use crate::draft::{self, TaskDraft};
use crate::error::ConfigError;
use crate::suggest::{self, Workday};
use crate::weather;

/// Workday bounds, in whole hours.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WorkdayConfig {
    #[serde(default = "default_work_start_hour")]
    pub start_hour: u32,
    #[serde(default = "default_work_end_hour")]
    pub end_hour: u32,
}

/// Creation-form defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatorConfig {
    #[serde(default = "default_time")]
    pub default_time: String,
    #[serde(default = "default_duration_min")]
    pub default_duration_min: u32,
}

/// Simulated chat delays, in milliseconds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ChatConfig {
    #[serde(default = "default_typing_delay_ms")]
    pub typing_delay_ms: u64,
    #[serde(default = "default_farewell_delay_ms")]
    pub farewell_delay_ms: u64,
    #[serde(default = "default_auto_close_delay_ms")]
    pub auto_close_delay_ms: u64,
}

/// Simulated weather-load delay, in milliseconds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WeatherConfig {
    #[serde(default = "default_load_delay_ms")]
    pub load_delay_ms: u64,
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub workday: WorkdayConfig,
    #[serde(default)]
    pub creator: CreatorConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub weather: WeatherConfig,
}

// Default functions
fn default_work_start_hour() -> u32 {
    suggest::DEFAULT_WORK_START_HOUR
}
fn default_work_end_hour() -> u32 {
    suggest::DEFAULT_WORK_END_HOUR
}
fn default_time() -> String {
    draft::DEFAULT_TIME.to_string()
}
fn default_duration_min() -> u32 {
    draft::DEFAULT_DURATION_MINUTES
}
fn default_typing_delay_ms() -> u64 {
    chat::TYPING_DELAY_MS
}
fn default_farewell_delay_ms() -> u64 {
    chat::FAREWELL_DELAY_MS
}
fn default_auto_close_delay_ms() -> u64 {
    chat::AUTO_CLOSE_DELAY_MS
}
fn default_load_delay_ms() -> u64 {
    weather::LOAD_DELAY_MS
}

impl Default for WorkdayConfig {
    fn default() -> Self {
        Self {
            start_hour: default_work_start_hour(),
            end_hour: default_work_end_hour(),
        }
    }
}

impl Default for CreatorConfig {
    fn default() -> Self {
        Self {
            default_time: default_time(),
            default_duration_min: default_duration_min(),
        }
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            typing_delay_ms: default_typing_delay_ms(),
            farewell_delay_ms: default_farewell_delay_ms(),
            auto_close_delay_ms: default_auto_close_delay_ms(),
        }
    }
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            load_delay_ms: default_load_delay_ms(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workday: WorkdayConfig::default(),
            creator: CreatorConfig::default(),
            chat: ChatConfig::default(),
            weather: WeatherConfig::default(),
        }
    }
}

impl Config {
    /// Parse and validate a TOML document.
    ///
    /// # Errors
    ///
    /// [`ConfigError::ParseFailed`] on malformed TOML,
    /// [`ConfigError::InvalidValue`] when a value fails validation.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config =
            toml::from_str(content).map_err(|e| ConfigError::ParseFailed(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file.
    ///
    /// # Errors
    ///
    /// [`ConfigError::LoadFailed`] when the file cannot be read, plus the
    /// `from_toml_str` errors.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::LoadFailed {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&content)
    }

    /// Check cross-field constraints.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.workday.end_hour > 24 {
            return Err(ConfigError::InvalidValue {
                key: "workday.end_hour".to_string(),
                message: format!("{} is past the end of the day", self.workday.end_hour),
            });
        }
        if self.workday.start_hour >= self.workday.end_hour {
            return Err(ConfigError::InvalidValue {
                key: "workday.start_hour".to_string(),
                message: format!(
                    "start ({}) must be before end ({})",
                    self.workday.start_hour, self.workday.end_hour
                ),
            });
        }
        // The wind-down slot sits two hours before the end; keep it after
        // the start.
        if self.workday.end_hour - self.workday.start_hour < 3 {
            return Err(ConfigError::InvalidValue {
                key: "workday".to_string(),
                message: "workday must span at least three hours".to_string(),
            });
        }
        if NaiveTime::parse_from_str(&self.creator.default_time, "%H:%M").is_err() {
            return Err(ConfigError::InvalidValue {
                key: "creator.default_time".to_string(),
                message: format!("'{}' is not an HH:MM time", self.creator.default_time),
            });
        }
        let duration = self.creator.default_duration_min;
        if !(draft::MIN_DURATION_MINUTES..=draft::MAX_DURATION_MINUTES).contains(&duration) {
            return Err(ConfigError::InvalidValue {
                key: "creator.default_duration_min".to_string(),
                message: format!(
                    "{duration} is outside {}..={}",
                    draft::MIN_DURATION_MINUTES,
                    draft::MAX_DURATION_MINUTES
                ),
            });
        }
        Ok(())
    }

    /// Serialize to pretty TOML (what `config show` prints).
    ///
    /// # Errors
    ///
    /// [`ConfigError::ParseFailed`] if serialization fails.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseFailed(e.to_string()))
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let mut current = &json;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        match current {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Workday bounds for the suggester.
    pub fn workday(&self) -> Workday {
        Workday {
            start_hour: self.workday.start_hour,
            end_hour: self.workday.end_hour,
        }
    }

    /// Reply delays for the chat assistant.
    pub fn chat_delays(&self) -> chat::ChatDelays {
        chat::ChatDelays {
            typing_ms: self.chat.typing_delay_ms,
            farewell_ms: self.chat.farewell_delay_ms,
            auto_close_ms: self.chat.auto_close_delay_ms,
        }
    }

    /// A fresh draft for `date` seeded with the configured form defaults.
    pub fn starter_draft(&self, date: NaiveDate) -> TaskDraft {
        TaskDraft::for_date(date)
            .with_time(self.creator.default_time.clone())
            .with_duration(self.creator.default_duration_min)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_roundtrip() {
        let cfg = Config::default();
        let toml_str = cfg.to_toml_string().unwrap();
        let parsed = Config::from_toml_str(&toml_str).unwrap();
        assert_eq!(parsed.workday.start_hour, 9);
        assert_eq!(parsed.workday.end_hour, 17);
        assert_eq!(parsed.creator.default_time, "12:00");
        assert_eq!(parsed.chat.typing_delay_ms, 1500);
        assert_eq!(parsed.weather.load_delay_ms, 1500);
    }

    #[test]
    fn partial_toml_fills_section_defaults() {
        let cfg = Config::from_toml_str(
            r#"
            [workday]
            start_hour = 8

            [chat]
            typing_delay_ms = 10
            "#,
        )
        .unwrap();

        assert_eq!(cfg.workday.start_hour, 8);
        assert_eq!(cfg.workday.end_hour, 17);
        assert_eq!(cfg.chat.typing_delay_ms, 10);
        assert_eq!(cfg.chat.auto_close_delay_ms, 3000);
        assert_eq!(cfg.creator.default_duration_min, 30);
    }

    #[test]
    fn rejects_inverted_and_short_workdays() {
        let inverted = Config::from_toml_str("[workday]\nstart_hour = 18\nend_hour = 9\n");
        assert!(matches!(
            inverted,
            Err(ConfigError::InvalidValue { key, .. }) if key == "workday.start_hour"
        ));

        let short = Config::from_toml_str("[workday]\nstart_hour = 9\nend_hour = 11\n");
        assert!(matches!(
            short,
            Err(ConfigError::InvalidValue { key, .. }) if key == "workday"
        ));

        let late = Config::from_toml_str("[workday]\nend_hour = 25\n");
        assert!(matches!(
            late,
            Err(ConfigError::InvalidValue { key, .. }) if key == "workday.end_hour"
        ));
    }

    #[test]
    fn rejects_bad_creator_defaults() {
        let bad_time = Config::from_toml_str("[creator]\ndefault_time = \"noonish\"\n");
        assert!(matches!(
            bad_time,
            Err(ConfigError::InvalidValue { key, .. }) if key == "creator.default_time"
        ));

        let bad_duration = Config::from_toml_str("[creator]\ndefault_duration_min = 0\n");
        assert!(matches!(
            bad_duration,
            Err(ConfigError::InvalidValue { key, .. }) if key == "creator.default_duration_min"
        ));
    }

    #[test]
    fn rejects_malformed_toml() {
        let result = Config::from_toml_str("not toml at all [");
        assert!(matches!(result, Err(ConfigError::ParseFailed(_))));
    }

    #[test]
    fn get_supports_dot_path_keys() {
        let cfg = Config::default();
        assert_eq!(cfg.get("workday.start_hour").as_deref(), Some("9"));
        assert_eq!(cfg.get("creator.default_time").as_deref(), Some("12:00"));
        assert!(cfg.get("workday.missing_key").is_none());
    }

    #[test]
    fn loads_from_a_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[workday]\nstart_hour = 7\nend_hour = 15\n").unwrap();

        let cfg = Config::load(file.path()).unwrap();
        assert_eq!(cfg.workday.start_hour, 7);
        assert_eq!(cfg.workday().end_hour, 15);
    }

    #[test]
    fn load_reports_missing_files() {
        let result = Config::load(Path::new("/nonexistent/planwise.toml"));
        assert!(matches!(result, Err(ConfigError::LoadFailed { .. })));
    }

    #[test]
    fn chat_delays_come_from_the_chat_section() {
        let cfg = Config::from_toml_str("[chat]\ntyping_delay_ms = 1\nauto_close_delay_ms = 2\n")
            .unwrap();

        let delays = cfg.chat_delays();
        assert_eq!(delays.typing_ms, 1);
        assert_eq!(delays.farewell_ms, 1000);
        assert_eq!(delays.auto_close_ms, 2);
    }

    #[test]
    fn starter_draft_uses_creator_defaults() {
        let cfg = Config::from_toml_str(
            "[creator]\ndefault_time = \"09:30\"\ndefault_duration_min = 45\n",
        )
        .unwrap();
        let date = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();

        let draft = cfg.starter_draft(date).with_title("Focus block");
        let record = draft.build().unwrap();
        assert_eq!(record.scheduled_at, date.and_hms_opt(9, 30, 0).unwrap());
        assert_eq!(record.duration_min, 45);
    }
}

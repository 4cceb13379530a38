//! Simulated weather panel.
//!
//! The dashboard's weather widget never talks to a real service: it shows
//! a canned report after a fixed load delay. The panel here is the same
//! tick-driven machine as the chat assistant - `load` arms the deadline,
//! `tick` flips to ready once it passes, and dropping the panel before
//! then is the cancellation path (nothing fires later).

use std::fmt;

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Milliseconds of simulated load before the report is available.
pub const LOAD_DELAY_MS: u64 = 1500;

/// Sky condition, as coarse as the icon set it stands in for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    Sunny,
    Cloudy,
    Drizzle,
    Rain,
    Snow,
}

impl Condition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::Sunny => "sunny",
            Condition::Cloudy => "cloudy",
            Condition::Drizzle => "drizzle",
            Condition::Rain => "rain",
            Condition::Snow => "snow",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One forecast row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayForecast {
    /// Short weekday label, e.g. `WED`.
    pub day: String,
    pub condition: Condition,
    pub temp_c: i32,
}

/// The canned report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReport {
    pub location: String,
    pub current_temp_c: i32,
    pub forecast: Vec<DayForecast>,
}

/// Panel state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelState {
    Loading,
    Ready,
}

/// The weather widget's loading machine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherPanel {
    state: PanelState,
    ready_at: NaiveDateTime,
    report: Option<WeatherReport>,
}

impl WeatherPanel {
    /// Start the simulated load with the default delay.
    pub fn load(now: NaiveDateTime) -> Self {
        Self::load_with_delay(now, LOAD_DELAY_MS)
    }

    /// Start the simulated load with an explicit delay.
    pub fn load_with_delay(now: NaiveDateTime, delay_ms: u64) -> Self {
        Self {
            state: PanelState::Loading,
            ready_at: now + Duration::milliseconds(delay_ms as i64),
            report: None,
        }
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == PanelState::Loading
    }

    /// The report, once ready.
    pub fn report(&self) -> Option<&WeatherReport> {
        self.report.as_ref()
    }

    /// Advance the machine; returns the report when the load completes.
    ///
    /// Idempotent after completion: later ticks return `None` again so the
    /// caller sees the transition exactly once.
    pub fn tick(&mut self, now: NaiveDateTime) -> Option<&WeatherReport> {
        if self.state == PanelState::Loading && now >= self.ready_at {
            self.state = PanelState::Ready;
            self.report = Some(canned_report());
            return self.report.as_ref();
        }
        None
    }
}

/// The fixture the widget renders: always hot in Hyderabad.
pub fn canned_report() -> WeatherReport {
    WeatherReport {
        location: "Hyderabad".to_string(),
        current_temp_c: 32,
        forecast: vec![
            day("WED", Condition::Rain, 31),
            day("THU", Condition::Cloudy, 33),
            day("FRI", Condition::Sunny, 35),
            day("SAT", Condition::Sunny, 34),
            day("SUN", Condition::Drizzle, 30),
        ],
    }
}

fn day(label: &str, condition: Condition, temp_c: i32) -> DayForecast {
    DayForecast {
        day: label.to_string(),
        condition,
        temp_c,
    }
}

/// Condition shown for the current temperature, matching the widget's
/// icon thresholds.
pub fn condition_for_temp(temp_c: i32) -> Condition {
    if temp_c > 20 {
        Condition::Sunny
    } else if temp_c > 10 {
        Condition::Cloudy
    } else if temp_c <= 0 {
        Condition::Snow
    } else {
        Condition::Cloudy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn start() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 5)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap()
    }

    fn after(ms: u64) -> NaiveDateTime {
        start() + Duration::milliseconds(ms as i64)
    }

    #[test]
    fn stays_loading_until_the_delay_elapses() {
        let mut panel = WeatherPanel::load(start());
        assert!(panel.is_loading());

        assert!(panel.tick(after(LOAD_DELAY_MS - 1)).is_none());
        assert!(panel.is_loading());
        assert!(panel.report().is_none());
    }

    #[test]
    fn becomes_ready_at_the_deadline() {
        let mut panel = WeatherPanel::load(start());
        let report = panel.tick(after(LOAD_DELAY_MS)).cloned().unwrap();

        assert_eq!(panel.state(), PanelState::Ready);
        assert_eq!(report.location, "Hyderabad");
        assert_eq!(report.current_temp_c, 32);
        assert_eq!(report.forecast.len(), 5);
        assert_eq!(report.forecast[0].day, "WED");
        assert_eq!(report.forecast[0].condition, Condition::Rain);
        assert_eq!(report.forecast[4].temp_c, 30);
    }

    #[test]
    fn completion_is_reported_once() {
        let mut panel = WeatherPanel::load(start());
        assert!(panel.tick(after(LOAD_DELAY_MS)).is_some());
        assert!(panel.tick(after(LOAD_DELAY_MS * 2)).is_none());
        // The report itself stays available.
        assert!(panel.report().is_some());
    }

    #[test]
    fn custom_delay_moves_the_deadline() {
        let mut panel = WeatherPanel::load_with_delay(start(), 0);
        assert!(panel.tick(start()).is_some());
    }

    #[test]
    fn temperature_maps_to_condition_thresholds() {
        assert_eq!(condition_for_temp(35), Condition::Sunny);
        assert_eq!(condition_for_temp(21), Condition::Sunny);
        assert_eq!(condition_for_temp(15), Condition::Cloudy);
        assert_eq!(condition_for_temp(5), Condition::Cloudy);
        assert_eq!(condition_for_temp(0), Condition::Snow);
        assert_eq!(condition_for_temp(-10), Condition::Snow);
    }
}

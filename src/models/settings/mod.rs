// Settings module
// Persisted agenda preferences

use std::fmt;
use std::str::FromStr;

use chrono::NaiveTime;

use crate::models::error::ModelError;
use crate::models::event::parse_time;
use crate::utils::date::format_hhmm;

/// Calendar projection currently shown by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewType {
    Day,
    Week,
    #[default]
    Month,
    Year,
}

impl ViewType {
    pub const ALL: [ViewType; 4] = [ViewType::Day, ViewType::Week, ViewType::Month, ViewType::Year];

    pub fn as_str(self) -> &'static str {
        match self {
            ViewType::Day => "Day",
            ViewType::Week => "Week",
            ViewType::Month => "Month",
            ViewType::Year => "Year",
        }
    }
}

impl fmt::Display for ViewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewType {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Day" => Ok(ViewType::Day),
            "Week" => Ok(ViewType::Week),
            "Month" => Ok(ViewType::Month),
            "Year" => Ok(ViewType::Year),
            other => Err(ModelError::UnknownView(other.to_string())),
        }
    }
}

/// Where the day timeline draws its "current time" line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NowMarker {
    /// Follow the wall clock
    #[default]
    Live,
    /// Always draw at the same time of day (demo screenshots, kiosks)
    Fixed(NaiveTime),
    Hidden,
}

impl NowMarker {
    /// Resolve the marker position given the real current time.
    pub fn resolve(self, now: NaiveTime) -> Option<NaiveTime> {
        match self {
            NowMarker::Live => Some(now),
            NowMarker::Fixed(time) => Some(time),
            NowMarker::Hidden => None,
        }
    }
}

impl fmt::Display for NowMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NowMarker::Live => f.write_str("live"),
            NowMarker::Fixed(time) => write!(f, "fixed:{}", format_hhmm(*time)),
            NowMarker::Hidden => f.write_str("hidden"),
        }
    }
}

impl FromStr for NowMarker {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "live" => Ok(NowMarker::Live),
            "hidden" => Ok(NowMarker::Hidden),
            other => match other.strip_prefix("fixed:") {
                Some(time) => parse_time(time).map(NowMarker::Fixed),
                None => Err(ModelError::InvalidTime(other.to_string())),
            },
        }
    }
}

/// The single persisted settings row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub id: Option<i64>,
    /// "light", "dark" or "system"
    pub theme: String,
    pub current_view: String,
    /// Events shown per month-grid cell before "+N more"
    pub month_event_cap: u32,
    pub week_start_hour: u32,
    pub week_end_hour: u32,
    pub day_start_hour: u32,
    pub day_end_hour: u32,
    /// Serialized [`NowMarker`]
    pub now_marker: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            id: Some(1),
            theme: "light".to_string(),
            current_view: "Month".to_string(),
            month_event_cap: 5,
            week_start_hour: 7,
            week_end_hour: 21,
            day_start_hour: 6,
            day_end_hour: 22,
            now_marker: NowMarker::Live.to_string(),
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), String> {
        if !matches!(self.theme.as_str(), "light" | "dark" | "system") {
            return Err(format!("Unknown theme '{}'", self.theme));
        }

        self.current_view
            .parse::<ViewType>()
            .map_err(|e| e.to_string())?;

        if self.month_event_cap == 0 {
            return Err("Month cells must show at least one event".to_string());
        }

        validate_hours("Week", self.week_start_hour, self.week_end_hour)?;
        validate_hours("Day", self.day_start_hour, self.day_end_hour)?;

        self.now_marker
            .parse::<NowMarker>()
            .map_err(|e| e.to_string())?;

        Ok(())
    }

    /// Parsed view, falling back to Month for unknown values.
    pub fn view_type(&self) -> ViewType {
        self.current_view.parse().unwrap_or_default()
    }

    pub fn now_marker(&self) -> NowMarker {
        self.now_marker.parse().unwrap_or_default()
    }
}

fn validate_hours(label: &str, start: u32, end: u32) -> Result<(), String> {
    if end > 24 || start >= end {
        return Err(format!(
            "{} hours must satisfy start < end <= 24 (got {}..{})",
            label, start, end
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.view_type(), ViewType::Month);
        assert_eq!(settings.now_marker(), NowMarker::Live);
    }

    #[test]
    fn test_invalid_hours_rejected() {
        let settings = Settings {
            day_start_hour: 22,
            day_end_hour: 6,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());

        let settings = Settings {
            week_end_hour: 25,
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_unknown_theme_rejected() {
        let settings = Settings {
            theme: "solarized".to_string(),
            ..Settings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_now_marker_parse_and_display() {
        let fixed: NowMarker = "fixed:10:40".parse().unwrap();
        assert_eq!(fixed, NowMarker::Fixed(NaiveTime::from_hms_opt(10, 40, 0).unwrap()));
        assert_eq!(fixed.to_string(), "fixed:10:40");
        assert_eq!("hidden".parse::<NowMarker>().unwrap(), NowMarker::Hidden);
        assert!("fixed:noon".parse::<NowMarker>().is_err());
        assert!("sometimes".parse::<NowMarker>().is_err());
    }

    #[test]
    fn test_now_marker_resolve() {
        let now = NaiveTime::from_hms_opt(15, 12, 0).unwrap();
        let fixed = NaiveTime::from_hms_opt(10, 40, 0).unwrap();
        assert_eq!(NowMarker::Live.resolve(now), Some(now));
        assert_eq!(NowMarker::Fixed(fixed).resolve(now), Some(fixed));
        assert_eq!(NowMarker::Hidden.resolve(now), None);
    }

    #[test]
    fn test_view_type_round_trip_names() {
        for view in ViewType::ALL {
            assert_eq!(view.as_str().parse::<ViewType>().unwrap(), view);
        }
        assert!("Quarter".parse::<ViewType>().is_err());
    }
}

//! Appointment status and the color tag derived from it.
//!
//! Status is the stored field. The color tag is computed from it whenever a
//! view paints, so the two can never disagree. Color-tagged records coming
//! from older exports are folded back into a status with [`ColorTag::status`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::error::ModelError;

/// Lifecycle state of an appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Pending,
    Cancelled,
    Confirmed,
    Completed,
}

/// Presentation tag shown on event chips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorTag {
    Yellow,
    Red,
    Black,
    Cyan,
    Gray,
}

impl EventStatus {
    pub const ALL: [EventStatus; 4] = [
        EventStatus::Pending,
        EventStatus::Cancelled,
        EventStatus::Confirmed,
        EventStatus::Completed,
    ];

    /// Canonical color for this status.
    pub fn color_tag(self) -> ColorTag {
        match self {
            EventStatus::Pending => ColorTag::Yellow,
            EventStatus::Cancelled => ColorTag::Red,
            EventStatus::Confirmed => ColorTag::Cyan,
            EventStatus::Completed => ColorTag::Black,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EventStatus::Pending => "pending",
            EventStatus::Cancelled => "cancelled",
            EventStatus::Confirmed => "confirmed",
            EventStatus::Completed => "completed",
        }
    }

    /// Human-readable label for legends and tooltips.
    pub fn label(self) -> &'static str {
        match self {
            EventStatus::Pending => "Pending",
            EventStatus::Cancelled => "Cancelled",
            EventStatus::Confirmed => "Confirmed",
            EventStatus::Completed => "Completed",
        }
    }
}

impl ColorTag {
    pub const ALL: [ColorTag; 5] = [
        ColorTag::Yellow,
        ColorTag::Red,
        ColorTag::Black,
        ColorTag::Cyan,
        ColorTag::Gray,
    ];

    /// Status implied by a color tag. Black and Gray both mean completed.
    pub fn status(self) -> EventStatus {
        match self {
            ColorTag::Yellow => EventStatus::Pending,
            ColorTag::Red => EventStatus::Cancelled,
            ColorTag::Cyan => EventStatus::Confirmed,
            ColorTag::Black | ColorTag::Gray => EventStatus::Completed,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ColorTag::Yellow => "yellow",
            ColorTag::Red => "red",
            ColorTag::Black => "black",
            ColorTag::Cyan => "cyan",
            ColorTag::Gray => "gray",
        }
    }
}

impl From<ColorTag> for EventStatus {
    fn from(tag: ColorTag) -> Self {
        tag.status()
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EventStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(EventStatus::Pending),
            "cancelled" | "canceled" => Ok(EventStatus::Cancelled),
            "confirmed" => Ok(EventStatus::Confirmed),
            "completed" => Ok(EventStatus::Completed),
            _ => Err(ModelError::UnknownStatus(s.to_string())),
        }
    }
}

impl FromStr for ColorTag {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "yellow" => Ok(ColorTag::Yellow),
            "red" => Ok(ColorTag::Red),
            "black" => Ok(ColorTag::Black),
            "cyan" => Ok(ColorTag::Cyan),
            "gray" | "grey" => Ok(ColorTag::Gray),
            _ => Err(ModelError::UnknownColorTag(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(ColorTag::Yellow, EventStatus::Pending)]
    #[test_case(ColorTag::Red, EventStatus::Cancelled)]
    #[test_case(ColorTag::Cyan, EventStatus::Confirmed)]
    #[test_case(ColorTag::Black, EventStatus::Completed)]
    #[test_case(ColorTag::Gray, EventStatus::Completed)]
    fn test_color_tag_maps_to_status(tag: ColorTag, expected: EventStatus) {
        assert_eq!(tag.status(), expected);
        assert_eq!(EventStatus::from(tag), expected);
    }

    #[test]
    fn test_status_color_round_trip_is_stable() {
        for status in EventStatus::ALL {
            assert_eq!(status.color_tag().status(), status);
        }
    }

    #[test]
    fn test_every_color_tag_has_a_status() {
        for tag in ColorTag::ALL {
            // The canonical color of the derived status maps back to the same status
            assert_eq!(tag.status().color_tag().status(), tag.status());
        }
    }

    #[test]
    fn test_parse_status_accepts_us_spelling() {
        assert_eq!("Canceled".parse::<EventStatus>(), Ok(EventStatus::Cancelled));
        assert_eq!(" confirmed ".parse::<EventStatus>(), Ok(EventStatus::Confirmed));
        assert!(matches!(
            "archived".parse::<EventStatus>(),
            Err(ModelError::UnknownStatus(_))
        ));
    }

    #[test]
    fn test_parse_color_tag_accepts_grey() {
        assert_eq!("grey".parse::<ColorTag>(), Ok(ColorTag::Gray));
        assert!("purple".parse::<ColorTag>().is_err());
    }
}

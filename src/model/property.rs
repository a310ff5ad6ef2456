use crate::error::UnknownValue;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of equipment tracked in a room.
///
/// Declaration order is significant: it is the order used when generating
/// rooms, when listing per-type counts and when breaking ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PropertyType {
    Monitor,
    Keyboard,
    Mouse,
    Fan,
    Light,
    WifiRouter,
    Ac,
}

impl PropertyType {
    pub const ALL: [PropertyType; 7] = [
        PropertyType::Monitor,
        PropertyType::Keyboard,
        PropertyType::Mouse,
        PropertyType::Fan,
        PropertyType::Light,
        PropertyType::WifiRouter,
        PropertyType::Ac,
    ];

    /// Types installed in corridor rooms.
    pub const CORRIDOR: [PropertyType; 2] = [PropertyType::Fan, PropertyType::Light];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PropertyType::Monitor => "monitor",
            PropertyType::Keyboard => "keyboard",
            PropertyType::Mouse => "mouse",
            PropertyType::Fan => "fan",
            PropertyType::Light => "light",
            PropertyType::WifiRouter => "wifi-router",
            PropertyType::Ac => "ac",
        }
    }

    /// Human-readable label, e.g. `wifi-router` → `Wifi Router`.
    #[must_use]
    pub fn label(self) -> String {
        self.as_str()
            .split('-')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            })
            .collect::<Vec<String>>()
            .join(" ")
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyType {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PropertyType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownValue::new("property type", s))
    }
}

/// Operating state of a single piece of equipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyStatus {
    Working,
    NotWorking,
}

impl PropertyStatus {
    pub const ALL: [PropertyStatus; 2] = [PropertyStatus::Working, PropertyStatus::NotWorking];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PropertyStatus::Working => "working",
            PropertyStatus::NotWorking => "not_working",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            PropertyStatus::Working => "Working",
            PropertyStatus::NotWorking => "Not Working",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            PropertyStatus::Working => PropertyStatus::NotWorking,
            PropertyStatus::NotWorking => PropertyStatus::Working,
        }
    }

    #[must_use]
    pub fn is_working(self) -> bool {
        self == PropertyStatus::Working
    }
}

impl fmt::Display for PropertyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyStatus {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PropertyStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| UnknownValue::new("status", s))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub brand: String,
    pub model: String,
    pub status: PropertyStatus,
    pub purchase_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Property {
    #[must_use]
    pub fn is_working(&self) -> bool {
        self.status.is_working()
    }
}

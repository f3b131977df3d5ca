use chrono::{NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::clock::DayPart;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

/// Closed category set. The strategy weight tables match on this
/// exhaustively, so adding a category is a compile-time-checked change.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum HotspotCategory {
    Culinary,
    Residential,
    TransportHub,
    Mall,
    Market,
    Education,
    Service,
    Logistics,
    Other,
}

impl std::fmt::Display for HotspotCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            HotspotCategory::Culinary => "Culinary",
            HotspotCategory::Residential => "Residential",
            HotspotCategory::TransportHub => "Transport Hub",
            HotspotCategory::Mall => "Mall",
            HotspotCategory::Market => "Market",
            HotspotCategory::Education => "Education",
            HotspotCategory::Service => "Service",
            HotspotCategory::Logistics => "Logistics",
            HotspotCategory::Other => "Other",
        };
        write!(f, "{name}")
    }
}

/// Weekday affinity of a hotspot: either one fixed weekday or every day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DayRule {
    Daily,
    On(Weekday),
}

impl DayRule {
    pub fn matches(&self, today: Weekday) -> bool {
        match self {
            DayRule::Daily => true,
            DayRule::On(day) => *day == today,
        }
    }
}

/// One driver-feedback entry for a hotspot. Appended, never overwritten;
/// today's verdict is the latest entry carrying today's date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValidationRecord {
    pub date: NaiveDate,
    pub is_accurate: bool,
}

/// A historical or predicted high-demand location supplied by the catalogue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hotspot {
    pub id: String,
    pub day: DayRule,
    /// Coarse time-of-day affinity from the catalogue. Informational for
    /// consumers; scoring works from `predicted_time` directly.
    pub bucket: DayPart,
    /// Predicted clock time of peak demand. `None` when the source record
    /// carried an unparseable time; scores as an irrelevant time window.
    pub predicted_time: Option<NaiveTime>,
    pub location: GeoPoint,
    pub zone: String,
    pub category: HotspotCategory,
    /// Free-text order kind (ride, delivery, food, shopping).
    pub kind: String,
    /// Seed/historical confidence in 0..=100. Absent for user-submitted points.
    pub base_score: Option<u8>,
    pub user_submitted: bool,
    #[serde(default)]
    pub feedback: Vec<ValidationRecord>,
}

impl Hotspot {
    /// Whether the latest feedback entry dated `today` marks this hotspot
    /// inaccurate. Older records are informational only.
    pub fn flagged_inaccurate_on(&self, today: NaiveDate) -> bool {
        self.feedback
            .iter()
            .rev()
            .find(|record| record.date == today)
            .is_some_and(|record| !record.is_accurate)
    }
}

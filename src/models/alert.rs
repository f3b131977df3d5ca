use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AlertPriority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AlertCategory {
    Finance,
    Maintenance,
    Health,
}

/// One system-health alert. `id` is stable per alert kind so the caller can
/// de-duplicate across repeated evaluations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub id: String,
    pub priority: AlertPriority,
    pub category: AlertCategory,
    pub title: String,
    pub message: String,
    pub at: NaiveDateTime,
}

use serde::{Deserialize, Serialize};

use crate::models::hotspot::Hotspot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PriorityTier {
    High,
    Medium,
    Low,
}

/// One entry of the ranked candidate list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredHotspot {
    pub hotspot: Hotspot,
    pub score: f64,
    /// Great-circle distance from the driver, rounded to one decimal.
    /// Absent when no location fix was available.
    pub distance_km: Option<f64>,
    /// Human-readable match reason, e.g. "at location, peak window".
    pub reason: String,
    pub tier: PriorityTier,
    pub strategy_match: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MomentumLevel {
    /// Hot streak.
    #[serde(rename = "GACOR")]
    Gacor,
    /// Warm.
    #[serde(rename = "HANGAT")]
    Hangat,
    /// Cold.
    #[serde(rename = "DINGIN")]
    Dingin,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MomentumReport {
    /// Clamped heat score, 0..=100.
    pub score: u8,
    pub level: MomentumLevel,
    pub advice: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FinancePriority {
    /// In-app balance below the strategy minimum; top up before continuing.
    #[serde(rename = "TOPUP_SALDO")]
    TopUpBalance,
    /// Physical cash running dry; prefer cash-paying orders.
    #[serde(rename = "CARI_ORDER_CASH")]
    SeekCashOrders,
    #[serde(rename = "AMAN")]
    Safe,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialAdvice {
    pub priority: FinancePriority,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdviceSeverity {
    Info,
    Success,
    Urgent,
}

/// One headline recommendation picked by the tactical decision table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TacticalAdvice {
    pub title: String,
    pub message: String,
    pub action: String,
    pub severity: AdviceSeverity,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoldenTime {
    pub active: bool,
    pub label: String,
}

/// The engine's single response type. Recomputed on every invocation and
/// never persisted by the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineOutput {
    pub ranked: Vec<ScoredHotspot>,
    pub momentum: MomentumReport,
    pub tactical: TacticalAdvice,
    pub golden_time: GoldenTime,
    pub financial: FinancialAdvice,
}

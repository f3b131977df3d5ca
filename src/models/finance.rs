use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionCategory {
    Trip,
    Tip,
    Fuel,
    Food,
    Maintenance,
    Other,
}

/// A single cash-flow event. Positive amounts are income, negative expenses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub category: TransactionCategory,
    /// IDR.
    pub amount: i64,
    pub at: NaiveDateTime,
    pub trip_km: Option<f64>,
    pub is_cash: bool,
}

/// Read-only daily summary recomputed by the caller from the day's
/// transactions. The engine treats it as an opaque snapshot. All amounts IDR.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyFinancial {
    pub gross_income: i64,
    pub operational_cost: i64,
    pub net_cash: i64,
    pub cash_income: i64,
    pub non_cash_income: i64,
    pub target: i64,
}

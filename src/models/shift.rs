use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::config::EngineTuning;

/// Operating mode selected by the driver. Parameterizes nearly every weight
/// in the scoring engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    /// Many short, low-value, short-distance orders.
    Feeder,
    /// Few long-distance, high-value orders.
    Sniper,
}

/// Coarse risk classification derived at shift start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShiftRisk {
    Safe,
    Warning,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RestState {
    pub started_at: NaiveDateTime,
}

/// The driver's current working session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftState {
    /// In-app wallet balance at shift start, IDR.
    pub start_balance: i64,
    /// Physical cash at shift start, IDR.
    pub start_cash: i64,
    /// Fuel level at shift start, 0..=100.
    pub start_fuel_pct: u8,
    pub started_at: NaiveDateTime,
    pub strategy: Strategy,
    /// Present while the driver is on a break.
    pub rest: Option<RestState>,
    /// Accumulated active-driving minutes, distinct from wall-clock elapsed
    /// time. Absent when the caller does not track it.
    pub active_minutes: Option<u32>,
}

impl ShiftState {
    /// Shift-start risk from balance and fuel thresholds. Critical fuel or a
    /// depleted balance dominates; a low-but-workable reading is a warning.
    pub fn risk(&self, tuning: &EngineTuning) -> ShiftRisk {
        if self.start_fuel_pct <= tuning.shift_critical_fuel_pct || self.start_balance <= 0 {
            ShiftRisk::Critical
        } else if self.start_fuel_pct <= tuning.shift_warning_fuel_pct
            || self.start_balance < tuning.shift_warning_balance
        {
            ShiftRisk::Warning
        } else {
            ShiftRisk::Safe
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{ShiftRisk, ShiftState, Strategy};
    use crate::config::EngineTuning;

    fn shift(balance: i64, fuel: u8) -> ShiftState {
        ShiftState {
            start_balance: balance,
            start_cash: 50_000,
            start_fuel_pct: fuel,
            started_at: NaiveDate::from_ymd_opt(2024, 3, 5)
                .unwrap()
                .and_hms_opt(7, 0, 0)
                .unwrap(),
            strategy: Strategy::Feeder,
            rest: None,
            active_minutes: None,
        }
    }

    #[test]
    fn full_tank_and_healthy_balance_is_safe() {
        let tuning = EngineTuning::default();
        assert_eq!(shift(100_000, 90).risk(&tuning), ShiftRisk::Safe);
    }

    #[test]
    fn low_fuel_warns_before_it_turns_critical() {
        let tuning = EngineTuning::default();
        assert_eq!(shift(100_000, 25).risk(&tuning), ShiftRisk::Warning);
        assert_eq!(shift(100_000, 10).risk(&tuning), ShiftRisk::Critical);
    }

    #[test]
    fn empty_wallet_is_critical_regardless_of_fuel() {
        let tuning = EngineTuning::default();
        assert_eq!(shift(0, 95).risk(&tuning), ShiftRisk::Critical);
    }
}

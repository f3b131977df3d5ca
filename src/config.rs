use serde::{Deserialize, Serialize};

use crate::models::shift::Strategy;

/// Every threshold, weight, radius, and window the engine uses, in one place.
/// Passed explicitly into each entry point; the engine never reads ambient
/// environment or storage. `Default` carries the canonical tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineTuning {
    /// Score assumed for hotspots without a seed base score, points.
    pub neutral_base: f64,
    /// Multiplier putting 0..=100 seed scores on the bonus scale.
    pub base_multiplier: f64,

    /// Distance penalty rate for Feeder, points per km^1.2.
    pub distance_rate_feeder: f64,
    /// Distance penalty rate for Sniper, points per km^1.2.
    pub distance_rate_sniper: f64,
    /// Exponent applied to distance before the rate.
    pub distance_exponent: f64,
    /// "At location" radius, km.
    pub at_location_km: f64,
    /// "Near" radius, km.
    pub near_km: f64,

    /// Peak window around the predicted time, minutes (inclusive ends).
    pub peak_window_min: (i64, i64),
    /// End of the residual (cooling) window, minutes after predicted.
    pub residual_end_min: i64,
    /// Start of the warming window, minutes before predicted.
    pub warming_start_min: i64,
    /// Bonus inside the peak window, points.
    pub peak_bonus: f64,
    /// Maximum residual bonus, decaying linearly to zero at the window end.
    pub residual_bonus: f64,
    /// Flat bonus in the warming window, points.
    pub warming_bonus: f64,
    /// Penalty outside every window, points (negative).
    pub off_window_penalty: f64,

    /// Bonus for a category matching the active strategy, points.
    pub strategy_bonus: f64,
    /// Penalty Sniper applies to low-value noise categories, points (negative).
    pub sniper_noise_penalty: f64,

    /// Flat bonus for an exact or wildcard day match, points.
    pub day_match_bonus: f64,
    /// Sentinel forced onto day-gated hotspots, points (large negative).
    pub day_gate_sentinel: f64,

    /// Score at or above which a candidate is tier HIGH, points.
    pub tier_high: f64,
    /// Score at or above which a candidate is tier MEDIUM, points.
    pub tier_medium: f64,
    /// Score at or above which tactical advice recommends moving, points.
    pub tactical_confidence: f64,

    /// Momentum look-back window, minutes.
    pub momentum_window_min: i64,
    /// Idle minutes tolerated before decay kicks in.
    pub momentum_idle_grace_min: i64,
    /// Decay per idle minute past the grace period, score points.
    pub momentum_idle_decay: f64,
    /// Points per transaction under Feeder.
    pub momentum_feeder_points: f64,
    /// Points per large transaction under Sniper.
    pub momentum_sniper_large_points: f64,
    /// Points per small transaction under Sniper.
    pub momentum_sniper_small_points: f64,
    /// Amount at or above which a transaction counts as large, IDR.
    pub large_order_floor: i64,
    /// Momentum score at or above which the streak is hot.
    pub momentum_hot: u8,
    /// Momentum score at or above which the streak is warm.
    pub momentum_warm: u8,

    /// Minimum safe in-app balance under Feeder, IDR.
    pub min_balance_feeder: i64,
    /// Minimum safe in-app balance under Sniper, IDR.
    pub min_balance_sniper: i64,
    /// Net physical cash floor below which cash orders are advised, IDR.
    pub min_cash_floor: i64,

    /// Oil change warning window before the interval is due, km.
    pub oil_warning_window_km: u32,
    /// Continuous active driving above this is a HIGH fatigue alert, minutes.
    pub fatigue_high_min: u32,
    /// Continuous active driving above this is a LOW stretch reminder, minutes.
    pub fatigue_low_min: u32,

    /// Shift-start balance below this is a warning, IDR.
    pub shift_warning_balance: i64,
    /// Shift-start fuel at or below this is a warning, percent.
    pub shift_warning_fuel_pct: u8,
    /// Shift-start fuel at or below this is critical, percent.
    pub shift_critical_fuel_pct: u8,
}

impl EngineTuning {
    /// Distance penalty rate for the active strategy. Feeder penalizes
    /// distance heavily; Sniper tolerates long pickups.
    pub fn distance_rate(&self, strategy: Strategy) -> f64 {
        match strategy {
            Strategy::Feeder => self.distance_rate_feeder,
            Strategy::Sniper => self.distance_rate_sniper,
        }
    }

    /// Minimum safe in-app balance for the active strategy. Sniper needs a
    /// higher float since it bets on fewer, costlier orders.
    pub fn min_balance(&self, strategy: Strategy) -> i64 {
        match strategy {
            Strategy::Feeder => self.min_balance_feeder,
            Strategy::Sniper => self.min_balance_sniper,
        }
    }
}

impl Default for EngineTuning {
    fn default() -> Self {
        Self {
            neutral_base: 500.0,
            base_multiplier: 10.0,
            distance_rate_feeder: 60.0,
            distance_rate_sniper: 20.0,
            distance_exponent: 1.2,
            at_location_km: 0.5,
            near_km: 2.0,
            peak_window_min: (-30, 15),
            residual_end_min: 60,
            warming_start_min: -90,
            peak_bonus: 300.0,
            residual_bonus: 200.0,
            warming_bonus: 150.0,
            off_window_penalty: -400.0,
            strategy_bonus: 250.0,
            sniper_noise_penalty: -150.0,
            day_match_bonus: 50.0,
            day_gate_sentinel: -9999.0,
            tier_high: 700.0,
            tier_medium: 400.0,
            tactical_confidence: 700.0,
            momentum_window_min: 120,
            momentum_idle_grace_min: 30,
            momentum_idle_decay: 1.5,
            momentum_feeder_points: 15.0,
            momentum_sniper_large_points: 20.0,
            momentum_sniper_small_points: 5.0,
            large_order_floor: 50_000,
            momentum_hot: 75,
            momentum_warm: 40,
            min_balance_feeder: 50_000,
            min_balance_sniper: 100_000,
            min_cash_floor: 20_000,
            oil_warning_window_km: 200,
            fatigue_high_min: 240,
            fatigue_low_min: 150,
            shift_warning_balance: 30_000,
            shift_warning_fuel_pct: 30,
            shift_critical_fuel_pct: 15,
        }
    }
}

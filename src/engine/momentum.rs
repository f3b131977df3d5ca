use chrono::NaiveDateTime;

use crate::config::EngineTuning;
use crate::models::finance::Transaction;
use crate::models::output::{MomentumLevel, MomentumReport};
use crate::models::shift::Strategy;

/// Rolling heat score from recent order velocity. Only income counts;
/// expenses like a fuel stop say nothing about demand.
///
/// Feeder counts every order equally; Sniper weights large orders 4:1 over
/// small ones. Idle time past the grace period decays the score linearly.
pub fn compute(
    transactions: &[Transaction],
    now: NaiveDateTime,
    strategy: Strategy,
    tuning: &EngineTuning,
) -> MomentumReport {
    let window_start = now - chrono::Duration::minutes(tuning.momentum_window_min);

    let recent: Vec<&Transaction> = transactions
        .iter()
        .filter(|tx| tx.amount > 0 && tx.at > window_start && tx.at <= now)
        .collect();

    let mut raw: f64 = recent
        .iter()
        .map(|tx| match strategy {
            Strategy::Feeder => tuning.momentum_feeder_points,
            Strategy::Sniper => {
                if tx.amount >= tuning.large_order_floor {
                    tuning.momentum_sniper_large_points
                } else {
                    tuning.momentum_sniper_small_points
                }
            }
        })
        .sum();

    if let Some(latest) = recent.iter().map(|tx| tx.at).max() {
        let idle_min = (now - latest).num_minutes();
        if idle_min > tuning.momentum_idle_grace_min {
            raw -= (idle_min - tuning.momentum_idle_grace_min) as f64 * tuning.momentum_idle_decay;
        }
    }

    let score = raw.clamp(0.0, 100.0).round() as u8;
    let (level, advice) = label(score, strategy, tuning);

    MomentumReport {
        score,
        level,
        advice,
    }
}

fn label(score: u8, strategy: Strategy, tuning: &EngineTuning) -> (MomentumLevel, String) {
    if score >= tuning.momentum_hot {
        (
            MomentumLevel::Gacor,
            "You are on a hot streak. Stay in this area and keep taking orders.".to_string(),
        )
    } else if score >= tuning.momentum_warm {
        (
            MomentumLevel::Hangat,
            "Orders are flowing steadily. Hold position and stay online.".to_string(),
        )
    } else {
        let advice = match strategy {
            Strategy::Sniper => {
                "Quiet spell. Hold your position and wait for a high-value order."
            }
            Strategy::Feeder => {
                "Engine is cold. Take a short cheap order nearby to warm it up."
            }
        };
        (MomentumLevel::Dingin, advice.to_string())
    }
}

use chrono::{Datelike, NaiveDateTime, Timelike};
use tracing::debug;

use crate::clock::{day_part, minutes_since, DayPart};
use crate::config::EngineTuning;
use crate::geo::haversine_km;
use crate::models::hotspot::{GeoPoint, Hotspot, HotspotCategory};
use crate::models::output::{PriorityTier, ScoredHotspot};
use crate::models::settings::UserSettings;
use crate::models::shift::Strategy;

/// Score and rank the hotspot catalogue for the current moment.
///
/// Hotspots the driver flagged inaccurate today and hotspots in a hidden
/// category never enter the list. Day-gated hotspots stay in it with the
/// sentinel score so callers can apply the positive-score cutoff as a pure
/// post-filter. The sort is stable descending, so ties keep catalogue order.
pub fn score_hotspots(
    hotspots: &[Hotspot],
    location: Option<&GeoPoint>,
    strategy: Strategy,
    now: NaiveDateTime,
    settings: &UserSettings,
    tuning: &EngineTuning,
) -> Vec<ScoredHotspot> {
    let today = now.date();

    let mut scored: Vec<ScoredHotspot> = hotspots
        .iter()
        .filter(|spot| settings.shows(spot.category) && !spot.flagged_inaccurate_on(today))
        .map(|spot| score_one(spot, location, strategy, now, tuning))
        .collect();

    scored.sort_by(|a, b| b.score.total_cmp(&a.score));

    debug!(
        candidates = scored.len(),
        catalogue = hotspots.len(),
        strategy = ?strategy,
        "hotspots scored"
    );

    scored
}

fn score_one(
    spot: &Hotspot,
    location: Option<&GeoPoint>,
    strategy: Strategy,
    now: NaiveDateTime,
    tuning: &EngineTuning,
) -> ScoredHotspot {
    let mut reasons: Vec<&str> = Vec::new();

    let base = match spot.base_score {
        Some(weight) => f64::from(weight) * tuning.base_multiplier,
        None => tuning.neutral_base,
    };

    let distance_km = location.map(|here| haversine_km(here, &spot.location).max(0.0));
    let distance_penalty = match distance_km {
        Some(km) => {
            if km < tuning.at_location_km {
                reasons.push("at location");
            } else if km < tuning.near_km {
                reasons.push("near");
            }
            km.powf(tuning.distance_exponent) * tuning.distance_rate(strategy)
        }
        None => 0.0,
    };

    let time_bonus = time_decay(spot, now, tuning, &mut reasons);

    let (category_bonus, mut strategy_match) =
        strategy_alignment(spot.category, strategy, day_part(now.hour()), tuning);
    if strategy_match {
        reasons.push("strategy match");
    }

    let mut score = base - distance_penalty + time_bonus + category_bonus;

    // Day gating overrides every other factor.
    if spot.day.matches(today_weekday(now)) {
        score += tuning.day_match_bonus;
    } else {
        score = tuning.day_gate_sentinel;
        strategy_match = false;
        reasons.clear();
        reasons.push("off-day");
    }

    let tier = if score >= tuning.tier_high {
        PriorityTier::High
    } else if score >= tuning.tier_medium {
        PriorityTier::Medium
    } else {
        PriorityTier::Low
    };

    ScoredHotspot {
        hotspot: spot.clone(),
        score,
        distance_km: distance_km.map(|km| (km * 10.0).round() / 10.0),
        reason: reasons.join(", "),
        tier,
        strategy_match,
    }
}

/// Five-bucket bell curve around the predicted time. An unparseable predicted
/// time arrives as `None` and scores the off-window penalty.
fn time_decay(
    spot: &Hotspot,
    now: NaiveDateTime,
    tuning: &EngineTuning,
    reasons: &mut Vec<&str>,
) -> f64 {
    let Some(predicted) = spot.predicted_time else {
        return tuning.off_window_penalty;
    };

    // Positive minutes mean the predicted time has passed.
    let minutes = minutes_since(predicted, now.time());
    let (peak_start, peak_end) = tuning.peak_window_min;

    if (peak_start..=peak_end).contains(&minutes) {
        reasons.push("peak window");
        tuning.peak_bonus
    } else if minutes > peak_end && minutes <= tuning.residual_end_min {
        reasons.push("cooling down");
        let span = (tuning.residual_end_min - peak_end) as f64;
        tuning.residual_bonus * (tuning.residual_end_min - minutes) as f64 / span
    } else if minutes >= tuning.warming_start_min && minutes < peak_start {
        reasons.push("warming up");
        tuning.warming_bonus
    } else {
        tuning.off_window_penalty
    }
}

/// Category weight table, exhaustive over the closed category set.
///
/// Sniper chases high-value demand: transport hubs, malls, logistics, and
/// culinary at night. It actively suppresses high-frequency noise categories.
/// Feeder favors the dense short-order ground and penalizes nothing.
fn strategy_alignment(
    category: HotspotCategory,
    strategy: Strategy,
    part: DayPart,
    tuning: &EngineTuning,
) -> (f64, bool) {
    match strategy {
        Strategy::Sniper => match category {
            HotspotCategory::TransportHub | HotspotCategory::Mall | HotspotCategory::Logistics => {
                (tuning.strategy_bonus, true)
            }
            HotspotCategory::Culinary if part == DayPart::Night => (tuning.strategy_bonus, true),
            HotspotCategory::Education | HotspotCategory::Residential => {
                (tuning.sniper_noise_penalty, false)
            }
            HotspotCategory::Culinary
            | HotspotCategory::Market
            | HotspotCategory::Service
            | HotspotCategory::Other => (0.0, false),
        },
        Strategy::Feeder => match category {
            HotspotCategory::Residential | HotspotCategory::Education => {
                (tuning.strategy_bonus, true)
            }
            HotspotCategory::Culinary
            | HotspotCategory::TransportHub
            | HotspotCategory::Mall
            | HotspotCategory::Market
            | HotspotCategory::Service
            | HotspotCategory::Logistics
            | HotspotCategory::Other => (0.0, false),
        },
    }
}

fn today_weekday(now: NaiveDateTime) -> chrono::Weekday {
    now.date().weekday()
}

use crate::config::EngineTuning;
use crate::models::output::{
    AdviceSeverity, FinancePriority, ScoredHotspot, TacticalAdvice,
};
use crate::models::shift::Strategy;

/// Pick the single headline recommendation. First match wins:
/// financial emergency, in the zone, strong distant opportunity, generic
/// drift, dead zone.
pub fn select(
    top: Option<&ScoredHotspot>,
    financial_priority: FinancePriority,
    strategy: Strategy,
    tuning: &EngineTuning,
) -> TacticalAdvice {
    if financial_priority == FinancePriority::TopUpBalance {
        return TacticalAdvice {
            title: "Balance Emergency".to_string(),
            message: "Your in-app balance is below the safe floor. Top up now or you will start losing non-cash orders.".to_string(),
            action: "Top up before continuing".to_string(),
            severity: AdviceSeverity::Urgent,
        };
    }

    let Some(top) = top else {
        return dead_zone(strategy);
    };

    if top
        .distance_km
        .is_some_and(|km| km < tuning.at_location_km)
    {
        return TacticalAdvice {
            title: "You Are in the Zone".to_string(),
            message: format!(
                "{} is hot right now and you are standing in it. Do not move.",
                top.hotspot.zone
            ),
            action: "Stay put".to_string(),
            severity: AdviceSeverity::Success,
        };
    }

    if top.score >= tuning.tactical_confidence {
        return TacticalAdvice {
            title: "Strong Opportunity Nearby".to_string(),
            message: format!(
                "{} looks strong ({}). Worth the ride over.",
                top.hotspot.zone, top.reason
            ),
            action: format!("Move toward {}", top.hotspot.zone),
            severity: AdviceSeverity::Info,
        };
    }

    TacticalAdvice {
        title: "Keep Circulating".to_string(),
        message: "No standout hotspot right now. Drift toward the nearest busy area and stay flexible.".to_string(),
        action: "Drift toward crowds".to_string(),
        severity: AdviceSeverity::Info,
    }
}

fn dead_zone(strategy: Strategy) -> TacticalAdvice {
    let message = match strategy {
        Strategy::Sniper => {
            "Dead zone for your hours. Head to the nearest station or mall and wait for a big one."
        }
        Strategy::Feeder => {
            "Dead zone right now. Head into a dense residential area and pick up the small stuff."
        }
    };

    TacticalAdvice {
        title: "Dead Zone".to_string(),
        message: message.to_string(),
        action: "Relocate".to_string(),
        severity: AdviceSeverity::Info,
    }
}

use chrono::NaiveDateTime;
use tracing::info;

use crate::config::EngineTuning;
use crate::models::alert::{Alert, AlertCategory, AlertPriority};
use crate::models::finance::DailyFinancial;
use crate::models::garage::GarageData;
use crate::models::shift::ShiftState;

/// Evaluate finance, maintenance, and fatigue alerts. A sub-system whose
/// input is absent raises nothing. Alert ids are stable per kind so the
/// caller can de-duplicate across repeated evaluations.
pub fn evaluate(
    financials: Option<&DailyFinancial>,
    garage: Option<&GarageData>,
    shift: Option<&ShiftState>,
    now: NaiveDateTime,
    tuning: &EngineTuning,
) -> Vec<Alert> {
    let mut alerts = Vec::new();

    if let Some(financials) = financials {
        revenue_milestone(financials, now, &mut alerts);
    }
    if let Some(garage) = garage {
        maintenance(garage, now, tuning, &mut alerts);
    }
    if let Some(shift) = shift {
        fatigue(shift, now, tuning, &mut alerts);
    }

    for alert in alerts.iter().filter(|a| a.priority == AlertPriority::High) {
        info!(alert_id = %alert.id, title = %alert.title, "high priority alert raised");
    }

    alerts
}

/// Only the single matching milestone fires, not both.
fn revenue_milestone(financials: &DailyFinancial, now: NaiveDateTime, alerts: &mut Vec<Alert>) {
    if financials.target <= 0 {
        return;
    }

    let earned = financials.gross_income - financials.operational_cost;
    if earned >= financials.target {
        alerts.push(Alert {
            id: "finance_target_reached".to_string(),
            priority: AlertPriority::Low,
            category: AlertCategory::Finance,
            title: "Target Reached".to_string(),
            message: format!(
                "Net income hit Rp{earned}, past today's Rp{} target. Everything from here is bonus.",
                financials.target
            ),
            at: now,
        });
    } else if earned * 2 >= financials.target {
        alerts.push(Alert {
            id: "finance_halfway".to_string(),
            priority: AlertPriority::Low,
            category: AlertCategory::Finance,
            title: "Halfway There".to_string(),
            message: format!(
                "Rp{earned} earned, halfway to today's Rp{} target.",
                financials.target
            ),
            at: now,
        });
    }
}

fn maintenance(
    garage: &GarageData,
    now: NaiveDateTime,
    tuning: &EngineTuning,
    alerts: &mut Vec<Alert>,
) {
    let since_oil = garage.km_since_oil_change();
    if since_oil >= garage.oil_interval_km {
        let overdue = since_oil - garage.oil_interval_km;
        alerts.push(Alert {
            id: "maintenance_oil_overdue".to_string(),
            priority: AlertPriority::High,
            category: AlertCategory::Maintenance,
            title: "Oil Change Overdue".to_string(),
            message: format!("Oil change is {overdue} km overdue. Book a service today."),
            at: now,
        });
    } else if since_oil + tuning.oil_warning_window_km >= garage.oil_interval_km {
        let remaining = garage.oil_interval_km - since_oil;
        alerts.push(Alert {
            id: "maintenance_oil_due_soon".to_string(),
            priority: AlertPriority::Medium,
            category: AlertCategory::Maintenance,
            title: "Oil Change Due Soon".to_string(),
            message: format!("Oil change due in {remaining} km. Plan a stop."),
            at: now,
        });
    }

    if let (Some(since_tires), Some(interval)) =
        (garage.km_since_tire_change(), garage.tire_interval_km)
    {
        if since_tires >= interval {
            let overdue = since_tires - interval;
            alerts.push(Alert {
                id: "maintenance_tires_overdue".to_string(),
                priority: AlertPriority::High,
                category: AlertCategory::Maintenance,
                title: "Tire Change Overdue".to_string(),
                message: format!("Tires are {overdue} km past their interval. Check them now."),
                at: now,
            });
        }
    }
}

/// Bands on accumulated active-driving minutes, not wall-clock shift length.
/// The higher band suppresses the lower; a rest period suppresses both.
fn fatigue(shift: &ShiftState, now: NaiveDateTime, tuning: &EngineTuning, alerts: &mut Vec<Alert>) {
    if shift.rest.is_some() {
        return;
    }
    let Some(active_minutes) = shift.active_minutes else {
        return;
    };

    if active_minutes > tuning.fatigue_high_min {
        alerts.push(Alert {
            id: "health_fatigue".to_string(),
            priority: AlertPriority::High,
            category: AlertCategory::Health,
            title: "Fatigue Risk".to_string(),
            message: format!(
                "You have been actively driving for {active_minutes} minutes. Microsleep risk is real; take a proper break."
            ),
            at: now,
        });
    } else if active_minutes > tuning.fatigue_low_min {
        alerts.push(Alert {
            id: "health_stretch".to_string(),
            priority: AlertPriority::Low,
            category: AlertCategory::Health,
            title: "Time to Stretch".to_string(),
            message: "Over two and a half hours of active driving. Pull over and stretch for five minutes.".to_string(),
            at: now,
        });
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};

    use super::evaluate;
    use crate::config::EngineTuning;
    use crate::models::alert::AlertPriority;
    use crate::models::finance::DailyFinancial;
    use crate::models::garage::GarageData;
    use crate::models::shift::{RestState, ShiftState, Strategy};

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn garage(odometer: u32, last_oil: u32, interval: u32) -> GarageData {
        GarageData {
            odometer_km: odometer,
            last_oil_change_km: last_oil,
            oil_interval_km: interval,
            last_tire_change_km: None,
            tire_interval_km: None,
            registration_expiry: None,
            license_expiry: None,
        }
    }

    fn summary(gross: i64, cost: i64, target: i64) -> DailyFinancial {
        DailyFinancial {
            gross_income: gross,
            operational_cost: cost,
            net_cash: 50_000,
            cash_income: 0,
            non_cash_income: gross,
            target,
        }
    }

    fn shift(active_minutes: Option<u32>, resting: bool) -> ShiftState {
        ShiftState {
            start_balance: 100_000,
            start_cash: 50_000,
            start_fuel_pct: 80,
            started_at: noon(),
            strategy: Strategy::Feeder,
            rest: resting.then_some(RestState { started_at: noon() }),
            active_minutes,
        }
    }

    #[test]
    fn absent_inputs_raise_nothing() {
        let tuning = EngineTuning::default();
        assert!(evaluate(None, None, None, noon(), &tuning).is_empty());
    }

    #[test]
    fn overdue_oil_change_is_high_priority_and_states_the_overshoot() {
        let tuning = EngineTuning::default();
        let alerts = evaluate(None, Some(&garage(12_300, 10_000, 2_000)), None, noon(), &tuning);

        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].priority, AlertPriority::High);
        assert_eq!(alerts[0].id, "maintenance_oil_overdue");
        assert!(alerts[0].message.contains("300 km"));
    }

    #[test]
    fn approaching_oil_change_is_only_a_medium_warning() {
        let tuning = EngineTuning::default();
        let alerts = evaluate(None, Some(&garage(11_900, 10_000, 2_000)), None, noon(), &tuning);

        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].priority, AlertPriority::Medium);
        assert_eq!(alerts[0].id, "maintenance_oil_due_soon");
    }

    #[test]
    fn fresh_oil_raises_no_maintenance_alert() {
        let tuning = EngineTuning::default();
        let alerts = evaluate(None, Some(&garage(10_500, 10_000, 2_000)), None, noon(), &tuning);
        assert!(alerts.is_empty());
    }

    #[test]
    fn only_the_matching_revenue_milestone_fires() {
        let tuning = EngineTuning::default();

        let done = evaluate(Some(&summary(250_000, 20_000, 200_000)), None, None, noon(), &tuning);
        assert_eq!(done.len(), 1);
        assert_eq!(done[0].id, "finance_target_reached");

        let halfway = evaluate(Some(&summary(120_000, 10_000, 200_000)), None, None, noon(), &tuning);
        assert_eq!(halfway.len(), 1);
        assert_eq!(halfway[0].id, "finance_halfway");

        let early = evaluate(Some(&summary(40_000, 10_000, 200_000)), None, None, noon(), &tuning);
        assert!(early.is_empty());
    }

    #[test]
    fn high_fatigue_band_suppresses_the_stretch_reminder() {
        let tuning = EngineTuning::default();
        let alerts = evaluate(None, None, Some(&shift(Some(300), false)), noon(), &tuning);

        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].id, "health_fatigue");
        assert_eq!(alerts[0].priority, AlertPriority::High);
    }

    #[test]
    fn moderate_fatigue_gets_the_stretch_reminder() {
        let tuning = EngineTuning::default();
        let alerts = evaluate(None, None, Some(&shift(Some(180), false)), noon(), &tuning);

        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].id, "health_stretch");
    }

    #[test]
    fn resting_or_untracked_minutes_suppress_fatigue_checks() {
        let tuning = EngineTuning::default();
        assert!(evaluate(None, None, Some(&shift(Some(300), true)), noon(), &tuning).is_empty());
        assert!(evaluate(None, None, Some(&shift(None, false)), noon(), &tuning).is_empty());
    }
}

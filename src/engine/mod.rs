pub mod finance;
pub mod golden;
pub mod health;
pub mod momentum;
pub mod scoring;
pub mod tactical;

use chrono::{NaiveDateTime, Timelike};
use tracing::debug;

use crate::config::EngineTuning;
use crate::models::finance::{DailyFinancial, Transaction};
use crate::models::hotspot::{GeoPoint, Hotspot};
use crate::models::output::EngineOutput;
use crate::models::settings::UserSettings;
use crate::models::shift::{ShiftState, Strategy};

/// Everything the engine consumes for one invocation. Supplied whole by the
/// surrounding application; the engine holds no state of its own.
#[derive(Debug, Clone)]
pub struct EngineInput<'a> {
    pub hotspots: &'a [Hotspot],
    pub location: Option<&'a GeoPoint>,
    pub shift: Option<&'a ShiftState>,
    pub financials: Option<&'a DailyFinancial>,
    pub transactions: &'a [Transaction],
    pub settings: &'a UserSettings,
}

/// One full recommendation pass. `now` is captured once by the caller and
/// threaded through every sub-computation so a single pass never straddles a
/// bucket boundary. Safe to call repeatedly and concurrently; no side
/// effects, no interior state.
pub fn run(input: &EngineInput<'_>, now: NaiveDateTime, tuning: &EngineTuning) -> EngineOutput {
    let strategy = input
        .shift
        .map(|shift| shift.strategy)
        .unwrap_or(Strategy::Feeder);

    let ranked = scoring::score_hotspots(
        input.hotspots,
        input.location,
        strategy,
        now,
        input.settings,
        tuning,
    );

    let momentum = momentum::compute(input.transactions, now, strategy, tuning);
    let financial = finance::assess(input.shift, input.financials, strategy, tuning);

    // Tactical advice keys off the best positive candidate only; sentinel
    // scores mean nothing actionable survived day gating.
    let top = ranked.first().filter(|best| best.score > 0.0);
    let tactical = tactical::select(top, financial.priority, strategy, tuning);

    let golden_time = golden::classify(now.hour(), strategy);

    debug!(
        candidates = ranked.len(),
        momentum = momentum.score,
        financial = ?financial.priority,
        golden = golden_time.active,
        "engine pass complete"
    );

    EngineOutput {
        ranked,
        momentum,
        tactical,
        golden_time,
        financial,
    }
}

use super::{AdvisoryContext, AdvisoryProvider};
use crate::config::EngineTuning;
use crate::engine::tactical;
use crate::error::AdvisoryError;
use crate::models::output::TacticalAdvice;

/// The deterministic offline provider: wraps the tactical decision table.
/// Authoritative whenever no remote provider is configured or reachable.
pub struct LocalAdvisor {
    tuning: EngineTuning,
}

impl LocalAdvisor {
    pub fn new(tuning: EngineTuning) -> Self {
        Self { tuning }
    }
}

impl AdvisoryProvider for LocalAdvisor {
    fn name(&self) -> &'static str {
        "local"
    }

    fn advise(&self, ctx: &AdvisoryContext<'_>) -> Result<TacticalAdvice, AdvisoryError> {
        Ok(tactical::select(
            ctx.top,
            ctx.financial_priority,
            ctx.strategy,
            &self.tuning,
        ))
    }
}

pub mod local;

use tracing::warn;

use crate::config::EngineTuning;
use crate::error::AdvisoryError;
use crate::models::output::{FinancePriority, ScoredHotspot, TacticalAdvice};
use crate::models::shift::Strategy;

pub use local::LocalAdvisor;

/// What an advisory provider gets to look at for one recommendation.
#[derive(Debug, Clone)]
pub struct AdvisoryContext<'a> {
    pub top: Option<&'a ScoredHotspot>,
    pub financial_priority: FinancePriority,
    pub strategy: Strategy,
}

/// A source of tactical advice. The deterministic [`LocalAdvisor`] is always
/// available; a remote (e.g. LLM-backed) provider is a caller-supplied
/// implementation that may be unavailable or come back empty.
pub trait AdvisoryProvider: Send + Sync {
    /// Provider name for logging.
    fn name(&self) -> &'static str;

    fn advise(&self, ctx: &AdvisoryContext<'_>) -> Result<TacticalAdvice, AdvisoryError>;
}

/// Prefers a primary provider and falls back to the local decision table
/// whenever the primary errors or returns a blank message. Callers treat
/// provider selection as a strategy, never a try/catch around a client.
pub struct FallbackAdvisor<P> {
    primary: P,
    local: LocalAdvisor,
}

impl<P: AdvisoryProvider> FallbackAdvisor<P> {
    pub fn new(primary: P, tuning: EngineTuning) -> Self {
        Self {
            primary,
            local: LocalAdvisor::new(tuning),
        }
    }
}

impl<P: AdvisoryProvider> AdvisoryProvider for FallbackAdvisor<P> {
    fn name(&self) -> &'static str {
        "fallback"
    }

    fn advise(&self, ctx: &AdvisoryContext<'_>) -> Result<TacticalAdvice, AdvisoryError> {
        match self.primary.advise(ctx) {
            Ok(advice) if !advice.message.trim().is_empty() => Ok(advice),
            Ok(_) => {
                warn!(provider = self.primary.name(), "blank advice, using local");
                self.local.advise(ctx)
            }
            Err(err) => {
                warn!(provider = self.primary.name(), error = %err, "advice failed, using local");
                self.local.advise(ctx)
            }
        }
    }
}

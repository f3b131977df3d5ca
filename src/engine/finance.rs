use crate::config::EngineTuning;
use crate::models::finance::DailyFinancial;
use crate::models::output::{FinancePriority, FinancialAdvice};
use crate::models::shift::{ShiftState, Strategy};

/// Threshold the driver's liquidity against the strategy minimums.
///
/// A depleted in-app balance always wins. Missing shift or summary data
/// degrades to `Safe` rather than guessing.
pub fn assess(
    shift: Option<&ShiftState>,
    financials: Option<&DailyFinancial>,
    strategy: Strategy,
    tuning: &EngineTuning,
) -> FinancialAdvice {
    let (Some(shift), Some(financials)) = (shift, financials) else {
        return FinancialAdvice {
            priority: FinancePriority::Safe,
            message: None,
        };
    };

    let balance = estimated_balance(shift, financials);
    let floor = tuning.min_balance(strategy);

    if balance < floor {
        return FinancialAdvice {
            priority: FinancePriority::TopUpBalance,
            message: Some(format!(
                "In-app balance is down to ~Rp{balance}. Top up above Rp{floor} before taking more orders."
            )),
        };
    }

    if financials.net_cash < tuning.min_cash_floor {
        return FinancialAdvice {
            priority: FinancePriority::SeekCashOrders,
            message: Some(
                "Physical cash is running low. Prefer cash-paying orders for a while.".to_string(),
            ),
        };
    }

    FinancialAdvice {
        priority: FinancePriority::Safe,
        message: None,
    }
}

/// Start-of-shift balance plus today's non-cash income. A deliberate
/// approximation: platform commission deductions are not subtracted.
fn estimated_balance(shift: &ShiftState, financials: &DailyFinancial) -> i64 {
    shift.start_balance + financials.non_cash_income
}

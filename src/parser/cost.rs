//! Cost estimate interpretation.
//!
//! Only estimates carrying a currency marker count toward the budget. The
//! amount is the digit run right after the marker, so "$10-15" reads as 10.

use once_cell::sync::Lazy;
use regex::Regex;

pub const CURRENCY_MARKER: char = '$';

static AMOUNT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$(\d+)").unwrap());

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CostEstimate {
    /// No currency marker: the activity stays out of the budget.
    NoCost,
    /// Marker present but no digits after it; budgeted with a blank amount.
    Unpriced,
    Priced(f64),
}

impl CostEstimate {
    pub fn is_budgeted(&self) -> bool {
        !matches!(self, CostEstimate::NoCost)
    }

    pub fn amount(&self) -> Option<f64> {
        match self {
            CostEstimate::Priced(amount) => Some(*amount),
            _ => None,
        }
    }
}

pub fn interpret_cost(cost_estimate: &str) -> CostEstimate {
    if !cost_estimate.contains(CURRENCY_MARKER) {
        return CostEstimate::NoCost;
    }

    AMOUNT
        .captures(cost_estimate)
        .and_then(|caps| caps[1].parse::<f64>().ok())
        .map_or(CostEstimate::Unpriced, CostEstimate::Priced)
}

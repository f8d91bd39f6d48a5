//! Financial snapshot for the fundamental track.
//!
//! Every field is optional. Accessors return zero for an absent field so that
//! missing data is scored, never rejected.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialSnapshot {
    pub trailing_pe: Option<f64>,
    pub forward_pe: Option<f64>,
    /// Already expressed as a percentage (2.5 means 2.5%).
    pub dividend_yield: Option<f64>,
    /// Dividend per share.
    pub dividend_rate: Option<f64>,
    /// Fraction (0.18 means 18%).
    pub return_on_equity: Option<f64>,
    /// Fraction (0.12 means 12%).
    pub revenue_growth: Option<f64>,
    pub total_revenue: Option<f64>,
    /// Raw ratio, not a percentage.
    pub debt_to_equity: Option<f64>,
    pub total_debt: Option<f64>,
}

/// Field names accepted by [`FinancialSnapshot::set_field`].
pub const FIELD_NAMES: [&str; 9] = [
    "trailing_pe",
    "forward_pe",
    "dividend_yield",
    "dividend_rate",
    "return_on_equity",
    "revenue_growth",
    "total_revenue",
    "debt_to_equity",
    "total_debt",
];

impl FinancialSnapshot {
    /// Trailing P/E, then forward P/E, then 0. A zero trailing value also falls back.
    pub fn pe_ratio(&self) -> f64 {
        self.trailing_pe
            .filter(|v| *v != 0.0)
            .or(self.forward_pe.filter(|v| *v != 0.0))
            .unwrap_or(0.0)
    }

    pub fn dividend_yield(&self) -> f64 {
        self.dividend_yield.unwrap_or(0.0)
    }

    pub fn dividend_rate(&self) -> f64 {
        self.dividend_rate.unwrap_or(0.0)
    }

    pub fn return_on_equity(&self) -> f64 {
        self.return_on_equity.unwrap_or(0.0)
    }

    pub fn revenue_growth(&self) -> f64 {
        self.revenue_growth.unwrap_or(0.0)
    }

    pub fn total_revenue(&self) -> f64 {
        self.total_revenue.unwrap_or(0.0)
    }

    pub fn debt_to_equity(&self) -> f64 {
        self.debt_to_equity.unwrap_or(0.0)
    }

    pub fn total_debt(&self) -> f64 {
        self.total_debt.unwrap_or(0.0)
    }

    /// Set a field by its snake_case name. Returns false for an unknown name.
    pub fn set_field(&mut self, name: &str, value: f64) -> bool {
        let slot = match name {
            "trailing_pe" => &mut self.trailing_pe,
            "forward_pe" => &mut self.forward_pe,
            "dividend_yield" => &mut self.dividend_yield,
            "dividend_rate" => &mut self.dividend_rate,
            "return_on_equity" => &mut self.return_on_equity,
            "revenue_growth" => &mut self.revenue_growth,
            "total_revenue" => &mut self.total_revenue,
            "debt_to_equity" => &mut self.debt_to_equity,
            "total_debt" => &mut self.total_debt,
            _ => return false,
        };
        *slot = Some(value);
        true
    }
}

//! Market data provider port trait.

use crate::domain::error::EquiscoreError;
use crate::domain::price::PriceSeries;
use crate::domain::snapshot::FinancialSnapshot;

/// Everything the scorers need for one ticker, fetched in a single call.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketData {
    pub series: PriceSeries,
    pub snapshot: FinancialSnapshot,
}

/// Source of price history and fundamentals.
///
/// Any failure is terminal for the analysis that asked; callers do not retry.
pub trait ProviderPort {
    fn fetch(&self, ticker: &str) -> Result<MarketData, EquiscoreError>;
}

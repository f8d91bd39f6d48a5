#![allow(dead_code)]

use chrono::{Duration, NaiveDate, NaiveDateTime};
use equiscore::domain::company::{CompanyDirectory, CompanyProfile};
use equiscore::domain::error::EquiscoreError;
pub use equiscore::domain::price::{PricePoint, PriceSeries};
pub use equiscore::domain::snapshot::FinancialSnapshot;
use equiscore::ports::provider_port::{MarketData, ProviderPort};
use std::collections::HashMap;

pub struct MockProvider {
    pub data: HashMap<String, MarketData>,
    pub errors: HashMap<String, String>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
            errors: HashMap::new(),
        }
    }

    pub fn with_data(mut self, ticker: &str, closes: &[f64], snapshot: FinancialSnapshot) -> Self {
        self.data.insert(
            ticker.to_string(),
            MarketData {
                series: make_series(closes),
                snapshot,
            },
        );
        self
    }

    pub fn with_error(mut self, ticker: &str, reason: &str) -> Self {
        self.errors.insert(ticker.to_string(), reason.to_string());
        self
    }
}

impl ProviderPort for MockProvider {
    fn fetch(&self, ticker: &str) -> Result<MarketData, EquiscoreError> {
        if let Some(reason) = self.errors.get(ticker) {
            return Err(EquiscoreError::DataUnavailable {
                ticker: ticker.to_string(),
                reason: reason.clone(),
            });
        }
        self.data
            .get(ticker)
            .cloned()
            .ok_or_else(|| EquiscoreError::DataUnavailable {
                ticker: ticker.to_string(),
                reason: "not found".to_string(),
            })
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn timestamp() -> NaiveDateTime {
    date(2024, 6, 3).and_hms_opt(17, 35, 0).unwrap()
}

pub fn make_points(closes: &[f64]) -> Vec<PricePoint> {
    let start = date(2024, 1, 1);
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| PricePoint {
            date: start + Duration::days(i as i64),
            open: close,
            high: close + 1.0,
            low: close - 1.0,
            close,
            volume: 1000,
        })
        .collect()
}

pub fn make_series(closes: &[f64]) -> PriceSeries {
    PriceSeries::new(make_points(closes)).unwrap()
}

/// `count` closes rising by one from `start`.
pub fn rising(start: f64, count: usize) -> Vec<f64> {
    (0..count).map(|i| start + i as f64).collect()
}

pub fn profile(name: &str, ticker: &str) -> CompanyProfile {
    CompanyProfile {
        name: name.to_string(),
        ticker: ticker.to_string(),
        color: "#00A8E8".to_string(),
        description: format!("{} description", name),
        analyst: "XU".to_string(),
    }
}

pub fn directory() -> CompanyDirectory {
    CompanyDirectory::new(vec![
        profile("Airbus", "AIR.PA"),
        profile("Hermès", "RMS.PA"),
        profile("Sopra Steria", "SOP.PA"),
    ])
}

pub fn strong_snapshot() -> FinancialSnapshot {
    FinancialSnapshot {
        trailing_pe: Some(12.0),
        forward_pe: Some(11.0),
        dividend_yield: Some(5.2),
        dividend_rate: Some(2.5),
        return_on_equity: Some(0.25),
        revenue_growth: Some(0.2),
        total_revenue: Some(65_000_000_000.0),
        debt_to_equity: Some(0.3),
        total_debt: Some(9_000_000_000.0),
    }
}

pub fn weak_snapshot() -> FinancialSnapshot {
    FinancialSnapshot {
        trailing_pe: Some(45.0),
        forward_pe: None,
        dividend_yield: Some(0.1),
        dividend_rate: Some(0.05),
        return_on_equity: Some(0.01),
        revenue_growth: Some(-0.2),
        total_revenue: Some(5_000_000.0),
        debt_to_equity: Some(4.5),
        total_debt: Some(20_000_000.0),
    }
}

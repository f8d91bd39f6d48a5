//! Daily price history.

use crate::domain::error::EquiscoreError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: i64,
}

/// Chronologically ordered price history with strictly increasing dates.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Build a series, rejecting duplicate or out-of-order dates.
    pub fn new(points: Vec<PricePoint>) -> Result<Self, EquiscoreError> {
        for pair in points.windows(2) {
            if pair[1].date <= pair[0].date {
                return Err(EquiscoreError::InvalidSeries {
                    reason: format!(
                        "dates must be strictly increasing ({} followed by {})",
                        pair[0].date, pair[1].date
                    ),
                });
            }
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

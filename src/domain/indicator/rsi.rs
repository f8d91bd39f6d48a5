//! RSI (Relative Strength Index) indicator.
//!
//! Average gain and average loss are simple means of the last n day-over-day
//! changes (losses as positive magnitudes), recomputed at every point:
//!
//! RSI = 100 - (100 / (1 + avg_gain / avg_loss))
//! If avg_loss == 0 and avg_gain > 0: RSI = 100
//! If both averages are 0 the ratio is undefined and the point is invalid.
//!
//! Warmup: first n points are invalid (need n price changes).

use crate::domain::indicator::{IndicatorPoint, IndicatorSeries, IndicatorType, IndicatorValue};
use crate::domain::price::PricePoint;

pub const DEFAULT_PERIOD: usize = 14;

pub fn calculate_rsi(points: &[PricePoint], period: usize) -> IndicatorSeries {
    let mut values = Vec::with_capacity(points.len());

    let mut gains: Vec<f64> = Vec::with_capacity(points.len());
    let mut losses: Vec<f64> = Vec::with_capacity(points.len());
    gains.push(0.0);
    losses.push(0.0);
    for i in 1..points.len() {
        let change = points[i].close - points[i - 1].close;
        gains.push(if change > 0.0 { change } else { 0.0 });
        losses.push(if change < 0.0 { -change } else { 0.0 });
    }

    for (i, point) in points.iter().enumerate() {
        let rsi = if period > 0 && i >= period {
            let window = (i + 1 - period)..=i;
            let avg_gain = gains[window.clone()].iter().sum::<f64>() / period as f64;
            let avg_loss = losses[window].iter().sum::<f64>() / period as f64;
            rsi_from_averages(avg_gain, avg_loss)
        } else {
            None
        };

        values.push(IndicatorPoint {
            date: point.date,
            valid: rsi.is_some(),
            value: IndicatorValue::Simple(rsi.unwrap_or(0.0)),
        });
    }

    IndicatorSeries {
        indicator_type: IndicatorType::Rsi(period),
        values,
    }
}

fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> Option<f64> {
    if avg_loss == 0.0 {
        if avg_gain > 0.0 { Some(100.0) } else { None }
    } else {
        Some(100.0 - (100.0 / (1.0 + avg_gain / avg_loss)))
    }
}

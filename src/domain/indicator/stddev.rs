//! Rolling standard deviation.
//!
//! Sample standard deviation (divides by n-1) over n closing prices.
//! STDDEV(n)[i] = sqrt(sum((C[i-j] - SMA(n)[i])^2 for j in 0..n) / (n - 1))
//! Undefined for periods below 2 and inside the warmup window.

use crate::domain::price::PricePoint;

/// Sample mean and standard deviation of the `period` closes ending at `end`.
pub fn window_mean_stddev(points: &[PricePoint], end: usize, period: usize) -> Option<(f64, f64)> {
    if period < 2 || end + 1 < period || end >= points.len() {
        return None;
    }

    let window = &points[end + 1 - period..=end];
    let mean = window.iter().map(|p| p.close).sum::<f64>() / period as f64;
    let variance = window
        .iter()
        .map(|p| {
            let diff = p.close - mean;
            diff * diff
        })
        .sum::<f64>()
        / (period - 1) as f64;

    Some((mean, variance.sqrt()))
}

//! Rate of change over a fixed window of closes.
//!
//! change = ((C[last] - C[ref]) / C[ref]) * 100
//! where `ref` is the first close of the trailing `window` closes, or the earliest
//! close when fewer than `window` points exist.

use crate::domain::price::PricePoint;

/// Percentage change across the trailing `window` closes.
///
/// Returns `None` for an empty input, a zero window, or a zero reference close.
pub fn percent_change_over(points: &[PricePoint], window: usize) -> Option<f64> {
    let last = points.last()?;
    if window == 0 {
        return None;
    }

    let reference = if points.len() > window {
        points[points.len() - window].close
    } else {
        points[0].close
    };

    if reference == 0.0 {
        return None;
    }

    Some((last.close - reference) / reference * 100.0)
}

//! Exponential Moving Average kernel used by MACD.
//!
//! alpha = 2/(span+1), EMA[0] = x[0], EMA[i] = x[i]*alpha + EMA[i-1]*(1-alpha).
//! Recursive form seeded with the first observation, so every output is defined.

/// EMA over an arbitrary sequence. Returns an empty vector for `span == 0`.
pub(crate) fn ema_values(input: &[f64], span: usize) -> Vec<f64> {
    if span == 0 {
        return Vec::new();
    }

    let alpha = 2.0 / (span as f64 + 1.0);
    let mut out = Vec::with_capacity(input.len());
    let mut prev: Option<f64> = None;

    for &x in input {
        let ema = match prev {
            None => x,
            Some(p) => x * alpha + p * (1.0 - alpha),
        };
        out.push(ema);
        prev = Some(ema);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn ema_seeded_with_first_value() {
        let values = ema_values(&[10.0, 20.0, 30.0], 3);
        assert_eq!(values.len(), 3);
        assert_eq!(values[0], 10.0);
    }

    #[test]
    fn ema_recursive_calculation() {
        let values = ema_values(&[10.0, 20.0, 30.0], 3);
        let alpha = 0.5;
        let e1 = 20.0 * alpha + 10.0 * (1.0 - alpha);
        let e2 = 30.0 * alpha + e1 * (1.0 - alpha);

        assert_relative_eq!(values[1], e1);
        assert_relative_eq!(values[2], e2);
    }

    #[test]
    fn ema_equal_prices() {
        assert!(ema_values(&[100.0; 10], 4).iter().all(|&v| v == 100.0));
    }

    #[test]
    fn ema_span_1_tracks_input() {
        assert_eq!(ema_values(&[3.0, 7.0, 5.0], 1), vec![3.0, 7.0, 5.0]);
    }

    #[test]
    fn ema_empty_and_zero_span() {
        assert!(ema_values(&[], 3).is_empty());
        assert!(ema_values(&[1.0], 0).is_empty());
    }
}

//! Technical track: five sub-indicators over the closing prices.
//!
//! Fewer than [`MIN_HISTORY`] points yields the degenerate summary. Any numeric
//! fault inside a sub-indicator degrades the whole track the same way and is
//! reported as a [`Diagnostic::ComputationFault`].

use crate::domain::diagnostics::{ensure_finite, ComputationFault, Diagnostic, TrackOutcome};
use crate::domain::indicator::{
    bollinger, calculate_bollinger, calculate_macd, calculate_rsi, calculate_sma, macd,
    percent_change_over, rsi, IndicatorValue,
};
use crate::domain::ladder::{Bound, Grade, Rule, RuleLadder, Rung, ThresholdLadder};
use crate::domain::price::{PricePoint, PriceSeries};
use crate::domain::score::{Indicator, IndicatorResult, Metric, Track, TrackSummary};

pub const MIN_HISTORY: usize = 50;

pub const NEUTRAL_RSI: f64 = 50.0;
pub const MA_SHORT: usize = 20;
pub const MA_MEDIUM: usize = 50;
pub const MA_LONG: usize = 200;
/// One trading month of closes, current close included.
pub const MOMENTUM_WINDOW: usize = 22;
pub const MACD_TRANSITION_BAND: f64 = 0.001;
pub const BB_COMPRESSION_WIDTH: f64 = 8.0;
pub const BB_EXPANSION_WIDTH: f64 = 20.0;

pub const RSI_LADDER: ThresholdLadder = ThresholdLadder {
    rungs: &[
        Rung::new(Bound::Below(30.0), 5, "STRONGLY OVERSOLD - potential buy signal"),
        Rung::new(Bound::Below(40.0), 4, "OVERSOLD - moderate buying opportunity"),
        Rung::new(Bound::Below(60.0), 3, "NEUTRAL - no clear directional signal"),
        Rung::new(Bound::Below(70.0), 2, "OVERBOUGHT - caution advised"),
    ],
    floor: Grade::new(1, "STRONGLY OVERBOUGHT - potential sell signal"),
};

pub const BOLLINGER_LADDER: ThresholdLadder = ThresholdLadder {
    rungs: &[
        Rung::new(Bound::Below(0.1), 5, "STRONGLY OVERSOLD - rebound likely"),
        Rung::new(Bound::Below(0.3), 4, "MODERATELY OVERSOLD - interesting opportunity"),
        Rung::new(Bound::Below(0.7), 3, "NEUTRAL ZONE - buyers and sellers balanced"),
        Rung::new(Bound::Below(0.9), 2, "MODERATELY OVERBOUGHT - caution needed"),
    ],
    floor: Grade::new(1, "STRONGLY OVERBOUGHT - correction likely"),
};

pub const MOMENTUM_LADDER: ThresholdLadder = ThresholdLadder {
    rungs: &[
        Rung::new(Bound::AtLeast(15.0), 5, "STRONG BULLISH MOMENTUM - accelerating"),
        Rung::new(Bound::AtLeast(8.0), 4, "GOOD BULLISH MOMENTUM - sustained growth"),
        Rung::new(Bound::AtLeast(-5.0), 3, "NEUTRAL MOMENTUM - stable"),
        Rung::new(Bound::AtLeast(-8.0), 2, "BEARISH MOMENTUM - mild pressure"),
    ],
    floor: Grade::new(1, "STRONG BEARISH MOMENTUM - correction"),
};

/// Latest price and moving averages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovingAverageLevels {
    pub price: f64,
    pub ma_20: f64,
    pub ma_50: f64,
    pub ma_200: f64,
}

fn full_alignment(m: &MovingAverageLevels) -> bool {
    m.price > m.ma_20 && m.ma_20 > m.ma_50 && m.ma_50 > m.ma_200
}

fn short_alignment(m: &MovingAverageLevels) -> bool {
    m.price > m.ma_20 && m.ma_20 > m.ma_50
}

fn short_above_medium(m: &MovingAverageLevels) -> bool {
    m.ma_20 > m.ma_50
}

fn price_above_medium(m: &MovingAverageLevels) -> bool {
    m.price > m.ma_50
}

pub const MOVING_AVERAGE_LADDER: RuleLadder<MovingAverageLevels> = RuleLadder {
    rules: &[
        Rule {
            when: full_alignment,
            grade: Grade::new(5, "STRONG UPTREND - optimal alignment"),
        },
        Rule {
            when: short_alignment,
            grade: Grade::new(4, "UPTREND - positive signals"),
        },
        Rule {
            when: short_above_medium,
            grade: Grade::new(3, "NEUTRAL-POSITIVE TREND - awaiting confirmation"),
        },
        Rule {
            when: price_above_medium,
            grade: Grade::new(2, "UNCERTAIN TREND - emerging risks"),
        },
    ],
    floor: Grade::new(1, "DOWNTREND - unfavourable alignment"),
};

/// Latest MACD line, signal and histogram.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacdLevels {
    pub line: f64,
    pub signal: f64,
    pub histogram: f64,
}

fn accelerating_above_zero(m: &MacdLevels) -> bool {
    m.line > m.signal && m.histogram > 0.0 && m.line > 0.0
}

fn line_above_signal(m: &MacdLevels) -> bool {
    m.line > m.signal
}

fn near_crossover(m: &MacdLevels) -> bool {
    (m.line - m.signal).abs() < MACD_TRANSITION_BAND
}

fn decelerating_above_zero(m: &MacdLevels) -> bool {
    m.line < m.signal && m.line > 0.0
}

pub const MACD_LADDER: RuleLadder<MacdLevels> = RuleLadder {
    rules: &[
        Rule {
            when: accelerating_above_zero,
            grade: Grade::new(5, "STRONG BULLISH SIGNAL - accelerating momentum"),
        },
        Rule {
            when: line_above_signal,
            grade: Grade::new(4, "BULLISH SIGNAL - positive crossover confirmed"),
        },
        Rule {
            when: near_crossover,
            grade: Grade::new(3, "TRANSITION - potential inflection point"),
        },
        Rule {
            when: decelerating_above_zero,
            grade: Grade::new(2, "BEARISH SIGNAL - decelerating momentum"),
        },
    ],
    floor: Grade::new(1, "STRONG BEARISH SIGNAL - strong negative momentum"),
};

/// Volatility regime derived from Bollinger band width (in percent of the middle band).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolatilityRegime {
    Compression,
    Normal,
    Expansion,
}

impl VolatilityRegime {
    pub fn from_width(width: f64) -> Self {
        if width < BB_COMPRESSION_WIDTH {
            VolatilityRegime::Compression
        } else if width > BB_EXPANSION_WIDTH {
            VolatilityRegime::Expansion
        } else {
            VolatilityRegime::Normal
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            VolatilityRegime::Compression => "LOW VOLATILITY (compression, move imminent)",
            VolatilityRegime::Normal => "NORMAL VOLATILITY (normal)",
            VolatilityRegime::Expansion => "HIGH VOLATILITY (expansion, move under way)",
        }
    }
}

/// Score the technical track of a price series.
pub fn score_technical(series: &PriceSeries) -> TrackOutcome {
    if series.len() < MIN_HISTORY {
        return TrackOutcome::degenerate(Diagnostic::InsufficientHistory {
            points: series.len(),
            required: MIN_HISTORY,
        });
    }

    match technical_results(series.points()) {
        Ok(results) => TrackOutcome::scored(TrackSummary::from_results(results), Vec::new()),
        Err(fault) => TrackOutcome::faulted(Track::Technical, fault),
    }
}

fn technical_results(
    points: &[PricePoint],
) -> Result<Vec<(Indicator, IndicatorResult)>, ComputationFault> {
    let price = points.last().map(|p| p.close).ok_or(ComputationFault::Undefined {
        indicator: Indicator::MovingAverages,
        reason: "empty price series",
    })?;
    let price = ensure_finite(Indicator::MovingAverages, "price", price)?;

    Ok(vec![
        (Indicator::Rsi, rsi_result(points)?),
        (Indicator::MovingAverages, moving_average_result(points, price)?),
        (Indicator::Macd, macd_result(points)?),
        (Indicator::BollingerBands, bollinger_result(points, price)?),
        (Indicator::Momentum, momentum_result(points)?),
    ])
}

fn rsi_result(points: &[PricePoint]) -> Result<IndicatorResult, ComputationFault> {
    let value = calculate_rsi(points, rsi::DEFAULT_PERIOD)
        .latest_simple()
        .unwrap_or(NEUTRAL_RSI);
    let value = ensure_finite(Indicator::Rsi, "rsi", value)?;
    let grade = RSI_LADDER.grade(value);

    Ok(IndicatorResult {
        metric: Metric::Rsi { value },
        score: grade.score,
        signal: grade.signal.to_string(),
    })
}

fn latest_sma(points: &[PricePoint], period: usize) -> Result<f64, ComputationFault> {
    let value = calculate_sma(points, period)
        .latest_simple()
        .ok_or(ComputationFault::Undefined {
            indicator: Indicator::MovingAverages,
            reason: "not enough points for the averaging window",
        })?;
    ensure_finite(Indicator::MovingAverages, "moving average", value)
}

fn moving_average_result(
    points: &[PricePoint],
    price: f64,
) -> Result<IndicatorResult, ComputationFault> {
    let ma_20 = latest_sma(points, MA_SHORT)?;
    let ma_50 = latest_sma(points, MA_MEDIUM)?;
    let ma_200 = if points.len() >= MA_LONG {
        latest_sma(points, MA_LONG)?
    } else {
        ma_50
    };

    if ma_20 == 0.0 {
        return Err(ComputationFault::Undefined {
            indicator: Indicator::MovingAverages,
            reason: "zero 20 day average",
        });
    }

    let levels = MovingAverageLevels {
        price,
        ma_20,
        ma_50,
        ma_200,
    };
    let grade = MOVING_AVERAGE_LADDER.grade(&levels);

    Ok(IndicatorResult {
        metric: Metric::MovingAverages {
            price,
            ma_20,
            ma_50,
            ma_200,
            price_vs_ma20: (price - ma_20) / ma_20 * 100.0,
            golden_cross: ma_20 > ma_50,
        },
        score: grade.score,
        signal: grade.signal.to_string(),
    })
}

fn macd_result(points: &[PricePoint]) -> Result<IndicatorResult, ComputationFault> {
    let series = calculate_macd(
        points,
        macd::DEFAULT_FAST,
        macd::DEFAULT_SLOW,
        macd::DEFAULT_SIGNAL,
    );
    let levels = match series.latest() {
        Some(IndicatorValue::Macd {
            line,
            signal,
            histogram,
        }) => MacdLevels {
            line: ensure_finite(Indicator::Macd, "line", *line)?,
            signal: ensure_finite(Indicator::Macd, "signal", *signal)?,
            histogram: ensure_finite(Indicator::Macd, "histogram", *histogram)?,
        },
        _ => {
            return Err(ComputationFault::Undefined {
                indicator: Indicator::Macd,
                reason: "no MACD value",
            });
        }
    };
    let grade = MACD_LADDER.grade(&levels);

    Ok(IndicatorResult {
        metric: Metric::Macd {
            line: levels.line,
            signal: levels.signal,
            histogram: levels.histogram,
        },
        score: grade.score,
        signal: grade.signal.to_string(),
    })
}

fn bollinger_result(
    points: &[PricePoint],
    price: f64,
) -> Result<IndicatorResult, ComputationFault> {
    let series = calculate_bollinger(
        points,
        bollinger::DEFAULT_PERIOD,
        bollinger::DEFAULT_MULT_X100,
    );
    let (upper, middle, lower) = match series.latest() {
        Some(IndicatorValue::Bollinger {
            upper,
            middle,
            lower,
        }) => (*upper, *middle, *lower),
        _ => {
            return Err(ComputationFault::Undefined {
                indicator: Indicator::BollingerBands,
                reason: "no band value",
            });
        }
    };

    let span = upper - lower;
    if span == 0.0 {
        return Err(ComputationFault::Undefined {
            indicator: Indicator::BollingerBands,
            reason: "zero band width",
        });
    }
    if middle == 0.0 {
        return Err(ComputationFault::Undefined {
            indicator: Indicator::BollingerBands,
            reason: "zero middle band",
        });
    }

    // Not clamped: price outside the bands gives a position below 0 or above 1.
    let position = ensure_finite(Indicator::BollingerBands, "position", (price - lower) / span)?;
    let width = ensure_finite(Indicator::BollingerBands, "width", span / middle * 100.0)?;

    let grade = BOLLINGER_LADDER.grade(position);
    let regime = VolatilityRegime::from_width(width);

    Ok(IndicatorResult {
        metric: Metric::BollingerBands {
            upper,
            middle,
            lower,
            position,
            width,
        },
        score: grade.score,
        signal: format!("{} | {}", grade.signal, regime.label()),
    })
}

fn momentum_result(points: &[PricePoint]) -> Result<IndicatorResult, ComputationFault> {
    let change_pct = percent_change_over(points, MOMENTUM_WINDOW).ok_or(
        ComputationFault::Undefined {
            indicator: Indicator::Momentum,
            reason: "zero reference close",
        },
    )?;
    let change_pct = ensure_finite(Indicator::Momentum, "change", change_pct)?;
    let grade = MOMENTUM_LADDER.grade(change_pct);

    Ok(IndicatorResult {
        metric: Metric::Momentum { change_pct },
        score: grade.score,
        signal: grade.signal.to_string(),
    })
}

//! Scored indicator results and per-track summaries.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

use crate::domain::indicator::{bollinger, macd, rsi, IndicatorType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Track {
    Technical,
    Fundamental,
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Track::Technical => write!(f, "technical"),
            Track::Fundamental => write!(f, "fundamental"),
        }
    }
}

/// Identity of a sub-indicator. Serialises to its snake_case key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Indicator {
    Rsi,
    MovingAverages,
    Macd,
    BollingerBands,
    Momentum,
    PeRatio,
    DividendYield,
    Roe,
    RevenueGrowth,
    DebtToEquity,
}

impl Indicator {
    pub const TECHNICAL: [Indicator; 5] = [
        Indicator::Rsi,
        Indicator::MovingAverages,
        Indicator::Macd,
        Indicator::BollingerBands,
        Indicator::Momentum,
    ];

    pub const FUNDAMENTAL: [Indicator; 5] = [
        Indicator::PeRatio,
        Indicator::DividendYield,
        Indicator::Roe,
        Indicator::RevenueGrowth,
        Indicator::DebtToEquity,
    ];

    pub fn track(self) -> Track {
        if Self::TECHNICAL.contains(&self) {
            Track::Technical
        } else {
            Track::Fundamental
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Indicator::Rsi => "rsi",
            Indicator::MovingAverages => "moving_averages",
            Indicator::Macd => "macd",
            Indicator::BollingerBands => "bollinger_bands",
            Indicator::Momentum => "momentum",
            Indicator::PeRatio => "pe_ratio",
            Indicator::DividendYield => "dividend_yield",
            Indicator::Roe => "roe",
            Indicator::RevenueGrowth => "revenue_growth",
            Indicator::DebtToEquity => "debt_to_equity",
        }
    }

    pub fn name(self) -> String {
        match self {
            Indicator::Rsi => IndicatorType::Rsi(rsi::DEFAULT_PERIOD).to_string(),
            Indicator::MovingAverages => "Moving averages (20/50/200)".to_string(),
            Indicator::Macd => IndicatorType::Macd {
                fast: macd::DEFAULT_FAST,
                slow: macd::DEFAULT_SLOW,
                signal: macd::DEFAULT_SIGNAL,
            }
            .to_string(),
            Indicator::BollingerBands => IndicatorType::Bollinger {
                period: bollinger::DEFAULT_PERIOD,
                stddev_mult_x100: bollinger::DEFAULT_MULT_X100,
            }
            .to_string(),
            Indicator::Momentum => "Momentum (1 month)".to_string(),
            Indicator::PeRatio => "P/E ratio".to_string(),
            Indicator::DividendYield => "Dividend yield".to_string(),
            Indicator::Roe => "Return on equity".to_string(),
            Indicator::RevenueGrowth => "Revenue growth".to_string(),
            Indicator::DebtToEquity => "Debt to equity".to_string(),
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Indicator::Rsi => "Momentum oscillator comparing recent gains to recent losses",
            Indicator::MovingAverages => "Trend alignment of price against its 20, 50 and 200 day averages",
            Indicator::Macd => "Difference of the 12 and 26 day EMAs against its 9 day signal line",
            Indicator::BollingerBands => "Position of price inside a 2 sigma envelope around the 20 day average",
            Indicator::Momentum => "Price change over one trading month (22 sessions)",
            Indicator::PeRatio => "Price paid per unit of earnings",
            Indicator::DividendYield => "Annual dividend as a percentage of price",
            Indicator::Roe => "Net income relative to shareholder equity",
            Indicator::RevenueGrowth => "Year over year change in revenue",
            Indicator::DebtToEquity => "Total debt relative to shareholder equity",
        }
    }
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A single displayable field of a metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MetricValue {
    Number(f64),
    Flag(bool),
}

/// Measured value(s) behind a sub-score. Units are fixed per field: percentages
/// are already scaled by 100, ratios are raw, amounts are in listing currency.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Metric {
    Rsi {
        value: f64,
    },
    MovingAverages {
        price: f64,
        ma_20: f64,
        ma_50: f64,
        ma_200: f64,
        price_vs_ma20: f64,
        golden_cross: bool,
    },
    Macd {
        line: f64,
        signal: f64,
        histogram: f64,
    },
    BollingerBands {
        upper: f64,
        middle: f64,
        lower: f64,
        position: f64,
        width: f64,
    },
    Momentum {
        change_pct: f64,
    },
    PeRatio {
        value: f64,
    },
    DividendYield {
        yield_pct: f64,
        rate: f64,
    },
    Roe {
        pct: f64,
    },
    RevenueGrowth {
        pct: f64,
        total_revenue: f64,
    },
    DebtToEquity {
        ratio: f64,
        total_debt: f64,
    },
}

impl Metric {
    /// Flat display fields, keyed by their report names.
    pub fn fields(&self) -> Vec<(&'static str, MetricValue)> {
        use MetricValue::{Flag, Number};
        match *self {
            Metric::Rsi { value } => vec![("rsi", Number(value))],
            Metric::MovingAverages {
                price,
                ma_20,
                ma_50,
                ma_200,
                price_vs_ma20,
                golden_cross,
            } => vec![
                ("current_price", Number(price)),
                ("ma_20", Number(ma_20)),
                ("ma_50", Number(ma_50)),
                ("ma_200", Number(ma_200)),
                ("price_vs_ma20", Number(price_vs_ma20)),
                ("golden_cross", Flag(golden_cross)),
            ],
            Metric::Macd {
                line,
                signal,
                histogram,
            } => vec![
                ("macd_line", Number(line)),
                ("macd_signal", Number(signal)),
                ("macd_histogram", Number(histogram)),
            ],
            Metric::BollingerBands {
                upper,
                middle,
                lower,
                position,
                width,
            } => vec![
                ("bb_position", Number(position)),
                ("bb_width", Number(width)),
                ("bb_upper", Number(upper)),
                ("bb_lower", Number(lower)),
                ("bb_middle", Number(middle)),
            ],
            Metric::Momentum { change_pct } => vec![("price_change_1m", Number(change_pct))],
            Metric::PeRatio { value } => vec![("pe_ratio", Number(value))],
            Metric::DividendYield { yield_pct, rate } => vec![
                ("dividend_yield", Number(yield_pct)),
                ("dividend_rate", Number(rate)),
            ],
            Metric::Roe { pct } => vec![("roe", Number(pct))],
            Metric::RevenueGrowth { pct, total_revenue } => vec![
                ("revenue_growth", Number(pct)),
                ("total_revenue", Number(total_revenue)),
            ],
            Metric::DebtToEquity { ratio, total_debt } => vec![
                ("debt_to_equity", Number(ratio)),
                ("total_debt", Number(total_debt)),
            ],
        }
    }
}

/// Outcome of one sub-indicator. `score` is always in 1..=5.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorResult {
    pub metric: Metric,
    pub score: u8,
    pub signal: String,
}

/// Aggregate of one analysis track.
///
/// A degenerate summary has `total_score == 0.0` and empty maps; it stands for
/// "no usable data" and keeps the weighted aggregation well defined.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackSummary {
    pub total_score: f64,
    pub sub_scores: BTreeMap<Indicator, u8>,
    pub metrics: BTreeMap<Indicator, Metric>,
    pub signals: BTreeMap<Indicator, String>,
}

impl TrackSummary {
    pub fn degenerate() -> Self {
        Self {
            total_score: 0.0,
            sub_scores: BTreeMap::new(),
            metrics: BTreeMap::new(),
            signals: BTreeMap::new(),
        }
    }

    /// Build a summary whose total is the unweighted mean of the sub-scores.
    pub fn from_results(results: Vec<(Indicator, IndicatorResult)>) -> Self {
        if results.is_empty() {
            return Self::degenerate();
        }

        let count = results.len() as f64;
        let mut summary = Self::degenerate();
        let mut sum = 0u32;

        for (indicator, result) in results {
            sum += u32::from(result.score);
            summary.sub_scores.insert(indicator, result.score);
            summary.metrics.insert(indicator, result.metric);
            summary.signals.insert(indicator, result.signal);
        }

        summary.total_score = f64::from(sum) / count;
        summary
    }

    pub fn is_degenerate(&self) -> bool {
        self.sub_scores.is_empty()
    }
}

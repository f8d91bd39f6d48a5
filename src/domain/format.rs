//! Display helpers shared by the report renderers.

use serde::Serialize;
use std::fmt;

/// Metric fields already expressed in percent.
const PERCENT_FIELDS: &[&str] = &[
    "dividend_yield",
    "roe",
    "revenue_growth",
    "price_vs_ma20",
    "price_change_1m",
];

/// Decimal places a metric field is shown with. `None` for fields without a
/// fixed precision.
pub fn display_decimals(field: &str) -> Option<usize> {
    match field {
        "rsi" | "price_vs_ma20" | "price_change_1m" | "pe_ratio" | "roe" | "revenue_growth"
        | "bb_width" => Some(1),
        "macd_line" | "macd_signal" | "macd_histogram" => Some(4),
        "bb_position" => Some(3),
        "dividend_yield" | "dividend_rate" | "debt_to_equity" | "ma_20" | "ma_50" | "ma_200"
        | "bb_upper" | "bb_middle" | "bb_lower" | "current_price" => Some(2),
        _ => None,
    }
}

/// A numeric metric field as shown in reports.
pub fn format_metric(field: &str, value: f64) -> String {
    match (field, display_decimals(field)) {
        ("total_revenue" | "total_debt", _) => format_currency(value),
        (_, Some(decimals)) if PERCENT_FIELDS.contains(&field) => {
            format_percentage(value, decimals)
        }
        (_, Some(decimals)) => format!("{:.*}", decimals, value),
        (_, None) => format_number(value),
    }
}

/// Euro amount with a B/M/K suffix.
pub fn format_currency(value: f64) -> String {
    if value >= 1e9 {
        format!("€{:.2}B", value / 1e9)
    } else if value >= 1e6 {
        format!("€{:.2}M", value / 1e6)
    } else if value >= 1e3 {
        format!("€{:.2}K", value / 1e3)
    } else {
        format!("€{:.2}", value)
    }
}

pub fn format_percentage(value: f64, decimals: usize) -> String {
    format!("{:.*}%", decimals, value)
}

/// Fewer decimals as the magnitude grows.
pub fn format_number(value: f64) -> String {
    let magnitude = value.abs();
    if value == 0.0 {
        "0".to_string()
    } else if magnitude < 0.01 {
        format!("{:.6}", value)
    } else if magnitude < 0.1 {
        format!("{:.4}", value)
    } else if magnitude < 1.0 {
        format!("{:.3}", value)
    } else if magnitude < 10.0 {
        format!("{:.2}", value)
    } else if magnitude < 100.0 {
        format!("{:.1}", value)
    } else {
        format!("{:.0}", value)
    }
}

/// Colour bucket for a 0..=5 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreColor {
    Green,
    Orange,
    Yellow,
    Red,
}

impl ScoreColor {
    pub fn for_score(score: f64) -> Self {
        if score >= 4.0 {
            ScoreColor::Green
        } else if score >= 3.0 {
            ScoreColor::Orange
        } else if score >= 2.0 {
            ScoreColor::Yellow
        } else {
            ScoreColor::Red
        }
    }
}

impl fmt::Display for ScoreColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreColor::Green => write!(f, "green"),
            ScoreColor::Orange => write!(f, "orange"),
            ScoreColor::Yellow => write!(f, "yellow"),
            ScoreColor::Red => write!(f, "red"),
        }
    }
}

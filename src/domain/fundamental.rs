//! Fundamental track: five sub-indicators over a financial snapshot.
//!
//! Absent fields score as zero. A dividend yield above [`DIVIDEND_YIELD_ANOMALY`]
//! is treated as bad data: it is clamped to [`DIVIDEND_YIELD_CLAMP`] and reported
//! as a [`Diagnostic::AnomalousMetric`].

use crate::domain::diagnostics::{ensure_finite, ComputationFault, Diagnostic, TrackOutcome};
use crate::domain::ladder::{Bound, Grade, Rung, ThresholdLadder};
use crate::domain::score::{Indicator, IndicatorResult, Metric, Track, TrackSummary};
use crate::domain::snapshot::FinancialSnapshot;

pub const DIVIDEND_YIELD_ANOMALY: f64 = 20.0;
pub const DIVIDEND_YIELD_CLAMP: f64 = 10.0;

pub const PE_LADDER: ThresholdLadder = ThresholdLadder {
    rungs: &[
        Rung::new(Bound::AtMost(15.0), 5, "UNDERVALUED - attractive valuation"),
        Rung::new(Bound::AtMost(20.0), 4, "REASONABLE VALUATION - fair price"),
        Rung::new(Bound::AtMost(25.0), 3, "NEUTRAL VALUATION - in line with average"),
        Rung::new(Bound::AtMost(30.0), 2, "MODERATELY OVERVALUED - caution"),
    ],
    floor: Grade::new(1, "STRONGLY OVERVALUED - correction risk"),
};

pub const DIVIDEND_LADDER: ThresholdLadder = ThresholdLadder {
    rungs: &[
        Rung::new(Bound::AtLeast(5.0), 5, "HIGH YIELD - very attractive"),
        Rung::new(Bound::AtLeast(3.0), 4, "GOOD YIELD - interesting"),
        Rung::new(Bound::AtLeast(1.5), 3, "MODEST YIELD - acceptable"),
        Rung::new(Bound::AtLeast(0.5), 2, "LOW YIELD - unattractive"),
    ],
    floor: Grade::new(1, "NEGLIGIBLE YIELD - growth profile"),
};

pub const ROE_LADDER: ThresholdLadder = ThresholdLadder {
    rungs: &[
        Rung::new(Bound::AtLeast(20.0), 5, "EXCELLENT PROFITABILITY - efficient management"),
        Rung::new(Bound::AtLeast(15.0), 4, "GOOD PROFITABILITY - solid performance"),
        Rung::new(Bound::AtLeast(10.0), 3, "AVERAGE PROFITABILITY - within norms"),
        Rung::new(Bound::AtLeast(5.0), 2, "WEAK PROFITABILITY - improvement needed"),
    ],
    floor: Grade::new(1, "INSUFFICIENT PROFITABILITY - structural problem"),
};

pub const REVENUE_GROWTH_LADDER: ThresholdLadder = ThresholdLadder {
    rungs: &[
        Rung::new(Bound::AtLeast(15.0), 5, "STRONG GROWTH - rapid expansion"),
        Rung::new(Bound::AtLeast(8.0), 4, "GOOD GROWTH - healthy development"),
        Rung::new(Bound::AtLeast(0.0), 3, "MODEST GROWTH - stability"),
        Rung::new(Bound::AtLeast(-5.0), 2, "MODERATE DECLINE - temporary difficulties"),
    ],
    floor: Grade::new(1, "STRONG DECLINE - structural problems"),
};

// Raw ratio thresholds, unlike the percentage-scaled ROE and growth ladders.
pub const DEBT_TO_EQUITY_LADDER: ThresholdLadder = ThresholdLadder {
    rungs: &[
        Rung::new(Bound::AtMost(0.5), 5, "LOW LEVERAGE - healthy structure"),
        Rung::new(Bound::AtMost(1.0), 4, "MODERATE LEVERAGE - prudent management"),
        Rung::new(Bound::AtMost(2.0), 3, "AVERAGE LEVERAGE - within norms"),
        Rung::new(Bound::AtMost(3.0), 2, "HIGH LEVERAGE - monitoring required"),
    ],
    floor: Grade::new(1, "VERY HIGH LEVERAGE - financial risk"),
};

/// Score the fundamental track of a financial snapshot.
pub fn score_fundamental(snapshot: &FinancialSnapshot) -> TrackOutcome {
    let mut diagnostics = Vec::new();
    match fundamental_results(snapshot, &mut diagnostics) {
        Ok(results) => TrackOutcome::scored(TrackSummary::from_results(results), diagnostics),
        Err(fault) => TrackOutcome::faulted(Track::Fundamental, fault),
    }
}

fn fundamental_results(
    snapshot: &FinancialSnapshot,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<Vec<(Indicator, IndicatorResult)>, ComputationFault> {
    Ok(vec![
        (Indicator::PeRatio, pe_result(snapshot)?),
        (Indicator::DividendYield, dividend_result(snapshot, diagnostics)?),
        (Indicator::Roe, roe_result(snapshot)?),
        (Indicator::RevenueGrowth, revenue_growth_result(snapshot)?),
        (Indicator::DebtToEquity, debt_to_equity_result(snapshot)?),
    ])
}

fn graded(metric: Metric, grade: Grade) -> IndicatorResult {
    IndicatorResult {
        metric,
        score: grade.score,
        signal: grade.signal.to_string(),
    }
}

fn pe_result(snapshot: &FinancialSnapshot) -> Result<IndicatorResult, ComputationFault> {
    let value = ensure_finite(Indicator::PeRatio, "pe_ratio", snapshot.pe_ratio())?;
    Ok(graded(Metric::PeRatio { value }, PE_LADDER.grade(value)))
}

fn dividend_result(
    snapshot: &FinancialSnapshot,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<IndicatorResult, ComputationFault> {
    let raw = ensure_finite(
        Indicator::DividendYield,
        "dividend_yield",
        snapshot.dividend_yield(),
    )?;
    let rate = ensure_finite(
        Indicator::DividendYield,
        "dividend_rate",
        snapshot.dividend_rate(),
    )?;

    let yield_pct = if raw > DIVIDEND_YIELD_ANOMALY {
        let clamped = raw.min(DIVIDEND_YIELD_CLAMP);
        diagnostics.push(Diagnostic::AnomalousMetric {
            indicator: Indicator::DividendYield,
            raw,
            clamped,
        });
        clamped
    } else {
        raw
    };

    Ok(graded(
        Metric::DividendYield { yield_pct, rate },
        DIVIDEND_LADDER.grade(yield_pct),
    ))
}

fn roe_result(snapshot: &FinancialSnapshot) -> Result<IndicatorResult, ComputationFault> {
    let pct = ensure_finite(
        Indicator::Roe,
        "return_on_equity",
        snapshot.return_on_equity() * 100.0,
    )?;
    Ok(graded(Metric::Roe { pct }, ROE_LADDER.grade(pct)))
}

fn revenue_growth_result(
    snapshot: &FinancialSnapshot,
) -> Result<IndicatorResult, ComputationFault> {
    let pct = ensure_finite(
        Indicator::RevenueGrowth,
        "revenue_growth",
        snapshot.revenue_growth() * 100.0,
    )?;
    let total_revenue = ensure_finite(
        Indicator::RevenueGrowth,
        "total_revenue",
        snapshot.total_revenue(),
    )?;
    Ok(graded(
        Metric::RevenueGrowth { pct, total_revenue },
        REVENUE_GROWTH_LADDER.grade(pct),
    ))
}

fn debt_to_equity_result(
    snapshot: &FinancialSnapshot,
) -> Result<IndicatorResult, ComputationFault> {
    let ratio = ensure_finite(
        Indicator::DebtToEquity,
        "debt_to_equity",
        snapshot.debt_to_equity(),
    )?;
    let total_debt = ensure_finite(Indicator::DebtToEquity, "total_debt", snapshot.total_debt())?;
    Ok(graded(
        Metric::DebtToEquity { ratio, total_debt },
        DEBT_TO_EQUITY_LADDER.grade(ratio),
    ))
}

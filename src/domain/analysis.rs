//! End-to-end analysis of one configured company.
//!
//! Fetches market data through a [`ProviderPort`], scores both tracks, derives
//! the recommendation and assembles the report. Only unknown companies and
//! provider failures are errors; everything else ends up in the diagnostics.

use chrono::NaiveDateTime;
use tracing::{info, warn};

use crate::domain::company::{CompanyDirectory, CompanyProfile};
use crate::domain::error::EquiscoreError;
use crate::domain::fundamental::score_fundamental;
use crate::domain::recommendation::recommend;
use crate::domain::report::{assemble_report, AnalysisResult};
use crate::domain::technical::score_technical;
use crate::ports::provider_port::{MarketData, ProviderPort};

/// Analyse the company registered under `company` in `directory`.
pub fn run_analysis(
    directory: &CompanyDirectory,
    provider: &dyn ProviderPort,
    company: &str,
    generated_at: NaiveDateTime,
) -> Result<AnalysisResult, EquiscoreError> {
    let profile = directory.get(company)?;
    analyze_profile(profile, provider, generated_at)
}

pub fn analyze_profile(
    profile: &CompanyProfile,
    provider: &dyn ProviderPort,
    generated_at: NaiveDateTime,
) -> Result<AnalysisResult, EquiscoreError> {
    info!(company = %profile.name, ticker = %profile.ticker, "starting analysis");

    let data = provider.fetch(&profile.ticker).map_err(|e| {
        warn!(ticker = %profile.ticker, error = %e, "provider failed");
        match e {
            EquiscoreError::DataUnavailable { .. } => e,
            other => EquiscoreError::DataUnavailable {
                ticker: profile.ticker.clone(),
                reason: other.to_string(),
            },
        }
    })?;

    if data.series.is_empty() {
        warn!(ticker = %profile.ticker, "provider returned no prices");
        return Err(EquiscoreError::DataUnavailable {
            ticker: profile.ticker.clone(),
            reason: "empty price series".to_string(),
        });
    }

    Ok(score_market_data(profile, data, generated_at))
}

fn score_market_data(
    profile: &CompanyProfile,
    data: MarketData,
    generated_at: NaiveDateTime,
) -> AnalysisResult {
    let fundamental = score_fundamental(&data.snapshot);
    let technical = score_technical(&data.series);
    let recommendation = recommend(
        fundamental.summary.total_score,
        technical.summary.total_score,
    );

    let result = assemble_report(profile, fundamental, technical, recommendation, generated_at);
    for diagnostic in &result.diagnostics {
        warn!(ticker = %profile.ticker, "{}", diagnostic);
    }
    info!(
        ticker = %profile.ticker,
        fundamental = result.fundamental.total_score,
        technical = result.technical.total_score,
        weighted = result.recommendation.weighted_total,
        category = %result.recommendation.category,
        "analysis complete"
    );
    result
}

//! Self-contained analysis record handed to the presentation layer.

use chrono::NaiveDateTime;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::company::CompanyProfile;
use crate::domain::diagnostics::{Diagnostic, TrackOutcome};
use crate::domain::recommendation::Recommendation;
use crate::domain::score::{Indicator, MetricValue, Track, TrackSummary};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    #[serde(flatten)]
    pub company: CompanyProfile,
    pub generated_at: NaiveDateTime,
    /// Last close, or 0 when the technical track is degenerate.
    pub current_price: f64,
    pub fundamental: TrackSummary,
    pub technical: TrackSummary,
    pub recommendation: Recommendation,
    /// Every metric field of both tracks under its display name.
    pub metrics: BTreeMap<&'static str, MetricValue>,
    pub diagnostics: Vec<Diagnostic>,
}

impl AnalysisResult {
    pub fn track(&self, indicator: Indicator) -> &TrackSummary {
        match indicator.track() {
            Track::Technical => &self.technical,
            Track::Fundamental => &self.fundamental,
        }
    }

    pub fn sub_score(&self, indicator: Indicator) -> Option<u8> {
        self.track(indicator).sub_scores.get(&indicator).copied()
    }

    pub fn signal(&self, indicator: Indicator) -> Option<&str> {
        self.track(indicator)
            .signals
            .get(&indicator)
            .map(String::as_str)
    }

    pub fn metric(&self, field: &str) -> Option<MetricValue> {
        self.metrics.get(field).copied()
    }
}

/// Flatten both tracks' metrics into one map keyed by display name.
pub fn flat_metrics(
    fundamental: &TrackSummary,
    technical: &TrackSummary,
) -> BTreeMap<&'static str, MetricValue> {
    fundamental
        .metrics
        .values()
        .chain(technical.metrics.values())
        .flat_map(|metric| metric.fields())
        .collect()
}

pub fn assemble_report(
    company: &CompanyProfile,
    fundamental: TrackOutcome,
    technical: TrackOutcome,
    recommendation: Recommendation,
    generated_at: NaiveDateTime,
) -> AnalysisResult {
    let metrics = flat_metrics(&fundamental.summary, &technical.summary);
    let current_price = match metrics.get("current_price") {
        Some(MetricValue::Number(price)) => *price,
        _ => 0.0,
    };

    let mut diagnostics = fundamental.diagnostics;
    diagnostics.extend(technical.diagnostics);

    AnalysisResult {
        company: company.clone(),
        generated_at,
        current_price,
        fundamental: fundamental.summary,
        technical: technical.summary,
        recommendation,
        metrics,
        diagnostics,
    }
}

//! Plain-text report adapter implementing ReportPort.

use std::fmt::Write;

use crate::domain::error::EquiscoreError;
use crate::domain::format::{format_currency, format_metric, ScoreColor};
use crate::domain::report::AnalysisResult;
use crate::domain::score::{Indicator, MetricValue, TrackSummary};
use crate::ports::report_port::ReportPort;

const RULE: &str = "------------------------------------------------------------";

#[derive(Debug, Default, Clone, Copy)]
pub struct TextReportAdapter;

impl TextReportAdapter {
    pub fn new() -> Self {
        Self
    }
}

fn format_field(field: &str, value: MetricValue) -> String {
    match value {
        MetricValue::Flag(true) => "yes".to_string(),
        MetricValue::Flag(false) => "no".to_string(),
        MetricValue::Number(v) => format_metric(field, v),
    }
}

fn write_track(
    out: &mut String,
    title: &str,
    summary: &TrackSummary,
    indicators: &[Indicator],
) -> std::fmt::Result {
    writeln!(
        out,
        "{} {:.2}/5 [{}]",
        title,
        summary.total_score,
        ScoreColor::for_score(summary.total_score)
    )?;
    writeln!(out, "{}", RULE)?;

    if summary.is_degenerate() {
        writeln!(out, "  no usable data")?;
        return Ok(());
    }

    for indicator in indicators {
        let (Some(score), Some(metric)) = (
            summary.sub_scores.get(indicator),
            summary.metrics.get(indicator),
        ) else {
            continue;
        };
        writeln!(out, "  {:<28} {}/5", indicator.name(), score)?;

        let fields: Vec<String> = metric
            .fields()
            .into_iter()
            .map(|(name, value)| format!("{}={}", name, format_field(name, value)))
            .collect();
        writeln!(out, "      {}", fields.join("  "))?;

        if let Some(signal) = summary.signals.get(indicator) {
            writeln!(out, "      {}", signal)?;
        }
    }
    Ok(())
}

fn render_text(result: &AnalysisResult) -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    let company = &result.company;
    let rec = &result.recommendation;

    writeln!(out, "{} ({})", company.name, company.ticker)?;
    writeln!(out, "{}", company.description)?;
    writeln!(
        out,
        "Analyst: {}    Generated: {}",
        company.analyst,
        result.generated_at.format("%Y-%m-%d %H:%M:%S")
    )?;
    writeln!(out, "Current price: {}", format_currency(result.current_price))?;
    writeln!(out)?;

    writeln!(
        out,
        "Recommendation: {}  (weighted score {:.2}/5 [{}])",
        rec.category,
        rec.weighted_total,
        ScoreColor::for_score(rec.weighted_total)
    )?;
    writeln!(out, "  {}", rec.justification)?;
    writeln!(out)?;

    write_track(
        &mut out,
        "Fundamental analysis",
        &result.fundamental,
        &Indicator::FUNDAMENTAL,
    )?;
    writeln!(out)?;
    write_track(
        &mut out,
        "Technical analysis",
        &result.technical,
        &Indicator::TECHNICAL,
    )?;

    if !result.diagnostics.is_empty() {
        writeln!(out)?;
        writeln!(out, "Diagnostics")?;
        for diagnostic in &result.diagnostics {
            writeln!(out, "  - {}", diagnostic)?;
        }
    }
    Ok(out)
}

impl ReportPort for TextReportAdapter {
    fn render(&self, result: &AnalysisResult) -> Result<String, EquiscoreError> {
        render_text(result).map_err(|e| EquiscoreError::Report {
            reason: e.to_string(),
        })
    }
}

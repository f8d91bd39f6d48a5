//! Non-fatal findings reported alongside a scored result.

use serde::Serialize;
use std::fmt;

use crate::domain::score::{Indicator, Track, TrackSummary};

/// Numeric fault inside a scorer. Caught at the track boundary.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ComputationFault {
    #[error("{indicator} is undefined: {reason}")]
    Undefined {
        indicator: Indicator,
        reason: &'static str,
    },

    #[error("{indicator} produced a non-finite value ({field})")]
    NonFinite {
        indicator: Indicator,
        field: &'static str,
    },
}

/// Reject NaN and infinities produced while computing `indicator`.
pub fn ensure_finite(
    indicator: Indicator,
    field: &'static str,
    value: f64,
) -> Result<f64, ComputationFault> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ComputationFault::NonFinite { indicator, field })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// Price history too short for the technical track.
    InsufficientHistory { points: usize, required: usize },
    /// A financial field outside plausible bounds was clamped before scoring.
    AnomalousMetric {
        indicator: Indicator,
        raw: f64,
        clamped: f64,
    },
    /// A numeric fault degraded a whole track to its degenerate form.
    ComputationFault { track: Track, reason: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::InsufficientHistory { points, required } => write!(
                f,
                "insufficient price history: {} points, {} required",
                points, required
            ),
            Diagnostic::AnomalousMetric {
                indicator,
                raw,
                clamped,
            } => write!(
                f,
                "anomalous {} value {} clamped to {}",
                indicator, raw, clamped
            ),
            Diagnostic::ComputationFault { track, reason } => {
                write!(f, "{} track degraded: {}", track, reason)
            }
        }
    }
}

/// A track summary plus whatever was noticed while producing it.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackOutcome {
    pub summary: TrackSummary,
    pub diagnostics: Vec<Diagnostic>,
}

impl TrackOutcome {
    pub fn scored(summary: TrackSummary, diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            summary,
            diagnostics,
        }
    }

    pub fn degenerate(diagnostic: Diagnostic) -> Self {
        Self {
            summary: TrackSummary::degenerate(),
            diagnostics: vec![diagnostic],
        }
    }

    pub fn faulted(track: Track, fault: ComputationFault) -> Self {
        Self::degenerate(Diagnostic::ComputationFault {
            track,
            reason: fault.to_string(),
        })
    }
}

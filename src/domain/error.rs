//! Domain error types.

/// Top-level error type for equiscore.
///
/// Only conditions that leave no meaningful result surface here. Short price
/// history, anomalous financial fields and numeric faults inside a scorer are
/// reported as [`Diagnostic`](crate::domain::diagnostics::Diagnostic)s instead.
#[derive(Debug, thiserror::Error)]
pub enum EquiscoreError {
    #[error("data unavailable for {ticker}: {reason}")]
    DataUnavailable { ticker: String, reason: String },

    #[error("unknown company: {name}")]
    UnknownCompany { name: String },

    #[error("invalid price series: {reason}")]
    InvalidSeries { reason: String },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("report rendering failed: {reason}")]
    Report { reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&EquiscoreError> for std::process::ExitCode {
    fn from(err: &EquiscoreError) -> Self {
        let code: u8 = match err {
            EquiscoreError::Io(_) | EquiscoreError::Report { .. } => 1,
            EquiscoreError::ConfigParse { .. }
            | EquiscoreError::ConfigMissing { .. }
            | EquiscoreError::ConfigInvalid { .. } => 2,
            EquiscoreError::UnknownCompany { .. } => 3,
            EquiscoreError::DataUnavailable { .. } | EquiscoreError::InvalidSeries { .. } => 5,
        };
        std::process::ExitCode::from(code)
    }
}

//! JSON report adapter implementing ReportPort.

use crate::domain::error::EquiscoreError;
use crate::domain::report::AnalysisResult;
use crate::ports::report_port::ReportPort;

#[derive(Debug, Clone, Copy)]
pub struct JsonReportAdapter {
    pretty: bool,
}

impl JsonReportAdapter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl Default for JsonReportAdapter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ReportPort for JsonReportAdapter {
    fn render(&self, result: &AnalysisResult) -> Result<String, EquiscoreError> {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(result)
        } else {
            serde_json::to_string(result)
        };
        rendered.map_err(|e| EquiscoreError::Report {
            reason: e.to_string(),
        })
    }

    /// A JSON array rather than concatenated documents.
    fn render_all(&self, results: &[AnalysisResult]) -> Result<String, EquiscoreError> {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(results)
        } else {
            serde_json::to_string(results)
        };
        rendered.map_err(|e| EquiscoreError::Report {
            reason: e.to_string(),
        })
    }
}

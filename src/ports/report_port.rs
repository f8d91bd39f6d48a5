//! Report rendering port trait.

use crate::domain::error::EquiscoreError;
use crate::domain::report::AnalysisResult;

/// Port for turning an assembled result into a printable document.
pub trait ReportPort {
    fn render(&self, result: &AnalysisResult) -> Result<String, EquiscoreError>;

    /// Render every result, separated by a blank line.
    fn render_all(&self, results: &[AnalysisResult]) -> Result<String, EquiscoreError> {
        let rendered = results
            .iter()
            .map(|r| self.render(r))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rendered.join("\n"))
    }
}

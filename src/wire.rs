//! Serde types for the linter's `--json` output.
//!
//! The tool prints a JSON array of suggestion objects with 1-based
//! line/column coordinates. Decoding converts them to the crate's 0-based
//! [`Diagnostic`]s and synthesizes the display message.

use serde::Deserialize;

use crate::types::{Diagnostic, Range, Severity, Suggestion};

/// One element of the tool's output array. Coordinates are 1-based.
///
/// Unknown fields (module/declaration names, refactoring scripts) are
/// ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawSuggestion {
    pub severity: String,
    pub hint: String,
    pub from: String,
    pub to: String,
    pub start_line: u32,
    pub start_column: u32,
    pub end_line: u32,
    pub end_column: u32,
}

impl RawSuggestion {
    /// Convert to a [`Diagnostic`], shifting all four coordinates to
    /// 0-based. Saturating so a malformed `0` cannot underflow.
    pub fn into_diagnostic(self) -> Diagnostic {
        let range = Range::new(
            self.start_line.saturating_sub(1),
            self.start_column.saturating_sub(1),
            self.end_line.saturating_sub(1),
            self.end_column.saturating_sub(1),
        );
        // The exact template is part of the crate's display contract.
        let message = format!("{} Replace: {} ==> {}", self.hint, self.from, self.to);
        let severity = Severity::from_tool(&self.severity);
        let suggestion = Suggestion::new(self.from, self.to);
        Diagnostic::new(severity, range, message, suggestion)
    }
}

/// Parse the buffered stdout of a lint run into diagnostics.
pub(crate) fn parse_output(stdout: &[u8]) -> Result<Vec<Diagnostic>, serde_json::Error> {
    let raw: Vec<RawSuggestion> = serde_json::from_slice(stdout)?;
    Ok(raw.into_iter().map(RawSuggestion::into_diagnostic).collect())
}

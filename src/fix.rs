//! Fix applier — staleness validation and edit construction.
//!
//! The one consistency guarantee in this crate: never produce an edit whose
//! precondition (the code the tool reasoned about) no longer holds in the
//! live document.

use crate::text;
use crate::types::{Range, Suggestion};

/// A single range-replacement edit for the host to submit to its editor.
///
/// The core does not verify after the fact that the host committed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    pub range: Range,
    pub new_text: String,
}

impl TextEdit {
    /// Apply this edit to a document snapshot, returning the new text.
    ///
    /// Convenience for hosts that hold plain strings (and for tests);
    /// editor hosts will usually submit the edit to their own buffer
    /// machinery instead.
    #[must_use]
    pub fn apply(&self, document: &str) -> Option<String> {
        text::replace_range(document, self.range, &self.new_text)
    }
}

/// A fix that could not be planned. No edit is produced in either case.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FixError {
    /// The code at the diagnostic's range has changed since the diagnostic
    /// was issued (a previous fix already applied, or a manual edit).
    #[error("the suggestion was not applied: the code has changed since it was issued")]
    Stale,
    /// The range no longer fits inside the document at all.
    #[error("the suggestion was not applied: its range is outside the document")]
    RangeOutOfBounds,
}

/// Strip all whitespace for the staleness comparison. The tool's snippets
/// and the live document may differ in incidental whitespace only.
fn strip_whitespace(s: &str) -> String {
    s.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Validate `suggestion` against the live document and plan the edit.
///
/// The recorded original and the live text at `range` are compared
/// whitespace-insensitively; the replacement is inserted verbatim.
pub fn plan_fix(
    document: &str,
    range: Range,
    suggestion: &Suggestion,
) -> Result<TextEdit, FixError> {
    let live = text::slice_range(document, range).ok_or(FixError::RangeOutOfBounds)?;
    if strip_whitespace(&live) != strip_whitespace(suggestion.original()) {
        return Err(FixError::Stale);
    }
    Ok(TextEdit {
        range,
        new_text: suggestion.replacement().to_string(),
    })
}

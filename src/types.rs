//! Core data model shared by the runner, store, and fix applier.
//!
//! The host constructs a [`LinterConfig`], feeds lifecycle events to the
//! session, and reads [`Diagnostic`]s for display. Fields are private;
//! construction is the single path and accessors are the read path.

use std::path::Path;

use serde::Deserialize;

fn default_command() -> String {
    "hlint".to_string()
}

fn default_extensions() -> Vec<String> {
    vec!["hs".to_string(), "lhs".to_string()]
}

/// Configuration for the external linter.
///
/// The command line is fixed at `<command> --json <file>`; only the
/// executable name and the set of handled file extensions vary.
#[derive(Debug, Clone, Deserialize)]
pub struct LinterConfig {
    /// Executable command (e.g. "hlint").
    #[serde(default = "default_command")]
    command: String,
    /// File extensions this linter handles (e.g. `["hs"]`).
    #[serde(default = "default_extensions")]
    file_extensions: Vec<String>,
}

impl Default for LinterConfig {
    fn default() -> Self {
        Self {
            command: default_command(),
            file_extensions: default_extensions(),
        }
    }
}

impl LinterConfig {
    #[must_use]
    pub fn new(command: impl Into<String>, file_extensions: Vec<String>) -> Self {
        Self {
            command: command.into(),
            file_extensions,
        }
    }

    #[must_use]
    pub fn command(&self) -> &str {
        &self.command
    }

    #[must_use]
    pub fn file_extensions(&self) -> &[String] {
        &self.file_extensions
    }

    /// Whether lifecycle events for `path` should trigger a lint pass.
    #[must_use]
    pub fn handles_path(&self, path: &Path) -> bool {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) => self.file_extensions.iter().any(|e| e == ext),
            None => false,
        }
    }
}

/// Severity of a linter suggestion.
///
/// The tool reports severity as free-form text; anything that is not
/// "warning" (case-insensitive) is an error. There is no info/hint tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Warning,
    Error,
}

impl Severity {
    /// Map the tool's severity string onto the binary classification.
    #[must_use]
    pub fn from_tool(label: &str) -> Self {
        if label.eq_ignore_ascii_case("warning") {
            Self::Warning
        } else {
            Self::Error
        }
    }

    #[must_use]
    pub fn is_error(self) -> bool {
        self == Self::Error
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// A 0-based text position. `column` counts characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    #[must_use]
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

/// A half-open text range in 0-based coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    #[must_use]
    pub fn new(start_line: u32, start_column: u32, end_line: u32, end_column: u32) -> Self {
        Self {
            start: Position::new(start_line, start_column),
            end: Position::new(end_line, end_column),
        }
    }

    /// Whether two ranges overlap or touch.
    ///
    /// Touching counts so that an empty cursor range at a diagnostic's
    /// boundary still matches it when the host asks for fixes.
    #[must_use]
    pub fn intersects(&self, other: &Range) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}

/// Structured fix payload carried alongside a diagnostic.
///
/// `original` is the code the tool reasoned about, compared against the live
/// document whitespace-insensitively. `replacement` is inserted verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    original: String,
    replacement: String,
}

impl Suggestion {
    #[must_use]
    pub fn new(original: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            replacement: replacement.into(),
        }
    }

    #[must_use]
    pub fn original(&self) -> &str {
        &self.original
    }

    #[must_use]
    pub fn replacement(&self) -> &str {
        &self.replacement
    }
}

/// A single positioned diagnostic produced by a lint pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    severity: Severity,
    range: Range,
    message: String,
    suggestion: Suggestion,
}

impl Diagnostic {
    #[must_use]
    pub fn new(severity: Severity, range: Range, message: String, suggestion: Suggestion) -> Self {
        Self {
            severity,
            range,
            message,
            suggestion,
        }
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn range(&self) -> Range {
        self.range
    }

    /// Display message, `<hint> Replace: <original> ==> <replacement>`.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn suggestion(&self) -> &Suggestion {
        &self.suggestion
    }
}

/// Stable identifier for a diagnostic installed in the store.
///
/// Ids are unique for the lifetime of a session and never reused, so a fix
/// request issued against a superseded diagnostic simply fails to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DiagnosticId(pub(crate) u64);

impl DiagnosticId {
    #[must_use]
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

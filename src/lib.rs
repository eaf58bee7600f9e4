//! Host-agnostic core for surfacing linter suggestions as editor
//! diagnostics and applying their suggested replacements.
//!
//! An editor host feeds document lifecycle events into a [`LintSession`];
//! the session shells out to the linter (`hlint --json <file>` by default),
//! decodes its output into positioned [`Diagnostic`]s, and keeps the
//! per-document diagnostic store. When the user accepts a suggestion the
//! session validates that the code the tool reasoned about is still in
//! place and hands the host a [`TextEdit`] to submit.

pub mod fix;
pub mod types;

pub(crate) mod store;
pub(crate) mod text;
pub(crate) mod wire;

mod runner;
mod session;

pub use fix::{FixError, TextEdit};
pub use runner::{LintError, LintRunner};
pub use session::{ApplyError, FixAction, LintPass, LintSession};
pub use types::{
    Diagnostic, DiagnosticId, LinterConfig, Position, Range, Severity, Suggestion,
};

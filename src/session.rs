//! Session facade — the host-facing API.
//!
//! The editor host owns event delivery, diagnostic rendering, and edit
//! submission; everything else lives here. The host feeds lifecycle events
//! in (`on_document_opened`, `on_document_saved`, `on_document_closed`),
//! reads diagnostics back out, and routes a user's "accept suggestion"
//! click through `provide_fixes` / `apply_fix`.
//!
//! Lint passes take `&mut self`, so two passes can never run concurrently
//! and the diagnostic set installed for a document is always the one from
//! the most recently started pass.

use std::path::{Path, PathBuf};

use crate::fix::{self, FixError, TextEdit};
use crate::runner::{LintError, LintRunner};
use crate::store::DiagnosticStore;
use crate::types::{Diagnostic, DiagnosticId, LinterConfig, Range};

/// Outcome of a lint pass triggered by a lifecycle event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintPass {
    /// The document is not handled by the configured linter. Not an error.
    Skipped,
    /// Diagnostics were installed; zero clears the document's prior set.
    Completed { count: usize },
}

/// A fix request that could not produce an edit.
#[derive(Debug, thiserror::Error)]
pub enum ApplyError {
    /// The id does not resolve to a current diagnostic — the issuing set
    /// was replaced by a newer lint pass or the document was closed.
    #[error("the suggestion was not applied: it is no longer current")]
    UnknownDiagnostic,
    #[error(transparent)]
    Fix(#[from] FixError),
}

/// One offered code action for a diagnostic in view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixAction {
    id: DiagnosticId,
    title: String,
    range: Range,
}

impl FixAction {
    #[must_use]
    pub fn id(&self) -> DiagnosticId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn range(&self) -> Range {
        self.range
    }
}

/// Host-agnostic linting session: one linter, one diagnostic store.
pub struct LintSession {
    config: LinterConfig,
    runner: LintRunner,
    store: DiagnosticStore,
}

impl LintSession {
    #[must_use]
    pub fn new(config: LinterConfig, workspace_root: Option<PathBuf>) -> Self {
        let runner = LintRunner::new(config.command(), workspace_root);
        Self {
            config,
            runner,
            store: DiagnosticStore::new(),
        }
    }

    /// A document was opened in the host.
    pub async fn on_document_opened(&mut self, path: &Path) -> Result<LintPass, LintError> {
        self.lint(path).await
    }

    /// A document was saved in the host.
    pub async fn on_document_saved(&mut self, path: &Path) -> Result<LintPass, LintError> {
        self.lint(path).await
    }

    /// A document was closed in the host; its diagnostics are forgotten.
    pub fn on_document_closed(&mut self, path: &Path) {
        self.store.remove(path);
    }

    async fn lint(&mut self, path: &Path) -> Result<LintPass, LintError> {
        if !self.config.handles_path(path) {
            return Ok(LintPass::Skipped);
        }

        let items = match self.runner.run(path).await {
            Ok(items) => items,
            Err(e) => {
                // Prior diagnostics stay in place; the host shows the error.
                tracing::warn!(path = %path.display(), error = %e, "lint pass failed");
                return Err(e);
            }
        };

        let count = items.len();
        self.store.replace(path.to_path_buf(), items);
        Ok(LintPass::Completed { count })
    }

    /// Current diagnostics for a document, with their stable ids.
    #[must_use]
    pub fn diagnostics_for(&self, path: &Path) -> &[(DiagnosticId, Diagnostic)] {
        self.store.diagnostics_for(path)
    }

    /// Offer one action per diagnostic whose range touches `range`.
    #[must_use]
    pub fn provide_fixes(&self, path: &Path, range: Range) -> Vec<FixAction> {
        self.store
            .diagnostics_for(path)
            .iter()
            .filter(|(_, diag)| diag.range().intersects(&range))
            .map(|(id, diag)| FixAction {
                id: *id,
                title: format!("Replace with: {}", diag.suggestion().replacement()),
                range: diag.range(),
            })
            .collect()
    }

    /// Plan the edit for an accepted suggestion against the live document
    /// text. The host submits the returned edit to its own editor.
    pub fn apply_fix(&self, id: DiagnosticId, document: &str) -> Result<TextEdit, ApplyError> {
        let diag = self.store.get(id).ok_or(ApplyError::UnknownDiagnostic)?;
        let edit = fix::plan_fix(document, diag.range(), diag.suggestion())?;
        Ok(edit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Severity, Suggestion};

    fn make_diag(msg: &str, range: Range, original: &str, replacement: &str) -> Diagnostic {
        Diagnostic::new(
            Severity::Warning,
            range,
            msg.to_string(),
            Suggestion::new(original, replacement),
        )
    }

    /// A session whose store is populated directly, without spawning a tool.
    fn seeded_session(path: &Path, items: Vec<Diagnostic>) -> LintSession {
        let mut session = LintSession::new(LinterConfig::default(), None);
        session.store.replace(path.to_path_buf(), items);
        session
    }

    #[tokio::test]
    async fn test_non_matching_language_is_skipped() {
        let mut session = LintSession::new(LinterConfig::default(), None);
        let pass = session
            .on_document_opened(Path::new("src/main.rs"))
            .await
            .unwrap();
        assert_eq!(pass, LintPass::Skipped);
        assert!(session.diagnostics_for(Path::new("src/main.rs")).is_empty());
    }

    #[tokio::test]
    async fn test_lint_error_leaves_prior_diagnostics() {
        let path = Path::new("Main.hs");
        let diag = make_diag("old", Range::new(0, 0, 0, 1), "a", "b");
        let mut session = seeded_session(path, vec![diag]);
        // The default "hlint" is assumed absent in the test environment;
        // point at a name that certainly is.
        session.runner = LintRunner::new("definitely-not-a-real-linter-binary", None);

        let result = session.on_document_saved(path).await;
        assert!(matches!(result, Err(LintError::ToolNotFound { .. })));
        assert_eq!(session.diagnostics_for(path).len(), 1);
    }

    #[test]
    fn test_close_removes_diagnostics() {
        let path = Path::new("Main.hs");
        let diag = make_diag("w", Range::new(0, 0, 0, 1), "a", "b");
        let mut session = seeded_session(path, vec![diag]);
        assert_eq!(session.diagnostics_for(path).len(), 1);

        session.on_document_closed(path);
        assert!(session.diagnostics_for(path).is_empty());
    }

    #[test]
    fn test_provide_fixes_filters_by_range() {
        let path = Path::new("Main.hs");
        let near = make_diag("near", Range::new(2, 0, 2, 16), "map f (concat x)", "concatMap f x");
        let far = make_diag("far", Range::new(9, 0, 9, 4), "x", "y");
        let session = seeded_session(path, vec![near, far]);

        let actions = session.provide_fixes(path, Range::new(2, 3, 2, 3));
        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].title(), "Replace with: concatMap f x");
        assert_eq!(actions[0].range(), Range::new(2, 0, 2, 16));
    }

    #[test]
    fn test_apply_fix_end_to_end() {
        let path = Path::new("Main.hs");
        let doc = "module Main where\n\nmap f (concat x)\n";
        let diag = make_diag(
            "Use concatMap Replace: map f (concat x) ==> concatMap f x",
            Range::new(2, 0, 2, 16),
            "map f (concat x)",
            "concatMap f x",
        );
        let session = seeded_session(path, vec![diag]);
        let id = session.diagnostics_for(path)[0].0;

        let edit = session.apply_fix(id, doc).unwrap();
        let edited = edit.apply(doc).unwrap();
        assert_eq!(edited, "module Main where\n\nconcatMap f x\n");

        // Second application against the edited document is stale.
        let second = session.apply_fix(id, &edited);
        assert!(matches!(second, Err(ApplyError::Fix(FixError::Stale))));
    }

    #[test]
    fn test_apply_fix_with_superseded_id() {
        let path = Path::new("Main.hs");
        let diag = make_diag("w", Range::new(0, 0, 0, 1), "a", "b");
        let mut session = seeded_session(path, vec![diag.clone()]);
        let stale_id = session.diagnostics_for(path)[0].0;

        session.store.replace(path.to_path_buf(), vec![diag]);
        let result = session.apply_fix(stale_id, "a\n");
        assert!(matches!(result, Err(ApplyError::UnknownDiagnostic)));
    }
}

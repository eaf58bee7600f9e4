//! Lint runner — spawns the external linter and decodes its output.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use tokio::process::Command;

use crate::types::Diagnostic;
use crate::wire;

/// A lint pass that could not produce diagnostics.
///
/// Every variant carries user-presentable text; the host decides whether to
/// surface it as a notification. The store is never touched on error, so
/// prior diagnostics deliberately remain displayed.
#[derive(Debug, thiserror::Error)]
pub enum LintError {
    #[error("{command} not found in PATH")]
    ToolNotFound { command: String },
    #[error("failed to run {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{command} produced output that is not valid JSON: {source}")]
    MalformedOutput {
        command: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Invokes the linter as a one-shot subprocess.
///
/// The command line is always `<command> --json <file>`, run from the
/// workspace root when one is known. Stdout is buffered to EOF as the sole
/// accumulation; there is no incremental parsing and no timeout.
pub struct LintRunner {
    command: String,
    workspace_root: Option<PathBuf>,
}

impl LintRunner {
    #[must_use]
    pub fn new(command: impl Into<String>, workspace_root: Option<PathBuf>) -> Self {
        Self {
            command: command.into(),
            workspace_root,
        }
    }

    /// Run one lint pass against `path`.
    ///
    /// The linter's exit code is not interpreted — the tool exits nonzero
    /// whenever it has suggestions, so the JSON body is the contract.
    pub async fn run(&self, path: &Path) -> Result<Vec<Diagnostic>, LintError> {
        let resolved = which::which(&self.command).map_err(|_| LintError::ToolNotFound {
            command: self.command.clone(),
        })?;

        let mut cmd = Command::new(&resolved);
        cmd.arg("--json")
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true);
        if let Some(root) = &self.workspace_root {
            cmd.current_dir(root);
        }

        let output = cmd.output().await.map_err(|source| LintError::Spawn {
            command: self.command.clone(),
            source,
        })?;

        let diagnostics =
            wire::parse_output(&output.stdout).map_err(|source| LintError::MalformedOutput {
                command: self.command.clone(),
                source,
            })?;

        tracing::debug!(
            path = %path.display(),
            count = diagnostics.len(),
            "lint pass completed"
        );
        Ok(diagnostics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_tool_is_tool_not_found() {
        let runner = LintRunner::new("definitely-not-a-real-linter-binary", None);
        let err = runner.run(Path::new("Main.hs")).await.unwrap_err();
        match err {
            LintError::ToolNotFound { command } => {
                assert_eq!(command, "definitely-not-a-real-linter-binary");
            }
            other => panic!("expected ToolNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_error_messages_are_presentable() {
        let err = LintError::ToolNotFound {
            command: "hlint".to_string(),
        };
        assert_eq!(err.to_string(), "hlint not found in PATH");
    }
}

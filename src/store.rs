//! Diagnostic store — the session's per-document diagnostic sets.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::types::{Diagnostic, DiagnosticId};

/// Mapping from document path to its current diagnostic set.
///
/// An entry is created on first lint, replaced wholesale on every subsequent
/// lint, and deleted when the document closes. An empty set is a valid entry:
/// it clears prior diagnostics without forgetting the document is open.
pub(crate) struct DiagnosticStore {
    data: HashMap<PathBuf, Vec<(DiagnosticId, Diagnostic)>>,
    next_id: u64,
}

impl DiagnosticStore {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
            next_id: 1,
        }
    }

    /// Replace the document's diagnostic set, assigning fresh ids.
    ///
    /// Ids are never reused, so fix requests that captured an id from a
    /// superseded set fail to resolve instead of hitting the wrong entry.
    pub fn replace(&mut self, path: PathBuf, items: Vec<Diagnostic>) {
        let entries = items
            .into_iter()
            .map(|diag| {
                let id = DiagnosticId(self.next_id);
                self.next_id += 1;
                (id, diag)
            })
            .collect();
        self.data.insert(path, entries);
    }

    /// Forget the document entirely (closed in the host).
    pub fn remove(&mut self, path: &Path) {
        self.data.remove(path);
    }

    /// Current diagnostics for a document; empty if none were ever installed.
    pub fn diagnostics_for(&self, path: &Path) -> &[(DiagnosticId, Diagnostic)] {
        self.data.get(path).map_or(&[], Vec::as_slice)
    }

    /// Resolve an id to its diagnostic, if the issuing set is still current.
    pub fn get(&self, id: DiagnosticId) -> Option<&Diagnostic> {
        self.data
            .values()
            .flat_map(|items| items.iter())
            .find_map(|(entry_id, diag)| (*entry_id == id).then_some(diag))
    }
}

use std::path::Path;

use super::{DocumentEditState, DocumentId};

/// One document handed to the exporter: its identity, source file and
/// the edit state to export.
///
/// The same `id` may appear several times; all occurrences share one handle.
#[derive(Debug, Clone, Copy)]
pub struct ExportInput<'a> {
    pub id: DocumentId,
    pub path: &'a Path,
    pub state: &'a DocumentEditState,
}

impl<'a> ExportInput<'a> {
    pub fn new(id: DocumentId, path: &'a Path, state: &'a DocumentEditState) -> Self {
        Self { id, path, state }
    }
}

//! Edit session files
//!
//! A session lists the documents to assemble, in export order, with the
//! page count of each and the edits to replay on it. The `pagekit` binary
//! replays a session and prints the resulting pdftk invocation.
//!
//! ```json
//! {
//!   "output": "merged.pdf",
//!   "documents": [
//!     {
//!       "path": "x.pdf",
//!       "pages": 3,
//!       "edits": [
//!         { "op": "rotate", "pages": [2], "direction": "clockwise" },
//!         { "op": "remove", "pages": [1] }
//!       ]
//!     },
//!     { "path": "y.pdf", "pages": 1 }
//!   ]
//! }
//! ```

use anyhow::Context;
use pagekit_core::{PageIndex, RotationDirection};
use pagekit_editor::{DocumentList, EditHistory, EditorResult, LastPagePolicy};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One recorded edit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Edit {
    Remove {
        pages: Vec<PageIndex>,
    },
    Rotate {
        pages: Vec<PageIndex>,
        direction: RotationDirection,
    },
    RotateAll {
        direction: RotationDirection,
    },
    Reorder {
        order: Vec<PageIndex>,
    },
    Undo,
}

impl Edit {
    /// Apply to `history`; returns whether the history changed.
    pub fn apply(&self, history: &mut EditHistory) -> EditorResult<bool> {
        match self {
            Edit::Remove { pages } => history.remove_pages(pages.iter().copied()),
            Edit::Rotate { pages, direction } => {
                Ok(history.rotate_pages(pages.iter().copied(), *direction))
            }
            Edit::RotateAll { direction } => Ok(history.rotate_all(*direction)),
            Edit::Reorder { order } => history.reorder_pages(order),
            Edit::Undo => Ok(history.undo()),
        }
    }
}

/// A document and the edits made to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionDocument {
    pub path: PathBuf,
    pub pages: usize,
    #[serde(default)]
    pub edits: Vec<Edit>,
}

/// A complete edit session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Output file; the configured default name is used when absent
    #[serde(default)]
    pub output: Option<PathBuf>,
    pub documents: Vec<SessionDocument>,
}

impl Session {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read session file {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid session file {}", path.display()))
    }

    pub fn parse(content: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Open every document and replay its edits, in file order.
    ///
    /// Relative document paths are resolved against `base_dir`.
    pub fn replay(&self, base_dir: &Path, policy: LastPagePolicy) -> anyhow::Result<DocumentList> {
        let mut list = DocumentList::with_policy(policy);
        for document in &self.documents {
            let id = list.open(base_dir.join(&document.path), document.pages);
            let Some(open) = list.get_mut(id) else {
                continue;
            };
            for (step, edit) in document.edits.iter().enumerate() {
                let changed = edit.apply(open.history_mut()).with_context(|| {
                    format!(
                        "Edit {} on {} failed",
                        step + 1,
                        document.path.display()
                    )
                })?;
                if !changed {
                    tracing::debug!(
                        "Edit {} on {} changed nothing",
                        step + 1,
                        document.path.display()
                    );
                }
            }
        }
        Ok(list)
    }
}

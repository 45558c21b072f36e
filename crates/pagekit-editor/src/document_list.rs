//! Ordered list of open documents

use pagekit_core::{DocumentEditState, DocumentId, EventBus, ExportInput, LibraryEvent, PageSource};
use std::path::{Path, PathBuf};

use crate::edit_history::{EditHistory, LastPagePolicy};
use crate::error::{EditorError, EditorResult};

/// A document in the open list together with its edit history
#[derive(Debug)]
pub struct OpenDocument {
    id: DocumentId,
    path: PathBuf,
    name: String,
    history: EditHistory,
}

impl OpenDocument {
    fn new(path: PathBuf, history: EditHistory) -> Self {
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self {
            id: DocumentId::new(),
            path,
            name,
            history,
        }
    }

    pub fn id(&self) -> DocumentId {
        self.id
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Display name, the file name without extension
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn history(&self) -> &EditHistory {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut EditHistory {
        &mut self.history
    }

    /// Current edit state
    pub fn state(&self) -> &DocumentEditState {
        self.history.current()
    }

    pub fn export_input(&self) -> ExportInput<'_> {
        ExportInput::new(self.id, &self.path, self.history.current())
    }
}

/// Open documents in display order
///
/// Publishes [`LibraryEvent`]s when the list gains its first document,
/// loses a document, or becomes empty.
#[derive(Debug, Default)]
pub struct DocumentList {
    documents: Vec<OpenDocument>,
    policy: LastPagePolicy,
    events: EventBus<LibraryEvent>,
}

impl DocumentList {
    pub fn new() -> Self {
        Self::default()
    }

    /// List whose documents use `policy` for last-page removal
    pub fn with_policy(policy: LastPagePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn events(&self) -> &EventBus<LibraryEvent> {
        &self.events
    }

    /// Append a `page_count`-page document
    pub fn open(&mut self, path: impl Into<PathBuf>, page_count: usize) -> DocumentId {
        let history = EditHistory::from_state(DocumentEditState::initial(page_count), self.policy);
        self.push(OpenDocument::new(path.into(), history))
    }

    /// Append a document whose page count comes from `source`
    pub fn open_source<S: PageSource + ?Sized>(
        &mut self,
        path: impl Into<PathBuf>,
        source: &S,
    ) -> DocumentId {
        let history = EditHistory::open(source, self.policy);
        self.push(OpenDocument::new(path.into(), history))
    }

    fn push(&mut self, document: OpenDocument) -> DocumentId {
        let id = document.id;
        tracing::debug!(
            "Opened {} ({} pages) as {}",
            document.path.display(),
            document.state().len(),
            id
        );
        self.documents.push(document);
        if self.documents.len() == 1 {
            self.events.notify(LibraryEvent::FirstDocumentAdded { id });
        }
        id
    }

    /// Remove a document from the list and hand it back
    pub fn close(&mut self, id: DocumentId) -> EditorResult<OpenDocument> {
        let position = self.position(id).ok_or(EditorError::UnknownDocument(id))?;
        let document = self.documents.remove(position);
        tracing::debug!("Closed {}", id);
        self.events.notify(LibraryEvent::DocumentRemoved { id });
        if self.documents.is_empty() {
            self.events.notify(LibraryEvent::AllDocumentsRemoved);
        }
        Ok(document)
    }

    /// Move a document to `position`, clamped to the end of the list
    pub fn move_to(&mut self, id: DocumentId, position: usize) -> EditorResult<()> {
        let from = self.position(id).ok_or(EditorError::UnknownDocument(id))?;
        let document = self.documents.remove(from);
        let to = position.min(self.documents.len());
        self.documents.insert(to, document);
        Ok(())
    }

    pub fn position(&self, id: DocumentId) -> Option<usize> {
        self.documents.iter().position(|doc| doc.id == id)
    }

    pub fn get(&self, id: DocumentId) -> Option<&OpenDocument> {
        self.documents.iter().find(|doc| doc.id == id)
    }

    pub fn get_mut(&mut self, id: DocumentId) -> Option<&mut OpenDocument> {
        self.documents.iter_mut().find(|doc| doc.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &OpenDocument> + '_ {
        self.documents.iter()
    }

    pub fn ids(&self) -> Vec<DocumentId> {
        self.documents.iter().map(|doc| doc.id).collect()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Current state of every open document, in list order
    pub fn export_inputs(&self) -> Vec<ExportInput<'_>> {
        self.documents.iter().map(OpenDocument::export_input).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_is_file_stem() {
        let mut list = DocumentList::new();
        let id = list.open("/tmp/report.final.pdf", 2);
        assert_eq!(list.get(id).map(OpenDocument::name), Some("report.final"));
    }

    #[test]
    fn test_documents_inherit_list_policy() {
        let mut list = DocumentList::with_policy(LastPagePolicy::Allow);
        let id = list.open("a.pdf", 1);
        assert_eq!(
            list.get(id).map(|doc| doc.history().policy()),
            Some(LastPagePolicy::Allow)
        );
    }
}

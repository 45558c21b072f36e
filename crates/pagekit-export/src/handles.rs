//! Symbolic document handles
//!
//! pdftk refers to input files by upper-case handles. Handles are generated
//! in bijective base 26: `A`..`Z`, `AA`..`AZ`, `BA`..`ZZ`, `AAA`, ...

use indexmap::IndexMap;
use pagekit_core::DocumentId;
use serde::Serialize;
use std::fmt;

/// Upper-case handle bound to one input document
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Handle(String);

impl Handle {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The `ordinal`-th handle, counting from zero (`0` is `A`, `26` is `AA`).
pub fn handle_for_ordinal(ordinal: usize) -> Handle {
    let mut letters = Vec::new();
    let mut n = ordinal + 1;
    while n > 0 {
        n -= 1;
        letters.push(b'A' + (n % 26) as u8);
        n /= 26;
    }
    letters.reverse();
    Handle(letters.into_iter().map(char::from).collect())
}

/// Endless iterator over handles in order
#[derive(Debug, Clone, Default)]
pub struct HandleGenerator {
    next: usize,
}

impl HandleGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Iterator for HandleGenerator {
    type Item = Handle;

    fn next(&mut self) -> Option<Handle> {
        let handle = handle_for_ordinal(self.next);
        self.next += 1;
        Some(handle)
    }
}

/// One handle per distinct document, in first-seen order
pub fn assign_handles<I>(ids: I) -> IndexMap<DocumentId, Handle>
where
    I: IntoIterator<Item = DocumentId>,
{
    let mut handles = IndexMap::new();
    let mut generator = HandleGenerator::new();
    for id in ids {
        if !handles.contains_key(&id) {
            if let Some(handle) = generator.next() {
                handles.insert(id, handle);
            }
        }
    }
    handles
}

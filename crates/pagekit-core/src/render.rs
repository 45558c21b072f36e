//! Rendering collaborator interface
//!
//! PageKit never parses or rasterizes PDFs itself. A backend implements
//! [`PageSource`] to report page counts and [`PageRenderer`] to produce page
//! images asynchronously. Completion callbacks may run on any thread, in any
//! order, and possibly after the document has been edited further.

use thiserror::Error;

use crate::data::PageIndex;

/// Completion callback handed to [`PageRenderer::render_page`].
pub type RenderCallback<I> = Box<dyn FnOnce(Result<I, RenderError>) + Send + 'static>;

/// Errors reported by a rendering backend
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// The page does not exist in the source document
    #[error("Page {page} out of range (document has {page_count} pages)")]
    PageOutOfRange {
        /// The requested page.
        page: PageIndex,
        /// Number of pages in the document.
        page_count: usize,
    },

    /// Rendering was cancelled by the backend
    #[error("Rendering cancelled")]
    Cancelled,

    /// Backend-specific failure
    #[error("Render backend error: {0}")]
    Backend(String),
}

/// A loaded document that knows its page count
pub trait PageSource {
    /// Number of pages in the original document.
    fn page_count(&self) -> usize;
}

/// A backend able to render pages of one document
pub trait PageRenderer: PageSource {
    /// Displayable image type produced by the backend.
    type Image: Send + 'static;

    /// Start rendering `page`; `done` is invoked exactly once with the result.
    fn render_page(&self, page: PageIndex, done: RenderCallback<Self::Image>);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    struct Immediate {
        pages: usize,
    }

    impl PageSource for Immediate {
        fn page_count(&self) -> usize {
            self.pages
        }
    }

    impl PageRenderer for Immediate {
        type Image = String;

        fn render_page(&self, page: PageIndex, done: RenderCallback<String>) {
            if page.get() >= self.pages {
                done(Err(RenderError::PageOutOfRange {
                    page,
                    page_count: self.pages,
                }));
            } else {
                done(Ok(format!("page-{}", page.page_number())));
            }
        }
    }

    #[test]
    fn test_renderer_invokes_callback() {
        let renderer = Immediate { pages: 2 };
        let (tx, rx) = mpsc::channel();

        for page in 0..3 {
            let tx = tx.clone();
            renderer.render_page(
                PageIndex::new(page),
                Box::new(move |result| {
                    tx.send(result).ok();
                }),
            );
        }

        let results: Vec<_> = rx.try_iter().collect();
        assert_eq!(results[0], Ok("page-1".to_string()));
        assert_eq!(results[1], Ok("page-2".to_string()));
        assert_eq!(
            results[2],
            Err(RenderError::PageOutOfRange {
                page: PageIndex::new(2),
                page_count: 2
            })
        );
    }

    #[test]
    fn test_render_error_display() {
        assert_eq!(RenderError::Cancelled.to_string(), "Rendering cancelled");
        assert_eq!(
            RenderError::Backend("broken xref".into()).to_string(),
            "Render backend error: broken xref"
        );
    }
}

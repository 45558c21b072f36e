//! # PageKit
//!
//! A toolkit for assembling, reordering, rotating and re-exporting
//! collections of PDF documents.
//!
//! ## Architecture
//!
//! PageKit is organized as a workspace with multiple crates:
//!
//! 1. **pagekit-core** - Page/rotation data model, event bus, rendering traits
//! 2. **pagekit-editor** - Edit history, selection model, thumbnails, open documents
//! 3. **pagekit-export** - Page range compaction and pdftk invocation planning
//! 4. **pagekit-settings** - Configuration files and defaults
//! 5. **pagekit** - Session replay and the `pagekit` binary
//!
//! PDF parsing and rasterization are left to a backend implementing
//! [`PageSource`] and [`PageRenderer`]; exporting produces an
//! [`ExportPlan`] for pdftk without running it.

pub mod session;

pub use pagekit_core::{
    BusEvent, CoreError, DocumentEditState, DocumentEvent, DocumentId, EventBus, EventFilter,
    ExportInput, LibraryEvent, PageIndex, PageRenderer, PageSource, RenderError, Rotation,
    RotationDirection, SelectionEvent, SubscriptionId,
};
pub use pagekit_editor::{
    DocumentList, EditHistory, EditorError, LastPagePolicy, OpenDocument, SelectionError,
    SelectionModel, ThumbnailBoard, ThumbnailSlot,
};
pub use pagekit_export::{ExportError, ExportPlan, ExportPlanner, PageRange};
pub use pagekit_settings::{Config, SettingsError};
pub use session::{Edit, Session, SessionDocument};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging
///
/// Sets up structured logging with:
/// - Output on stderr, keeping stdout for command output
/// - RUST_LOG environment variable support, falling back to `default_level`
pub fn init_logging(default_level: &str) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_level)?,
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

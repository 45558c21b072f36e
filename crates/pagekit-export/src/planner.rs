//! Export plan assembly
//!
//! Turns the ordered export inputs into pdftk `cat` arguments:
//!
//! ```text
//! pdftk A="/abs/x.pdf" B="/abs/y.pdf" cat A1-2 A4east B1 output "/abs/out.pdf"
//! ```
//!
//! The planner only builds the invocation; running it is up to the caller.

use pagekit_core::ExportInput;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{ExportError, ExportResult};
use crate::handles::{assign_handles, Handle};
use crate::ranges::{compact_ranges, PageRange};

/// pdftk program used when none is configured
pub const DEFAULT_PROGRAM: &str = "pdftk";

/// A handle and the absolute path of the file it names
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HandleBinding {
    pub handle: Handle,
    pub path: PathBuf,
}

impl HandleBinding {
    /// `A=/abs/x.pdf`, as passed to a spawned process
    pub fn arg(&self) -> String {
        format!("{}={}", self.handle, self.path.display())
    }
}

/// Ranges contributed by one export input
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedDocument {
    pub handle: Handle,
    pub ranges: Vec<PageRange>,
}

impl PlannedDocument {
    /// `cat` tokens for this document, e.g. `A1-2`, `A3east`
    pub fn tokens(&self) -> impl Iterator<Item = String> + '_ {
        self.ranges
            .iter()
            .map(move |range| format!("{}{}", self.handle, range))
    }
}

/// A complete pdftk invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportPlan {
    program: PathBuf,
    bindings: Vec<HandleBinding>,
    documents: Vec<PlannedDocument>,
    tokens: Vec<String>,
    output: PathBuf,
}

impl ExportPlan {
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// One binding per distinct document, in first-seen order
    pub fn bindings(&self) -> &[HandleBinding] {
        &self.bindings
    }

    /// One entry per input, in input order
    pub fn documents(&self) -> &[PlannedDocument] {
        &self.documents
    }

    /// Ordered `cat` tokens
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Whether the plan contains at least one page
    pub fn has_pages(&self) -> bool {
        !self.tokens.is_empty()
    }

    /// Total number of pages written
    pub fn page_count(&self) -> usize {
        self.documents
            .iter()
            .flat_map(|doc| doc.ranges.iter())
            .map(PageRange::page_count)
            .sum()
    }

    /// Program arguments: bindings, `cat`, tokens, `output`, output path
    pub fn args(&self) -> ExportResult<Vec<String>> {
        if !self.has_pages() {
            return Err(ExportError::NothingToExport);
        }

        let mut args: Vec<String> = self.bindings.iter().map(HandleBinding::arg).collect();
        args.push("cat".to_string());
        args.extend(self.tokens.iter().cloned());
        args.push("output".to_string());
        args.push(self.output.display().to_string());
        Ok(args)
    }

    /// The invocation as one shell-style line with quoted paths
    pub fn command_line(&self) -> ExportResult<String> {
        if !self.has_pages() {
            return Err(ExportError::NothingToExport);
        }

        let mut parts = vec![self.program.display().to_string()];
        parts.extend(
            self.bindings
                .iter()
                .map(|binding| format!("{}=\"{}\"", binding.handle, binding.path.display())),
        );
        parts.push("cat".to_string());
        parts.extend(self.tokens.iter().cloned());
        parts.push("output".to_string());
        parts.push(format!("\"{}\"", self.output.display()));
        Ok(parts.join(" "))
    }

    /// A [`Command`] ready to spawn; it is not started here.
    pub fn to_command(&self) -> ExportResult<Command> {
        let mut command = Command::new(&self.program);
        command.args(self.args()?);
        Ok(command)
    }
}

/// Builds [`ExportPlan`]s for a configured pdftk program
#[derive(Debug, Clone)]
pub struct ExportPlanner {
    program: PathBuf,
}

impl ExportPlanner {
    pub fn new() -> Self {
        Self::with_program(DEFAULT_PROGRAM)
    }

    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Plan the export of `inputs`, in order, into `output`.
    ///
    /// Inputs sharing a document id share one handle; the first input's path
    /// is used for the binding. Inputs with no pages are bound but emit no
    /// tokens.
    pub fn plan<'a, I>(&self, inputs: I, output: impl AsRef<Path>) -> ExportResult<ExportPlan>
    where
        I: IntoIterator<Item = ExportInput<'a>>,
    {
        let inputs: Vec<ExportInput<'a>> = inputs.into_iter().collect();
        if inputs.is_empty() {
            return Err(ExportError::NoDocuments);
        }

        let handles = assign_handles(inputs.iter().map(|input| input.id));

        let mut bindings = Vec::with_capacity(handles.len());
        for (id, handle) in &handles {
            let Some(input) = inputs.iter().find(|input| input.id == *id) else {
                continue;
            };
            bindings.push(HandleBinding {
                handle: handle.clone(),
                path: absolute(input.path)?,
            });
        }

        let mut documents = Vec::with_capacity(inputs.len());
        for input in &inputs {
            let Some(handle) = handles.get(&input.id) else {
                continue;
            };
            if input.state.is_empty() {
                tracing::debug!("Document {} has no pages; no tokens emitted", handle);
            }
            documents.push(PlannedDocument {
                handle: handle.clone(),
                ranges: compact_ranges(input.state),
            });
        }

        let tokens: Vec<String> = documents.iter().flat_map(|doc| doc.tokens()).collect();
        let output = absolute(output.as_ref())?;

        tracing::debug!(
            "Planned export of {} documents as {} ranges into {}",
            bindings.len(),
            tokens.len(),
            output.display()
        );

        Ok(ExportPlan {
            program: self.program.clone(),
            bindings,
            documents,
            tokens,
            output,
        })
    }
}

impl Default for ExportPlanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Lexically absolute form of `path`; the file need not exist.
fn absolute(path: &Path) -> ExportResult<PathBuf> {
    if path.as_os_str().is_empty() {
        return Err(ExportError::InvalidPath {
            path: path.to_path_buf(),
            reason: "path is empty".to_string(),
        });
    }
    Ok(std::path::absolute(path)?)
}

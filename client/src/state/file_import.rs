//! Selection, validation, preview, and submit state for the image import tool.
//!
//! DESIGN
//! ======
//! One `FileImportState` exists per mounted image-verification body and is
//! dropped with it, so nothing survives a modal re-open. The state is generic
//! over the file handle (`web_sys::File` in the browser, `FileMeta` in tests)
//! through the small `FileInfo` trait.
//!
//! ORDERING
//! ========
//! Every accepted selection, rejection, and removal bumps `selection_seq`.
//! Async work (preview decode, submit) is tagged with the sequence it started
//! under and its result is dropped if the sequence has moved on, so only the
//! most recently selected file can ever be previewed or reported.

#[cfg(test)]
#[path = "file_import_test.rs"]
mod file_import_test;

use crate::net::verify::{SubmitError, VerificationReport};

/// Hard upload ceiling: 10 MiB.
pub const MAX_IMAGE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
/// Media types offered by the file picker.
pub const ACCEPTED_IMAGE_TYPES: &str = "image/png, image/jpeg, image/webp";
pub const SUBMIT_LABEL: &str = "Verify Image Integrity";
pub const PROCESSING_LABEL: &str = "Processing...";
pub const CONNECTION_ERROR_MESSAGE: &str = "Connection error. Please try again.";

/// Metadata the import flow needs from a user-provided file.
pub trait FileInfo {
    fn name(&self) -> String;
    fn size_bytes(&self) -> u64;
    fn mime_type(&self) -> String;
}

/// Plain file description, used off-browser.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileMeta {
    pub name: String,
    pub size_bytes: u64,
    pub mime_type: String,
}

impl FileMeta {
    pub fn new(name: &str, size_bytes: u64, mime_type: &str) -> Self {
        Self { name: name.to_owned(), size_bytes, mime_type: mime_type.to_owned() }
    }
}

impl FileInfo for FileMeta {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    fn mime_type(&self) -> String {
        self.mime_type.clone()
    }
}

/// Reasons a selected file is refused. `Display` is the inline message.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ImportError {
    #[error("Error: Only image files are allowed.")]
    NotAnImage,
    #[error("Error: \"{name}\" exceeds the 10 MB limit.")]
    TooLarge { name: String },
}

/// Check media type first, then size.
///
/// # Errors
///
/// Returns the first rule the file breaks.
pub fn validate<F: FileInfo>(file: &F) -> Result<(), ImportError> {
    if !file.mime_type().starts_with("image/") {
        return Err(ImportError::NotAnImage);
    }
    if file.size_bytes() > MAX_IMAGE_SIZE_BYTES {
        return Err(ImportError::TooLarge { name: file.name() });
    }
    Ok(())
}

/// Thumbnail decode progress for the current selection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PreviewState {
    #[default]
    Empty,
    Decoding { seq: u64 },
    /// `data_url` is `None` when the reader produced nothing usable.
    Ready { seq: u64, data_url: Option<String> },
}

/// Result shown in the success panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerificationOutcome {
    pub file_name: String,
    pub integrity_score: u8,
}

impl VerificationOutcome {
    pub fn score_label(&self) -> String {
        format!("{}/100", self.integrity_score)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Processing { seq: u64 },
    Complete(VerificationOutcome),
}

/// State owned by one mounted image-import surface.
#[derive(Clone, Debug)]
pub struct FileImportState<F> {
    selected: Option<F>,
    preview: PreviewState,
    phase: SubmitPhase,
    error: Option<String>,
    selection_seq: u64,
}

impl<F> Default for FileImportState<F> {
    fn default() -> Self {
        Self {
            selected: None,
            preview: PreviewState::Empty,
            phase: SubmitPhase::Idle,
            error: None,
            selection_seq: 0,
        }
    }
}

impl<F: FileInfo + Clone> FileImportState<F> {
    pub fn selected(&self) -> Option<&F> {
        self.selected.as_ref()
    }

    pub fn preview(&self) -> &PreviewState {
        &self.preview
    }

    pub fn phase(&self) -> &SubmitPhase {
        &self.phase
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn selection_seq(&self) -> u64 {
        self.selection_seq
    }

    pub fn outcome(&self) -> Option<&VerificationOutcome> {
        match &self.phase {
            SubmitPhase::Complete(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn is_processing(&self) -> bool {
        matches!(self.phase, SubmitPhase::Processing { .. })
    }

    pub fn can_submit(&self) -> bool {
        self.selected.is_some() && !self.is_processing()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_processing() { PROCESSING_LABEL } else { SUBMIT_LABEL }
    }

    /// Shared entry point for the file picker and drag-and-drop.
    ///
    /// Clears any previous error, then considers only the first file. On
    /// acceptance returns the new selection sequence the caller must tag its
    /// preview decode with. An empty list only clears the error.
    ///
    /// # Errors
    ///
    /// Returns the validation failure; the message is also stored for display
    /// and no file is left selected.
    pub fn handle_files<I>(&mut self, files: I) -> Result<Option<u64>, ImportError>
    where
        I: IntoIterator<Item = F>,
    {
        self.error = None;
        let Some(file) = files.into_iter().next() else {
            return Ok(None);
        };

        self.selection_seq += 1;

        if let Err(err) = validate(&file) {
            self.selected = None;
            self.preview = PreviewState::Empty;
            if self.is_processing() {
                self.phase = SubmitPhase::Idle;
            }
            self.error = Some(err.to_string());
            return Err(err);
        }

        self.phase = SubmitPhase::Idle;
        self.selected = Some(file);
        self.preview = PreviewState::Decoding { seq: self.selection_seq };
        Ok(Some(self.selection_seq))
    }

    /// Apply a finished decode. Returns `false` when the result is stale.
    pub fn preview_ready(&mut self, seq: u64, data_url: Option<String>) -> bool {
        if seq != self.selection_seq || self.selected.is_none() {
            return false;
        }
        self.preview = PreviewState::Ready { seq, data_url };
        true
    }

    /// Drop the current selection. Returns whether a file was selected.
    pub fn remove_selected(&mut self) -> bool {
        let removed = self.selected.take().is_some();
        self.selection_seq += 1;
        self.preview = PreviewState::Empty;
        if self.is_processing() {
            self.phase = SubmitPhase::Idle;
        }
        removed
    }

    /// Enter the processing phase and hand back the file to send.
    ///
    /// `None` when nothing is selected or a submit is already running.
    pub fn begin_submit(&mut self) -> Option<(u64, F)> {
        if !self.can_submit() {
            return None;
        }
        let file = self.selected.clone()?;
        self.error = None;
        self.phase = SubmitPhase::Processing { seq: self.selection_seq };
        Some((self.selection_seq, file))
    }

    /// Apply a submit completion tagged with `seq`.
    ///
    /// Success replaces the preview with the outcome and clears the
    /// selection. Failure shows the connection error and keeps the selection
    /// so the user can retry. Returns `false` for stale completions.
    pub fn finish_submit(&mut self, seq: u64, result: Result<VerificationReport, SubmitError>) -> bool {
        if self.phase != (SubmitPhase::Processing { seq }) || seq != self.selection_seq {
            return false;
        }
        match result {
            Ok(report) => {
                let file_name = self.selected.take().map(|f| f.name()).unwrap_or_default();
                self.preview = PreviewState::Empty;
                self.phase = SubmitPhase::Complete(VerificationOutcome {
                    file_name,
                    integrity_score: report.integrity_score,
                });
            }
            Err(_) => {
                self.error = Some(CONNECTION_ERROR_MESSAGE.to_owned());
                self.phase = SubmitPhase::Idle;
            }
        }
        true
    }
}

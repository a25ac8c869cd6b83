#[cfg(test)]
#[path = "documents_test.rs"]
mod documents_test;

use crate::net::types::IndexedSummary;

/// State for the document manager panel.
#[derive(Clone, Debug, Default)]
pub struct DocumentsState {
    pub summary: IndexedSummary,
    /// Name of the file chosen in the picker, awaiting upload.
    pub selected: Option<String>,
    pub uploading: bool,
    pub message: Option<String>,
    pub error: Option<String>,
}

impl DocumentsState {
    /// Upload is possible once a file is chosen and no upload is in flight.
    pub fn can_upload(&self) -> bool {
        self.selected.is_some() && !self.uploading
    }

    /// Replace the summary with a fresh fetch result.
    pub fn load(&mut self, summary: IndexedSummary) {
        self.summary = summary;
    }

    /// A failed summary fetch degrades to the empty summary instead of
    /// surfacing an error banner.
    pub fn load_empty(&mut self) {
        self.summary = IndexedSummary::default();
    }

    pub fn select(&mut self, name: Option<String>) {
        self.selected = name;
    }

    pub fn begin_upload(&mut self) {
        self.uploading = true;
        self.message = None;
        self.error = None;
    }

    /// Store the confirmation message and release the file slot.
    pub fn finish_upload(&mut self, filename: &str, chunks: u64) {
        self.message = Some(format!(
            "Se subió \"{filename}\" y se ingestaron {chunks} chunks."
        ));
        self.selected = None;
        self.uploading = false;
    }

    /// Store the upload error. The file slot is released so the user picks
    /// again; the previously fetched summary stays visible.
    pub fn fail_upload(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.selected = None;
        self.uploading = false;
    }
}

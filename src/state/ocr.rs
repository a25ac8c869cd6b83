#[cfg(test)]
#[path = "ocr_test.rs"]
mod ocr_test;

/// Shown when the backend returns an empty extraction.
pub const NO_TEXT_DETECTED: &str = "No se pudo extraer texto de la imagen";

/// State for the image OCR panel.
#[derive(Clone, Debug, Default)]
pub struct OcrState {
    pub result: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
}

impl OcrState {
    /// Enter the loading state, clearing the previous extraction.
    pub fn begin(&mut self) {
        self.loading = true;
        self.result = None;
        self.error = None;
    }

    /// Store the extracted text, mapping an empty extraction to the
    /// fallback message so the panel never renders an empty block.
    pub fn finish(&mut self, text: String) {
        self.result = Some(if text.is_empty() {
            NO_TEXT_DETECTED.to_owned()
        } else {
            text
        });
        self.loading = false;
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.loading = false;
    }
}

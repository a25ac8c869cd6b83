#[cfg(test)]
#[path = "plan_test.rs"]
mod plan_test;

use crate::net::types::{PlanRequest, PlanResponse};

/// Where the plan topic comes from: a typed topic or an uploaded file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlanSource {
    #[default]
    Topic,
    File,
}

/// State for the spaced-repetition plan generator.
#[derive(Clone, Debug, Default)]
pub struct PlanState {
    pub mode: PlanSource,
    pub topic: String,
    pub start_date: String,
    pub email: String,
    /// Name of the reference file after a successful upload. Seeds the
    /// synthetic topic label and gates generation in file mode.
    pub uploaded_file: Option<String>,
    pub loading: bool,
    pub uploading: bool,
    pub error: Option<String>,
    pub plan: Option<PlanResponse>,
}

impl PlanState {
    /// Generation needs the active mode's required input and no plan call
    /// already in flight.
    pub fn can_generate(&self) -> bool {
        if self.loading {
            return false;
        }
        match self.mode {
            PlanSource::Topic => !self.topic.trim().is_empty(),
            PlanSource::File => self.uploaded_file.is_some(),
        }
    }

    pub fn begin_upload(&mut self) {
        self.uploading = true;
        self.error = None;
    }

    /// Record the uploaded reference file and seed the topic label from it.
    pub fn finish_upload(&mut self, filename: &str) {
        self.uploaded_file = Some(filename.to_owned());
        self.topic = format!("Plan basado en: {filename}");
        self.uploading = false;
    }

    /// A failed upload keeps any previously uploaded file (and the topic
    /// seeded from it) so the user can still generate from the last good
    /// upload.
    pub fn fail_upload(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.uploading = false;
    }

    pub fn begin_generate(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn finish_generate(&mut self, plan: PlanResponse) {
        self.plan = Some(plan);
        self.loading = false;
    }

    /// A failed generation leaves any previously generated plan visible.
    pub fn fail_generate(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.loading = false;
    }

    /// Build the request body, omitting blank optional fields.
    pub fn request(&self) -> PlanRequest {
        let non_blank = |s: &str| {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_owned())
        };
        PlanRequest {
            topic: self.topic.trim().to_owned(),
            start_date: non_blank(&self.start_date),
            email: non_blank(&self.email),
        }
    }
}

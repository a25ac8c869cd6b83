#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use crate::net::types::QueryResponse;

/// Who produced a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

/// One entry in the question/answer thread.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    /// Full backend response, present on answers so provenance can render.
    pub response: Option<QueryResponse>,
}

/// State for the question/answer panel.
#[derive(Clone, Debug, Default)]
pub struct QueryState {
    pub messages: Vec<ChatMessage>,
    pub loading: bool,
    pub error: Option<String>,
}

impl QueryState {
    /// A question can be submitted when it has non-whitespace content and
    /// no previous query is still in flight.
    pub fn can_submit(&self, input: &str) -> bool {
        !self.loading && !input.trim().is_empty()
    }

    /// Record the outgoing question and enter the loading state.
    pub fn begin(&mut self, question: &str) {
        self.messages.push(ChatMessage {
            role: Role::User,
            content: question.to_owned(),
            response: None,
        });
        self.loading = true;
        self.error = None;
    }

    /// Store a successful answer and settle.
    pub fn finish(&mut self, response: QueryResponse) {
        self.messages.push(ChatMessage {
            role: Role::Assistant,
            content: response.answer.clone(),
            response: Some(response),
        });
        self.loading = false;
    }

    /// Store a user-facing error and settle. Prior messages stay visible.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.loading = false;
    }

    /// Append an assistant-style notice that did not come from `/query`,
    /// e.g. the confirmation after a context upload.
    pub fn push_notice(&mut self, content: impl Into<String>) {
        self.messages.push(ChatMessage {
            role: Role::Assistant,
            content: content.into(),
            response: None,
        });
    }

    /// Clear the thread and any pending error.
    pub fn clear(&mut self) {
        self.messages.clear();
        self.error = None;
    }
}

use super::*;
use crate::net::types::QueryResponse;

fn response(question: &str, answer: &str) -> QueryResponse {
    QueryResponse {
        question: question.to_owned(),
        answer: answer.to_owned(),
        origin: "retrieval".to_owned(),
        origin_detail: String::new(),
        sources: Vec::new(),
    }
}

// =============================================================
// Submission gating
// =============================================================

#[test]
fn can_submit_requires_non_empty_trimmed_input() {
    let state = QueryState::default();
    assert!(state.can_submit("¿Qué es RAG?"));
    assert!(!state.can_submit(""));
    assert!(!state.can_submit("   \n\t"));
}

#[test]
fn can_submit_rejects_while_loading() {
    let mut state = QueryState::default();
    state.begin("primera pregunta");
    assert!(state.loading);
    assert!(!state.can_submit("segunda pregunta"));
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn begin_pushes_user_message_and_clears_error() {
    let mut state = QueryState::default();
    state.error = Some("anterior".to_owned());

    state.begin("¿Qué es un chunk?");

    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.messages[0].role, Role::User);
    assert_eq!(state.messages[0].content, "¿Qué es un chunk?");
    assert!(state.loading);
    assert_eq!(state.error, None);
}

#[test]
fn finish_appends_assistant_answer_and_settles() {
    let mut state = QueryState::default();
    state.begin("p");

    state.finish(response("p", "una respuesta"));

    assert_eq!(state.messages.len(), 2);
    assert_eq!(state.messages[1].role, Role::Assistant);
    assert_eq!(state.messages[1].content, "una respuesta");
    assert!(state.messages[1].response.is_some());
    assert!(!state.loading);
}

#[test]
fn fail_keeps_prior_messages_and_stores_error() {
    let mut state = QueryState::default();
    state.begin("p1");
    state.finish(response("p1", "r1"));
    state.begin("p2");

    state.fail("Error al consultar /query");

    assert_eq!(state.messages.len(), 3);
    assert_eq!(state.error.as_deref(), Some("Error al consultar /query"));
    assert!(!state.loading);
}

#[test]
fn push_notice_adds_assistant_message_without_response() {
    let mut state = QueryState::default();
    state.push_notice("He procesado correctamente el archivo: guia.pdf");
    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.messages[0].role, Role::Assistant);
    assert!(state.messages[0].response.is_none());
}

#[test]
fn clear_empties_thread_and_error() {
    let mut state = QueryState::default();
    state.begin("p");
    state.fail("e");

    state.clear();

    assert!(state.messages.is_empty());
    assert_eq!(state.error, None);
}

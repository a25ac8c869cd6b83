use super::*;
use crate::net::types::{IndexedDocument, IndexedSummary};

fn summary() -> IndexedSummary {
    IndexedSummary {
        total_chunks: 42,
        total_documents: 3,
        documents: vec![
            IndexedDocument {
                name: "a.pdf".to_owned(),
                size_bytes: Some(2048),
                file_type: Some("pdf".to_owned()),
                chunks: Some(20),
            },
            IndexedDocument {
                name: "b.txt".to_owned(),
                size_bytes: None,
                file_type: None,
                chunks: Some(12),
            },
            IndexedDocument {
                name: "c.md".to_owned(),
                size_bytes: Some(500),
                file_type: Some("md".to_owned()),
                chunks: Some(10),
            },
        ],
    }
}

// =============================================================
// Summary loading
// =============================================================

#[test]
fn default_state_has_empty_summary() {
    let state = DocumentsState::default();
    assert_eq!(state.summary.total_chunks, 0);
    assert!(state.summary.documents.is_empty());
    assert!(!state.uploading);
}

#[test]
fn load_replaces_summary() {
    let mut state = DocumentsState::default();
    state.load(summary());
    assert_eq!(state.summary.total_chunks, 42);
    assert_eq!(state.summary.total_documents, 3);
    assert_eq!(state.summary.documents.len(), 3);
}

#[test]
fn load_empty_degrades_without_error() {
    let mut state = DocumentsState::default();
    state.load(summary());

    state.load_empty();

    assert_eq!(state.summary, IndexedSummary::default());
    assert_eq!(state.error, None);
}

// =============================================================
// Upload flow
// =============================================================

#[test]
fn can_upload_requires_selection_and_idle() {
    let mut state = DocumentsState::default();
    assert!(!state.can_upload());

    state.select(Some("apuntes.pdf".to_owned()));
    assert!(state.can_upload());

    state.begin_upload();
    assert!(!state.can_upload());
}

#[test]
fn finish_upload_stores_confirmation_naming_file_and_chunks() {
    let mut state = DocumentsState::default();
    state.select(Some("apuntes.pdf".to_owned()));
    state.begin_upload();

    state.finish_upload("apuntes.pdf", 17);

    assert_eq!(
        state.message.as_deref(),
        Some("Se subió \"apuntes.pdf\" y se ingestaron 17 chunks.")
    );
    assert_eq!(state.selected, None);
    assert!(!state.uploading);
}

#[test]
fn fail_upload_keeps_summary_and_clears_slot() {
    let mut state = DocumentsState::default();
    state.load(summary());
    state.select(Some("apuntes.pdf".to_owned()));
    state.begin_upload();

    state.fail_upload("Error al subir el documento");

    assert_eq!(state.error.as_deref(), Some("Error al subir el documento"));
    assert_eq!(state.selected, None);
    assert!(!state.uploading);
    // The previously fetched list stays visible.
    assert_eq!(state.summary.total_documents, 3);
}

#[test]
fn begin_upload_clears_previous_message_and_error() {
    let mut state = DocumentsState::default();
    state.message = Some("m".to_owned());
    state.error = Some("e".to_owned());
    state.select(Some("x.pdf".to_owned()));

    state.begin_upload();

    assert_eq!(state.message, None);
    assert_eq!(state.error, None);
    assert!(state.uploading);
}

use super::*;
use crate::net::types::PlanResponse;

fn plan_response() -> PlanResponse {
    PlanResponse {
        topic: "Algoritmos de ordenamiento".to_owned(),
        start_date: "2025-11-22".to_owned(),
        sessions: Vec::new(),
    }
}

// =============================================================
// Generation gating
// =============================================================

#[test]
fn topic_mode_requires_non_empty_topic() {
    let mut state = PlanState::default();
    assert_eq!(state.mode, PlanSource::Topic);
    assert!(!state.can_generate());

    state.topic = "   ".to_owned();
    assert!(!state.can_generate());

    state.topic = "Estructuras de datos".to_owned();
    assert!(state.can_generate());
}

#[test]
fn file_mode_requires_uploaded_file() {
    let mut state = PlanState {
        mode: PlanSource::File,
        topic: "tema escrito que no cuenta".to_owned(),
        ..PlanState::default()
    };
    assert!(!state.can_generate());

    state.finish_upload("guia.pdf");
    assert!(state.can_generate());
}

#[test]
fn cannot_generate_while_loading() {
    let mut state = PlanState {
        topic: "tema".to_owned(),
        ..PlanState::default()
    };
    state.begin_generate();
    assert!(!state.can_generate());
}

// =============================================================
// Upload flow
// =============================================================

#[test]
fn finish_upload_seeds_topic_from_filename() {
    let mut state = PlanState {
        mode: PlanSource::File,
        ..PlanState::default()
    };
    state.begin_upload();
    state.finish_upload("apuntes.pdf");

    assert_eq!(state.uploaded_file.as_deref(), Some("apuntes.pdf"));
    assert_eq!(state.topic, "Plan basado en: apuntes.pdf");
    assert!(!state.uploading);
}

#[test]
fn failed_upload_preserves_previous_uploaded_file() {
    let mut state = PlanState {
        mode: PlanSource::File,
        ..PlanState::default()
    };
    state.begin_upload();
    state.finish_upload("apuntes.pdf");

    state.begin_upload();
    state.fail_upload("Error al subir el documento");

    assert_eq!(state.uploaded_file.as_deref(), Some("apuntes.pdf"));
    assert_eq!(state.topic, "Plan basado en: apuntes.pdf");
    assert_eq!(state.error.as_deref(), Some("Error al subir el documento"));
    assert!(state.can_generate());
}

// =============================================================
// Generation flow
// =============================================================

#[test]
fn finish_generate_stores_plan_and_settles() {
    let mut state = PlanState {
        topic: "tema".to_owned(),
        ..PlanState::default()
    };
    state.begin_generate();
    state.finish_generate(plan_response());

    assert!(!state.loading);
    assert_eq!(
        state.plan.as_ref().map(|p| p.topic.as_str()),
        Some("Algoritmos de ordenamiento")
    );
}

#[test]
fn fail_generate_keeps_previous_plan_visible() {
    let mut state = PlanState {
        topic: "tema".to_owned(),
        ..PlanState::default()
    };
    state.begin_generate();
    state.finish_generate(plan_response());

    state.begin_generate();
    state.fail_generate("Error al generar el plan de repaso");

    assert!(state.plan.is_some());
    assert_eq!(
        state.error.as_deref(),
        Some("Error al generar el plan de repaso")
    );
}

// =============================================================
// Request building
// =============================================================

#[test]
fn request_trims_topic_and_omits_blank_optionals() {
    let state = PlanState {
        topic: "  tema con espacios  ".to_owned(),
        start_date: String::new(),
        email: "   ".to_owned(),
        ..PlanState::default()
    };
    let req = state.request();

    assert_eq!(req.topic, "tema con espacios");
    assert_eq!(req.start_date, None);
    assert_eq!(req.email, None);
}

#[test]
fn request_includes_optionals_when_present() {
    let state = PlanState {
        topic: "tema".to_owned(),
        start_date: "2025-11-22".to_owned(),
        email: "yo@ejemplo.com".to_owned(),
        ..PlanState::default()
    };
    let req = state.request();

    assert_eq!(req.start_date.as_deref(), Some("2025-11-22"));
    assert_eq!(req.email.as_deref(), Some("yo@ejemplo.com"));
}

use super::*;

#[test]
fn default_state_is_idle_and_empty() {
    let state = OcrState::default();
    assert!(!state.loading);
    assert_eq!(state.result, None);
    assert_eq!(state.error, None);
}

#[test]
fn begin_clears_previous_result_and_error() {
    let mut state = OcrState::default();
    state.finish("texto anterior".to_owned());
    state.error = Some("e".to_owned());

    state.begin();

    assert!(state.loading);
    assert_eq!(state.result, None);
    assert_eq!(state.error, None);
}

#[test]
fn finish_with_empty_text_uses_fallback_message() {
    let mut state = OcrState::default();
    state.begin();

    state.finish(String::new());

    assert_eq!(state.result.as_deref(), Some(NO_TEXT_DETECTED));
    assert!(!state.loading);
}

#[test]
fn finish_with_text_stores_it_verbatim() {
    let mut state = OcrState::default();
    state.begin();

    state.finish("Apuntes de clase".to_owned());

    assert_eq!(state.result.as_deref(), Some("Apuntes de clase"));
}

#[test]
fn fail_settles_with_error_and_no_result() {
    let mut state = OcrState::default();
    state.begin();

    state.fail("Error al procesar la imagen");

    assert!(!state.loading);
    assert_eq!(state.result, None);
    assert_eq!(state.error.as_deref(), Some("Error al procesar la imagen"));
}

//! # mentor-ui
//!
//! Leptos + WASM front-end for the Mentor IA study-assistant backend.
//! Every screen is a thin view over one REST capability: retrieval-augmented
//! question answering, document upload and indexing, image OCR, and
//! spaced-repetition plan generation. The RAG pipeline, OCR engine, vector
//! index, and plan logic all live in the backend service; this crate only
//! does presentation and transport.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: attach the reactive app to the server-rendered DOM.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(crate::app::App);
}

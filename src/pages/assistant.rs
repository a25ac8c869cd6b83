//! Home page: sidebar tabs (context, documents, OCR) plus the chat panel.

use leptos::prelude::*;

use crate::components::document_manager::DocumentManager;
use crate::components::ocr_panel::OcrPanel;
use crate::components::query_panel::{QueryPanel, submit_query};
use crate::state::documents::DocumentsState;
use crate::state::query::QueryState;
use crate::state::ui::SidebarTab;

const EXAMPLE_QUERIES: [&str; 3] = [
    "¿Cuál es la historia de C y C++?",
    "Dame las técnicas principales del prompt engineering",
    "Dame algunos atajos básicos de la terminal de Linux",
];

#[component]
pub fn AssistantPage() -> impl IntoView {
    let docs = expect_context::<RwSignal<DocumentsState>>();

    // Fetch the indexed summary on mount. A failed fetch degrades to the
    // empty summary rather than surfacing an error banner.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::indexed_documents().await {
            Ok(summary) => docs.update(|d| d.load(summary)),
            Err(_) => docs.update(|d| d.load_empty()),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = docs;

    let tab = RwSignal::new(SidebarTab::default());

    let tab_button = move |target: SidebarTab, label: &'static str| {
        view! {
            <button
                class="assistant-page__tab"
                class:assistant-page__tab--active=move || tab.get() == target
                on:click=move |_| tab.set(target)
            >
                {label}
            </button>
        }
    };

    view! {
        <div class="assistant-page">
            <aside class="assistant-page__sidebar">
                <div class="assistant-page__tabs">
                    {tab_button(SidebarTab::Context, "Contexto")}
                    {tab_button(SidebarTab::Documents, "Documentos")}
                    {tab_button(SidebarTab::Ocr, "OCR")}
                </div>
                <div class="assistant-page__tab-content">
                    {move || match tab.get() {
                        SidebarTab::Context => view! { <ContextTab/> }.into_any(),
                        SidebarTab::Documents => view! { <DocumentManager/> }.into_any(),
                        SidebarTab::Ocr => view! { <OcrPanel/> }.into_any(),
                    }}
                </div>
            </aside>

            <section class="assistant-page__chat">
                <QueryPanel/>
            </section>
        </div>
    }
}

/// Context tab: upload study material into the index and offer example
/// questions. A successful upload drops a confirmation into the chat
/// thread so the user knows the material is ready.
#[component]
fn ContextTab() -> impl IntoView {
    let query = expect_context::<RwSignal<QueryState>>();

    let uploading = RwSignal::new(false);
    let upload_error = RwSignal::new(None::<String>);
    let uploaded_files = RwSignal::new(Vec::<String>::new());
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let on_file_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input: web_sys::HtmlInputElement = event_target(&ev);
            let Some(file) = input.files().and_then(|list| list.get(0)) else {
                return;
            };
            if uploading.get_untracked() {
                return;
            }
            uploading.set(true);
            upload_error.set(None);

            leptos::task::spawn_local(async move {
                match crate::net::api::upload_document(&file).await {
                    Ok(response) => {
                        uploaded_files.update(|files| files.push(response.filename.clone()));
                        query.update(|q| {
                            q.push_notice(format!(
                                "He procesado correctamente el archivo: {}. Ahora puedes \
                                 hacerme preguntas sobre su contenido.",
                                response.filename,
                            ));
                        });
                    }
                    Err(message) => upload_error.set(Some(message)),
                }
                uploading.set(false);
                input.set_value("");
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = &ev;
    };

    let on_pick = move |_| {
        #[cfg(feature = "hydrate")]
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    view! {
        <div class="context-tab">
            <input
                type="file"
                class="context-tab__file-input"
                accept=".pdf,.txt,.md,.png,.jpg,.jpeg"
                node_ref=input_ref
                on:change=on_file_change
            />
            <button
                class="btn btn--outline"
                on:click=on_pick
                disabled=move || uploading.get()
            >
                {move || if uploading.get() { "Subiendo..." } else { "Subir Documento" }}
            </button>
            <p class="context-tab__hint">"Soporta PDF, TXT, MD e Imágenes."</p>

            {move || {
                upload_error.get().map(|message| {
                    view! {
                        <div class="alert alert--error">
                            <span class="alert__title">"Error"</span>
                            {message}
                        </div>
                    }
                })
            }}

            <Show when=move || !uploaded_files.get().is_empty()>
                <div class="context-tab__files">
                    <h4>"Archivos Activos"</h4>
                    {move || {
                        uploaded_files
                            .get()
                            .into_iter()
                            .map(|name| view! { <p class="context-tab__file">{name}</p> })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>

            <div class="context-tab__suggestions">
                <h4>"Sugerencias"</h4>
                {EXAMPLE_QUERIES
                    .into_iter()
                    .map(|suggestion| {
                        view! {
                            <button
                                class="context-tab__suggestion"
                                on:click=move |_| submit_query(query, suggestion)
                            >
                                {suggestion}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

//! Indexed-document list with upload and re-ingestion.

use leptos::prelude::*;

use crate::state::documents::DocumentsState;
use crate::util::format::{size_label, type_label};

/// Document manager panel: summary totals, per-document cards, and the
/// upload flow. Uploading re-ingests on the backend and then re-fetches
/// the summary.
#[component]
pub fn DocumentManager() -> impl IntoView {
    let docs = expect_context::<RwSignal<DocumentsState>>();

    let input_ref = NodeRef::<leptos::html::Input>::new();

    let on_file_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input: web_sys::HtmlInputElement = event_target(&ev);
            let name = input.files().and_then(|list| list.get(0)).map(|f| f.name());
            docs.update(|d| d.select(name));
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = &ev;
    };

    let on_upload = move |_| {
        let mut accepted = false;
        docs.update(|d| {
            if d.can_upload() {
                d.begin_upload();
                accepted = true;
            }
        });
        if !accepted {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let Some(file) = input_ref
                .get()
                .and_then(|input| input.files())
                .and_then(|list| list.get(0))
            else {
                docs.update(|d| d.fail_upload("Error al subir el documento"));
                return;
            };

            leptos::task::spawn_local(async move {
                match crate::net::api::upload_document(&file).await {
                    Ok(response) => {
                        docs.update(|d| {
                            d.finish_upload(&response.filename, response.ingested_chunks);
                        });
                        // Refresh the summary so the new chunks show up.
                        if let Ok(summary) = crate::net::api::indexed_documents().await {
                            docs.update(|d| d.load(summary));
                        }
                    }
                    Err(message) => docs.update(|d| d.fail_upload(message)),
                }
                if let Some(input) = input_ref.get() {
                    input.set_value("");
                }
            });
        }
    };

    view! {
        <div class="document-manager">
            <h3 class="document-manager__title">"Documentos Indexados"</h3>

            <div class="document-manager__upload">
                <input
                    type="file"
                    class="document-manager__file-input"
                    accept=".pdf,.txt,.md"
                    node_ref=input_ref
                    on:change=on_file_change
                />
                <button
                    class="btn btn--primary"
                    on:click=on_upload
                    disabled=move || !docs.get().can_upload()
                >
                    {move || {
                        if docs.get().uploading {
                            "Subiendo e indexando..."
                        } else {
                            "Subir e indexar"
                        }
                    }}
                </button>
            </div>

            {move || {
                docs.get().message.map(|message| {
                    view! { <p class="document-manager__message">{message}</p> }
                })
            }}
            {move || {
                docs.get().error.map(|message| {
                    view! {
                        <div class="alert alert--error">
                            <span class="alert__title">"Error"</span>
                            {message}
                        </div>
                    }
                })
            }}

            {move || {
                let summary = docs.get().summary;
                if summary.documents.is_empty() {
                    view! {
                        <p class="document-manager__empty">"No hay documentos indexados"</p>
                    }
                        .into_any()
                } else {
                    summary
                        .documents
                        .iter()
                        .map(|doc| {
                            let meta = format!(
                                "{} chunks · {}",
                                doc.chunks.unwrap_or(0),
                                type_label(doc.file_type.as_deref()),
                            );
                            let size = format!("Tamaño: {}", size_label(doc.size_bytes));
                            view! {
                                <div class="document-manager__card">
                                    <p class="document-manager__name">{doc.name.clone()}</p>
                                    <p class="document-manager__meta">{meta}</p>
                                    <p class="document-manager__meta">{size}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }
            }}

            <div class="document-manager__totals">
                <p>
                    "Documentos indexados: "
                    <span class="document-manager__count">
                        {move || docs.get().summary.total_documents}
                    </span>
                </p>
                <p>
                    "Total de chunks: "
                    <span class="document-manager__count">
                        {move || docs.get().summary.total_chunks}
                    </span>
                </p>
            </div>
        </div>
    }
}

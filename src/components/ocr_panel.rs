//! Image OCR panel: pick a PNG/JPEG, show the extracted text, copy it.

use leptos::prelude::*;

use crate::state::ocr::OcrState;

/// OCR panel. Selecting an image immediately issues the OCR call; the
/// picker button stays disabled while a call is pending.
#[component]
pub fn OcrPanel() -> impl IntoView {
    let ocr = expect_context::<RwSignal<OcrState>>();

    let input_ref = NodeRef::<leptos::html::Input>::new();

    let on_file_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input: web_sys::HtmlInputElement = event_target(&ev);
            let Some(file) = input.files().and_then(|list| list.get(0)) else {
                return;
            };

            let mut accepted = false;
            ocr.update(|o| {
                if !o.loading {
                    o.begin();
                    accepted = true;
                }
            });
            if !accepted {
                return;
            }

            leptos::task::spawn_local(async move {
                match crate::net::api::ocr_image(&file).await {
                    Ok(response) => ocr.update(|o| o.finish(response.text)),
                    Err(message) => ocr.update(|o| o.fail(message)),
                }
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

    let on_copy = move |_| {
        let text = ocr.get().result.unwrap_or_default();
        if text.is_empty() {
            return;
        }
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if !crate::util::clipboard::copy_text(&text).await {
                log::error!("no se pudo copiar el texto extraído al portapapeles");
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = text;
    };

    view! {
        <div class="ocr-panel">
            <h3 class="ocr-panel__title">"OCR de Imágenes"</h3>

            <input
                type="file"
                class="ocr-panel__file-input"
                accept=".png,.jpg,.jpeg"
                node_ref=input_ref
                on:change=on_file_change
            />
            <button
                class="btn btn--outline"
                on:click=on_pick
                disabled=move || ocr.get().loading
            >
                {move || if ocr.get().loading { "Procesando..." } else { "Subir Imagen" }}
            </button>
            <p class="ocr-panel__hint">"Soporta PNG, JPG, JPEG."</p>

            {move || {
                ocr.get().error.map(|message| {
                    view! {
                        <div class="alert alert--error">
                            <span class="alert__title">"Error"</span>
                            {message}
                        </div>
                    }
                })
            }}

            {move || {
                ocr.get().result.map(|text| {
                    view! {
                        <div class="ocr-panel__result">
                            <div class="ocr-panel__result-header">
                                <h4>"Texto Extraído"</h4>
                                <button class="btn btn--ghost" on:click=on_copy>
                                    "Copiar"
                                </button>
                            </div>
                            <p class="ocr-panel__text">{text}</p>
                        </div>
                    }
                })
            }}
        </div>
    }
}

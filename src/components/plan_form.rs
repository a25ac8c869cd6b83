//! Configuration form for generating a spaced-repetition plan.

use leptos::prelude::*;

use crate::state::plan::{PlanSource, PlanState};

/// Plan form: topic-or-file source selection, optional start date and
/// delivery email, and the generate action.
#[component]
pub fn PlanForm() -> impl IntoView {
    let plan = expect_context::<RwSignal<PlanState>>();

    let input_ref = NodeRef::<leptos::html::Input>::new();

    let mode = move || plan.get().mode;

    let set_topic_mode = move |_| plan.update(|p| p.mode = PlanSource::Topic);
    let set_file_mode = move |_| plan.update(|p| p.mode = PlanSource::File);

    // File mode uploads the reference file as soon as it is chosen; plan
    // generation stays disabled until the upload succeeds.
    let on_file_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input: web_sys::HtmlInputElement = event_target(&ev);
            let Some(file) = input.files().and_then(|list| list.get(0)) else {
                return;
            };

            let mut accepted = false;
            plan.update(|p| {
                if !p.uploading {
                    p.begin_upload();
                    accepted = true;
                }
            });
            if !accepted {
                return;
            }

            leptos::task::spawn_local(async move {
                match crate::net::api::upload_document(&file).await {
                    Ok(response) => plan.update(|p| p.finish_upload(&response.filename)),
                    Err(message) => plan.update(|p| p.fail_upload(message)),
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

    let on_generate = move |_| {
        let mut request = None;
        plan.update(|p| {
            if p.can_generate() {
                p.begin_generate();
                request = Some(p.request());
            }
        });
        let Some(request) = request else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::create_plan(&request).await {
                Ok(response) => plan.update(|p| p.finish_generate(response)),
                Err(message) => plan.update(|p| p.fail_generate(message)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    view! {
        <div class="plan-form">
            <h2 class="plan-form__title">"Configurar Plan"</h2>
            <p class="plan-form__subtitle">"Genera un cronograma de repaso espaciado."</p>

            <fieldset class="plan-form__source">
                <legend>"Fuente del Plan"</legend>
                <label class="plan-form__radio">
                    <input
                        type="radio"
                        name="plan-source"
                        prop:checked=move || mode() == PlanSource::Topic
                        on:change=set_topic_mode
                    />
                    "Tema"
                </label>
                <label class="plan-form__radio">
                    <input
                        type="radio"
                        name="plan-source"
                        prop:checked=move || mode() == PlanSource::File
                        on:change=set_file_mode
                    />
                    "Archivo"
                </label>
            </fieldset>

            {move || match mode() {
                PlanSource::Topic => {
                    view! {
                        <label class="plan-form__label">
                            "Tema de estudio"
                            <input
                                class="plan-form__input"
                                type="text"
                                placeholder="Ej: Algoritmos de ordenamiento"
                                prop:value=move || plan.get().topic
                                on:input=move |ev| {
                                    plan.update(|p| p.topic = event_target_value(&ev));
                                }
                            />
                        </label>
                    }
                        .into_any()
                }
                PlanSource::File => {
                    view! {
                        <div class="plan-form__upload">
                            <span class="plan-form__label">"Subir Material"</span>
                            <input
                                type="file"
                                class="plan-form__file-input"
                                accept=".pdf,.txt,.md"
                                node_ref=input_ref
                                on:change=on_file_change
                            />
                            <button
                                type="button"
                                class="btn btn--outline"
                                on:click=on_pick
                                disabled=move || plan.get().uploading
                            >
                                {move || {
                                    if plan.get().uploading {
                                        "Subiendo..."
                                    } else {
                                        "Seleccionar PDF/TXT"
                                    }
                                }}
                            </button>
                            {move || {
                                plan.get().uploaded_file.map(|name| {
                                    view! {
                                        <p class="plan-form__uploaded">{name}</p>
                                    }
                                })
                            }}
                        </div>
                    }
                        .into_any()
                }
            }}

            <label class="plan-form__label">
                "Fecha de inicio (Opcional)"
                <input
                    class="plan-form__input"
                    type="date"
                    prop:value=move || plan.get().start_date
                    on:input=move |ev| {
                        plan.update(|p| p.start_date = event_target_value(&ev));
                    }
                />
            </label>

            <label class="plan-form__label">
                "Email para envío automático (Opcional)"
                <input
                    class="plan-form__input"
                    type="email"
                    placeholder="tu-email@ejemplo.com"
                    prop:value=move || plan.get().email
                    on:input=move |ev| {
                        plan.update(|p| p.email = event_target_value(&ev));
                    }
                />
                <span class="plan-form__hint">
                    "Si proporcionas un email, el plan se enviará automáticamente."
                </span>
            </label>

            <button
                class="btn btn--primary plan-form__submit"
                on:click=on_generate
                disabled=move || !plan.get().can_generate()
            >
                {move || {
                    if plan.get().loading {
                        "Generando Plan..."
                    } else {
                        "Generar Plan de Repaso"
                    }
                }}
            </button>
        </div>
    }
}

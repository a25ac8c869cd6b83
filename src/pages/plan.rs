//! Plan generator page: configuration form and generated timeline.

use leptos::prelude::*;

use crate::components::plan_form::PlanForm;
use crate::components::plan_timeline::PlanTimeline;
use crate::state::plan::PlanState;

#[component]
pub fn PlanPage() -> impl IntoView {
    let plan = expect_context::<RwSignal<PlanState>>();

    view! {
        <div class="plan-page">
            <div class="plan-page__config">
                <PlanForm/>
                <div class="plan-page__how">
                    <h4>"¿Cómo funciona?"</h4>
                    <p>
                        "Este sistema utiliza la técnica de repaso espaciado: sesiones de \
                         estudio distribuidas en el tiempo para optimizar tu retención a \
                         largo plazo."
                    </p>
                </div>
            </div>

            <div class="plan-page__result">
                {move || {
                    plan.get().error.map(|message| {
                        view! {
                            <div class="alert alert--error">
                                <span class="alert__title">"Error"</span>
                                {message}
                            </div>
                        }
                    })
                }}
                {move || {
                    let state = plan.get();
                    if state.loading {
                        view! { <p class="plan-page__loading">"Generando Plan..."</p> }
                            .into_any()
                    } else if let Some(generated) = state.plan {
                        view! { <PlanTimeline plan=generated/> }.into_any()
                    } else {
                        view! {
                            <div class="plan-page__empty">
                                <p>"Planifica tu éxito"</p>
                                <p>
                                    "Configura un tema o sube un archivo para generar tu \
                                     cronograma de estudio personalizado."
                                </p>
                            </div>
                        }
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}

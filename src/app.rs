//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::pages::{assistant::AssistantPage, plan::PlanPage};
use crate::state::{
    documents::DocumentsState, ocr::OcrState, plan::PlanState, query::QueryState,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides one reactive state context per panel and sets up client-side
/// routing. Panels share nothing else, so a failed request in one leaves
/// the others untouched.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let query = RwSignal::new(QueryState::default());
    let documents = RwSignal::new(DocumentsState::default());
    let ocr = RwSignal::new(OcrState::default());
    let plan = RwSignal::new(PlanState::default());

    provide_context(query);
    provide_context(documents);
    provide_context(ocr);
    provide_context(plan);

    view! {
        <Stylesheet id="leptos" href="/pkg/mentor-ui.css"/>
        <Title text="Mentor IA"/>

        <Router>
            <NavBar/>
            <Routes fallback=|| "Página no encontrada.".into_view()>
                <Route path=StaticSegment("") view=AssistantPage/>
                <Route path=StaticSegment("plan") view=PlanPage/>
            </Routes>
        </Router>
    }
}

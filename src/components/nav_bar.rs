//! Top navigation between the assistant and the plan generator.

use leptos::prelude::*;

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <nav class="nav-bar">
            <span class="nav-bar__brand">"Mentor IA"</span>
            <div class="nav-bar__links">
                <a href="/" class="nav-bar__link">
                    "Asistente"
                </a>
                <a href="/plan" class="nav-bar__link">
                    "Plan de repaso"
                </a>
            </div>
        </nav>
    }
}

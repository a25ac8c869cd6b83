//! Chat-style panel for asking questions against the indexed material.

use leptos::prelude::*;

use crate::components::sources_list::SourcesList;
use crate::state::query::{QueryState, Role};

/// Submit a question through the shared query state.
///
/// The loading flag is checked and set in the same synchronous update, so
/// a second submission while a query is in flight issues no call.
pub fn submit_query(query: RwSignal<QueryState>, text: &str) {
    let text = text.trim().to_owned();
    let mut accepted = false;
    query.update(|q| {
        if q.can_submit(&text) {
            q.begin(&text);
            accepted = true;
        }
    });
    if !accepted {
        return;
    }

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::ask_query(&text).await {
            Ok(response) => query.update(|q| q.finish(response)),
            Err(message) => query.update(|q| q.fail(message)),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = text;
}

/// Question/answer panel: message thread, loading indicator, error alert,
/// input row, and a clear-history action.
#[component]
pub fn QueryPanel() -> impl IntoView {
    let query = expect_context::<RwSignal<QueryState>>();

    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the thread scrolled to the newest message.
    Effect::new(move || {
        let _ = query.get().messages.len();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let text = input.get();
        if query.get_untracked().can_submit(&text) {
            submit_query(query, &text);
            input.set(String::new());
        }
    };

    let on_send = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let on_clear = move |_| query.update(QueryState::clear);

    view! {
        <div class="query-panel">
            <div class="query-panel__header">
                <span class="query-panel__title">"Chat con Mentor IA"</span>
                <Show when=move || !query.get().messages.is_empty()>
                    <button class="btn btn--ghost" on:click=on_clear title="Borrar historial">
                        "Borrar historial"
                    </button>
                </Show>
            </div>

            <div class="query-panel__messages" node_ref=messages_ref>
                {move || {
                    let state = query.get();
                    if state.messages.is_empty() {
                        view! {
                            <div class="query-panel__empty">
                                <p>"¿En qué puedo ayudarte hoy?"</p>
                                <p>"Sube un archivo o haz una pregunta para comenzar."</p>
                            </div>
                        }
                            .into_any()
                    } else {
                        state
                            .messages
                            .iter()
                            .map(|msg| {
                                let is_user = msg.role == Role::User;
                                let content = msg.content.clone();
                                let sources = msg
                                    .response
                                    .as_ref()
                                    .map(|r| r.sources.clone())
                                    .filter(|s| !s.is_empty());
                                view! {
                                    <div
                                        class="query-panel__message"
                                        class:query-panel__message--user=is_user
                                    >
                                        {sources.map(|s| view! { <SourcesList sources=s/> })}
                                        <p class="query-panel__content">{content}</p>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                            .into_any()
                    }
                }}
                {move || {
                    query
                        .get()
                        .loading
                        .then(|| view! { <div class="query-panel__loading">"Pensando..."</div> })
                }}
                {move || {
                    query.get().error.map(|message| {
                        view! {
                            <div class="alert alert--error">
                                <span class="alert__title">"Error"</span>
                                {message}
                            </div>
                        }
                    })
                }}
            </div>

            <div class="query-panel__input-row">
                <textarea
                    class="query-panel__input"
                    placeholder="Escribe tu pregunta aquí..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                ></textarea>
                <button
                    class="btn btn--primary"
                    on:click=on_send
                    disabled=move || !query.get().can_submit(&input.get())
                >
                    "Enviar"
                </button>
            </div>
            <p class="query-panel__disclaimer">
                "El mentor puede cometer errores. Verifica la información importante."
            </p>
        </div>
    }
}

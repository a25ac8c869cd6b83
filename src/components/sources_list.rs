//! Provenance list rendered under an answer bubble.

use leptos::prelude::*;

use crate::net::types::SourceFragment;
use crate::util::format::source_name;

/// Compact per-fragment provenance lines: file name, chunk index, score.
#[component]
pub fn SourcesList(sources: Vec<SourceFragment>) -> impl IntoView {
    view! {
        <div class="sources-list">
            {sources
                .into_iter()
                .map(|source| {
                    let line = format!(
                        "{} · chunk {} · score: {:.3}",
                        source_name(&source.source_path),
                        source.chunk_index,
                        source.score,
                    );
                    view! { <div class="sources-list__item">{line}</div> }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

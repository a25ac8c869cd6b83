//! Copy-to-clipboard with a legacy fallback.
//!
//! Prefers the async Clipboard API. When it is unavailable (older engines,
//! insecure contexts) the text is routed through a temporary off-screen
//! textarea and the legacy `execCommand("copy")` path. Requires a browser
//! environment; the SSR build is a no-op returning `false`.

#![allow(clippy::unused_async)]

/// Copy `text` to the system clipboard. Returns whether the copy succeeded.
pub async fn copy_text(text: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };

        let clipboard = window.navigator().clipboard();
        if !wasm_bindgen::JsValue::from(clipboard.clone()).is_undefined() {
            if wasm_bindgen_futures::JsFuture::from(clipboard.write_text(text))
                .await
                .is_ok()
            {
                return true;
            }
        }

        legacy_copy(text)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = text;
        false
    }
}

/// Off-screen textarea + `execCommand("copy")` fallback.
#[cfg(feature = "hydrate")]
fn legacy_copy(text: &str) -> bool {
    use wasm_bindgen::JsCast;

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return false;
    };
    let Some(body) = document.body() else {
        return false;
    };
    let Ok(element) = document.create_element("textarea") else {
        return false;
    };
    let Ok(textarea) = element.dyn_into::<web_sys::HtmlTextAreaElement>() else {
        return false;
    };

    textarea.set_value(text);
    // Keep the element out of view without display:none, which would make
    // it unselectable.
    let style = textarea.style();
    let _ = style.set_property("position", "fixed");
    let _ = style.set_property("left", "-9999px");

    if body.append_child(&textarea).is_err() {
        return false;
    }
    textarea.select();

    let copied = document
        .dyn_ref::<web_sys::HtmlDocument>()
        .and_then(|doc| doc.exec_command("copy").ok())
        .unwrap_or(false);

    let _ = body.remove_child(&textarea);
    copied
}

//! Clipboard writes for the "Copy" buttons under results.

/// Copy `text` to the system clipboard. No-op outside the browser.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn copy_text(text: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        // Older web-sys releases return `Option<Clipboard>` here.
        let clipboard: Option<web_sys::Clipboard> = window.navigator().clipboard().into();
        let Some(clipboard) = clipboard else {
            log::warn!("clipboard unavailable");
            return;
        };
        let promise = clipboard.write_text(text);
        leptos::task::spawn_local(async move {
            if let Err(e) = wasm_bindgen_futures::JsFuture::from(promise).await {
                log::warn!("clipboard write failed: {e:?}");
            }
        });
    }
}

//! Client-side JSON export of the visible allotment rows.
//!
//! SYSTEM CONTEXT
//! ==============
//! Export is a pure side effect: it serializes whatever the table currently
//! shows and hands it to the browser as a download. No view state changes.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use chrono::NaiveDateTime;

use crate::net::types::AllotmentRecord;

const EXPORT_PREFIX: &str = "exam-allotment";

/// Delay before the object URL is released, so the download can start.
pub const REVOKE_DELAY_MS: u32 = 1_000;

/// Timestamped download name, e.g. `exam-allotment-20251231-142501.json`.
pub fn export_filename(now: NaiveDateTime) -> String {
    format!("{EXPORT_PREFIX}-{}.json", now.format("%Y%m%d-%H%M%S"))
}

/// Pretty-printed JSON array of `records`.
///
/// # Errors
///
/// Returns the serializer error if a record cannot be encoded.
pub fn export_payload(records: &[AllotmentRecord]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(records)
}

/// Trigger a browser download of `payload` as `filename`. No-op off-browser.
///
/// The anchor is attached to `body` for the click and removed right after.
/// The object URL outlives the click by `REVOKE_DELAY_MS`.
pub fn download_json(filename: &str, payload: &str) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(payload));
        let opts = web_sys::BlobPropertyBag::new();
        opts.set_type("application/json");
        let Ok(blob) = web_sys::Blob::new_with_str_sequence_and_options(&parts, &opts) else {
            log::warn!("export: blob creation failed");
            return;
        };
        let Ok(url) = web_sys::Url::create_object_url_with_blob(&blob) else {
            log::warn!("export: object url creation failed");
            return;
        };
        let Some(body) = document.body() else {
            let _ = web_sys::Url::revoke_object_url(&url);
            return;
        };
        if let Ok(el) = document.create_element("a") {
            if let Ok(anchor) = el.dyn_into::<web_sys::HtmlAnchorElement>() {
                anchor.set_href(&url);
                anchor.set_download(filename);
                // Detached anchors are ignored by some engines.
                if body.append_child(&anchor).is_ok() {
                    anchor.click();
                    anchor.remove();
                }
            }
        }
        gloo_timers::callback::Timeout::new(REVOKE_DELAY_MS, move || {
            let _ = web_sys::Url::revoke_object_url(&url);
        })
        .forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (filename, payload);
    }
}

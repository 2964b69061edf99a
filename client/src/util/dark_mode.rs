//! Dark-mode preference for the portal chrome.
//!
//! The stored `localStorage` value wins; without one the OS color-scheme
//! preference decides. The theme is applied as `data-theme` on `<html>`.
//! SSR paths no-op and render light.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "portal_dark";

/// Decide the effective preference from a stored value and the OS hint.
pub fn resolve_preference(stored: Option<&str>, system_prefers_dark: bool) -> bool {
    match stored {
        Some("true") => true,
        Some("false") => false,
        _ => system_prefers_dark,
    }
}

/// Attribute value for `data-theme`.
pub fn theme_name(enabled: bool) -> &'static str {
    if enabled { "dark" } else { "light" }
}

/// Read the preference from the browser.
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        let stored = window
            .local_storage()
            .ok()
            .flatten()
            .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten());
        let system = window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches());
        resolve_preference(stored.as_deref(), system)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply the theme attribute to the document element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = el.set_attribute("data-theme", theme_name(enabled));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Flip the preference, apply it, and persist it. Returns the new value.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(STORAGE_KEY, if next { "true" } else { "false" });
        }
    }
    next
}

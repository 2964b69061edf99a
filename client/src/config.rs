//! Explicit portal configuration resolved once at startup.
//!
//! SYSTEM CONTEXT
//! ==============
//! The API base URL and bearer token used to be read from ambient globals at
//! each call site. They are now resolved once into a `PortalConfig` that the
//! app provides through context and passes to network helpers explicitly.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Storage keys searched for a bearer token, highest precedence first.
pub const TOKEN_STORAGE_KEYS: [&str; 3] = ["authToken", "token", "accessToken"];

/// Window property that overrides the build-time API base.
pub const API_BASE_WINDOW_KEY: &str = "__PORTAL_API_BASE__";

/// Path of the exam-allotment endpoint, relative to the API base.
pub const ALLOTMENT_PATH: &str = "/api/exam-allotment";

/// Build-time default API base (`PORTAL_API_BASE`), if one was set.
pub const BUILD_API_BASE: Option<&str> = option_env!("PORTAL_API_BASE");

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PortalConfig {
    /// API origin without a trailing slash. Empty means same-origin.
    pub api_base: String,
    /// Bearer token for authenticated requests.
    pub token: Option<String>,
}

impl PortalConfig {
    /// Resolve configuration from the browser window and `localStorage`.
    /// Outside the browser only the build-time default applies.
    pub fn from_browser() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let window = web_sys::window();
            let override_base = window.as_ref().and_then(|w| {
                js_sys::Reflect::get(w, &wasm_bindgen::JsValue::from_str(API_BASE_WINDOW_KEY))
                    .ok()
                    .and_then(|v| v.as_string())
            });
            let storage = window.and_then(|w| w.local_storage().ok().flatten());
            let token = resolve_token(|key| storage.as_ref().and_then(|s| s.get_item(key).ok().flatten()));
            Self { api_base: resolve_api_base(override_base.as_deref(), BUILD_API_BASE), token }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self { api_base: resolve_api_base(None, BUILD_API_BASE), token: None }
        }
    }

    /// Absolute (or same-origin relative) URL of the allotment endpoint.
    pub fn allotment_url(&self) -> String {
        format!("{}{ALLOTMENT_PATH}", self.api_base)
    }

    /// `Authorization` header value, when a token is configured.
    pub fn bearer(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {t}"))
    }
}

/// Pick the API base: a non-blank window override wins over the build-time
/// default. Trailing slashes are trimmed.
pub fn resolve_api_base(window_override: Option<&str>, build_default: Option<&str>) -> String {
    [window_override, build_default]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|v| !v.is_empty())
        .unwrap_or_default()
        .trim_end_matches('/')
        .to_owned()
}

/// Return the first non-blank token found under `TOKEN_STORAGE_KEYS`.
pub fn resolve_token<F>(lookup: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    TOKEN_STORAGE_KEYS
        .iter()
        .filter_map(|key| lookup(key))
        .map(|v| v.trim().to_owned())
        .find(|v| !v.is_empty())
}

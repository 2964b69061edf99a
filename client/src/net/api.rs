//! REST helpers for the exam-allotment endpoint.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): returns `FetchError::Unavailable` since the endpoint is
//! only reachable from the browser session holding the token.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is reported as a typed `FetchOutcome::Failed` rather than
//! collapsed into "no data". Callers decide whether to show samples, and the
//! view surfaces which path was taken.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{AllotmentRecord, AllotmentResponse};
use crate::config::PortalConfig;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("request failed: {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Malformed(String),
    #[error("service rejected the request")]
    Rejected,
    #[error("not available outside the browser")]
    Unavailable,
}

impl FetchError {
    /// Stable machine-readable code for logs and banners.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Transport(_) => "E_TRANSPORT",
            Self::Status(_) => "E_STATUS",
            Self::Malformed(_) => "E_MALFORMED",
            Self::Rejected => "E_REJECTED",
            Self::Unavailable => "E_UNAVAILABLE",
        }
    }
}

/// Result of one allotment load attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// Service answered with at least one record.
    Loaded(Vec<AllotmentRecord>),
    /// Service answered successfully with no records.
    Empty,
    Failed(FetchError),
}

/// Classify a response body from a 2xx reply.
///
/// Items that fail to decode are skipped. Only a body where every item is
/// bad counts as malformed.
pub fn classify_allotment_body(body: &str) -> FetchOutcome {
    let resp: AllotmentResponse = match serde_json::from_str(body) {
        Ok(resp) => resp,
        Err(e) => return FetchOutcome::Failed(FetchError::Malformed(e.to_string())),
    };
    if !resp.ok {
        return FetchOutcome::Failed(FetchError::Rejected);
    }
    if resp.items.is_empty() {
        return FetchOutcome::Empty;
    }
    let (records, skipped) = resp.decode_items();
    if records.is_empty() {
        return FetchOutcome::Failed(FetchError::Malformed(format!("none of {skipped} items could be decoded")));
    }
    if skipped > 0 {
        log::warn!("allotment: dropped {skipped} undecodable items, kept {}", records.len());
    }
    FetchOutcome::Loaded(records)
}

/// Fetch the signed-in user's exam allotments. Single attempt, no retry.
pub async fn fetch_allotments(config: &PortalConfig) -> FetchOutcome {
    #[cfg(feature = "hydrate")]
    {
        let url = config.allotment_url();
        let mut req = gloo_net::http::Request::get(&url).header("Accept", "application/json");
        if let Some(bearer) = config.bearer() {
            req = req.header("Authorization", &bearer);
        }
        let resp = match req.send().await {
            Ok(resp) => resp,
            Err(e) => return FetchOutcome::Failed(FetchError::Transport(e.to_string())),
        };
        if !resp.ok() {
            return FetchOutcome::Failed(FetchError::Status(resp.status()));
        }
        match resp.text().await {
            Ok(body) => classify_allotment_body(&body),
            Err(e) => FetchOutcome::Failed(FetchError::Transport(e.to_string())),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        FetchOutcome::Failed(FetchError::Unavailable)
    }
}

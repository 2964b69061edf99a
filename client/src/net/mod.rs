//! Networking modules for the portal's REST collaborators.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the single allotment fetch and classifies its outcome;
//! `types` defines the wire schema shared with export.

pub mod api;
pub mod types;

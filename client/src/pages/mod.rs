//! Route-level page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages own their local state signals and compose components. Shared
//! state (config, notice, ui) arrives through context from `app::App`.

pub mod agents;
pub mod allotment;
pub mod dashboard;
pub mod help;
pub mod settings;

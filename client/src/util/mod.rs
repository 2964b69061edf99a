//! Utility helpers shared across portal UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (downloads, storage,
//! timers) and chart math from page and component logic.

pub mod alive;
pub mod dark_mode;
pub mod export;
pub mod notice;
pub mod pie;

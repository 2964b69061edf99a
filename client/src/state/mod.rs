//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by page (`allotment`, `appointments`, `agents`, `help`,
//! `profile`) plus shell chrome (`ui`, `notice`) so each component depends on
//! a small focused model.

pub mod agents;
pub mod allotment;
pub mod appointments;
pub mod help;
pub mod notice;
pub mod profile;
pub mod ui;

//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render portal chrome and data panels. They take derived
//! signals as props, or read shared state from Leptos context providers.

pub mod agent_card;
pub mod allotment_table;
pub mod appointment_list;
pub mod notice_toast;
pub mod pie_chart;
pub mod sidebar;
pub mod summary_cards;

//! Shell chrome state (theme, sidebar).
//!
//! DESIGN
//! ======
//! Keeps presentation toggles out of page models so pages can be reused
//! under a different shell.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    pub sidebar_collapsed: bool,
}

impl UiState {
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }

    /// CSS modifier for the shell root.
    pub fn shell_class(&self) -> &'static str {
        if self.sidebar_collapsed { "portal-shell portal-shell--collapsed" } else { "portal-shell" }
    }
}

//! Transient confirmation notice (toast) state.
//!
//! Each `show` bumps a sequence number; a dismissal timer only clears the
//! notice it was scheduled for, so a stale timer never hides a newer message.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

/// Delay before a notice auto-dismisses.
pub const NOTICE_DISMISS_MS: u32 = 2500;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeState {
    pub message: Option<String>,
    pub seq: u64,
}

impl NoticeState {
    /// Replace the current notice. Returns the sequence to dismiss it with.
    pub fn show(&mut self, message: impl Into<String>) -> u64 {
        self.seq += 1;
        self.message = Some(message.into());
        self.seq
    }

    /// Clear the notice if `seq` is still the current one.
    pub fn dismiss(&mut self, seq: u64) -> bool {
        if seq != self.seq || self.message.is_none() {
            return false;
        }
        self.message = None;
        true
    }
}

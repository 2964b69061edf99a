//! Liveness flag shared between a view and its spawned tasks.
//!
//! SYSTEM CONTEXT
//! ==============
//! Async work started on mount may complete after the view is torn down. The
//! view clears the flag in `on_cleanup`; tasks check it before touching
//! signals. In-flight requests are not cancelled, only their effects.

#[cfg(test)]
#[path = "alive_test.rs"]
mod alive_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Clone, Debug)]
pub struct AliveFlag(Arc<AtomicBool>);

impl Default for AliveFlag {
    fn default() -> Self {
        Self::new()
    }
}

impl AliveFlag {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// Mark the owning view as torn down. Idempotent.
    pub fn kill(&self) {
        self.0.store(false, Ordering::Relaxed);
    }

    /// Run `apply` only while the owning view is still mounted.
    /// Returns whether `apply` ran.
    pub fn run_if_alive<F: FnOnce()>(&self, apply: F) -> bool {
        if !self.is_alive() {
            return false;
        }
        apply();
        true
    }
}

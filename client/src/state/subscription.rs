//! Explicit cancellation handle shared by every observer registration.
//!
//! DESIGN
//! ======
//! Theme observers, host color-scheme listeners, storage listeners, and
//! viewport observers all hand back a `Subscription`. Stopping is explicit and
//! idempotent; dropping the handle stops as well so a torn-down consumer can
//! never keep receiving callbacks.

#[cfg(test)]
#[path = "subscription_test.rs"]
mod subscription_test;

use std::fmt;

/// Handle that stops an observation when cancelled or dropped.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Wrap a cancel action. It runs at most once.
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self { cancel: Some(Box::new(cancel)) }
    }

    /// A subscription with nothing to stop, used when a source is unavailable.
    #[must_use]
    pub fn noop() -> Self {
        Self { cancel: None }
    }

    /// Stop the observation. Calling this again is a no-op.
    pub fn cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }

    /// Whether the cancel action is still pending.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.cancel.is_some()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.is_active())
            .finish()
    }
}

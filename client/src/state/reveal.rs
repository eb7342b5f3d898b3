//! One-shot scroll reveal for page sections.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every revealing section mounts its own `RevealController`. The controller
//! watches the section's visible fraction and flips `revealed` the first time
//! the fraction reaches the configured threshold, then stops watching.
//!
//! DESIGN
//! ======
//! The controller is a small state machine:
//!
//! ```text
//! Watching --(fraction >= threshold)--> Revealed
//! Watching --(detach / no target)-----> Stopped
//! ```
//!
//! Both terminal states are final. Viewport geometry arrives through the
//! `VisibilitySource` trait (`IntersectionObserver` in the browser, synthetic
//! measurements in tests). Stagger delay is presentation only: the flag flips
//! on the triggering measurement and `delay_ms` only feeds the CSS
//! `transition-delay` of the revealed content.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::state::subscription::Subscription;

/// Threshold used by most content sections.
pub const SECTION_THRESHOLD: f64 = 0.2;
/// The contact section is tall; it reveals earlier.
pub const CONTACT_THRESHOLD: f64 = 0.1;
/// Absorbs browser rounding of the reported ratio at the crossing point.
pub const MEASUREMENT_TOLERANCE: f64 = 1e-3;

/// Per-section reveal configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealOptions {
    threshold: f64,
    delay_ms: u32,
}

impl RevealOptions {
    /// Threshold fraction in `(0, 1]`. Non-finite or non-positive values fall
    /// back to `SECTION_THRESHOLD`; values above one clamp to one.
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        let threshold = if !threshold.is_finite() || threshold <= 0.0 {
            SECTION_THRESHOLD
        } else {
            threshold.min(1.0)
        };
        Self { threshold, delay_ms: 0 }
    }

    /// Stagger the visual transition by `delay_ms` after the trigger.
    #[must_use]
    pub fn with_delay_ms(self, delay_ms: u32) -> Self {
        Self { delay_ms, ..self }
    }

    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    #[must_use]
    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// Whether a visible-fraction measurement qualifies as a trigger.
    #[must_use]
    pub fn is_met_by(&self, fraction: f64) -> bool {
        fraction + MEASUREMENT_TOLERANCE >= self.threshold
    }
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self::new(SECTION_THRESHOLD)
    }
}

/// Lifecycle of one controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealPhase {
    /// Observing; not yet revealed.
    Watching,
    /// Threshold met once. Final.
    Revealed,
    /// Observation ended without a reveal (detached or nothing to observe). Final.
    Stopped,
}

/// Stream of visible-fraction measurements for a target element.
pub trait VisibilitySource {
    type Target: ?Sized;

    /// Begin measuring `target`, calling `on_measure` with the visible fraction
    /// in `[0, 1]`. Returns `None` when the target cannot be observed.
    fn observe(&self, target: &Self::Target, threshold: f64, on_measure: Rc<dyn Fn(f64)>) -> Option<Subscription>;
}

struct RevealInner {
    options: RevealOptions,
    phase: Cell<RevealPhase>,
    observation: RefCell<Option<Subscription>>,
    on_reveal: RefCell<Vec<Box<dyn FnOnce()>>>,
}

impl RevealInner {
    fn stop_observing(&self) {
        let observation = self.observation.borrow_mut().take();
        if let Some(mut observation) = observation {
            observation.cancel();
        }
    }

    fn measure(&self, fraction: f64) {
        if self.phase.get() != RevealPhase::Watching || !self.options.is_met_by(fraction) {
            return;
        }
        self.phase.set(RevealPhase::Revealed);
        self.stop_observing();

        let callbacks = std::mem::take(&mut *self.on_reveal.borrow_mut());
        for callback in callbacks {
            callback();
        }
    }
}

/// Handle to one section's reveal state. Clones share the state; dropping the
/// last handle stops observation.
#[derive(Clone)]
pub struct RevealController {
    inner: Rc<RevealInner>,
}

impl RevealController {
    /// Start observing `target`. A missing or unobservable target yields a
    /// controller that is already `Stopped` and never reveals.
    pub fn attach<S>(source: &S, target: Option<&S::Target>, options: RevealOptions) -> Self
    where
        S: VisibilitySource + ?Sized,
    {
        let inner = Rc::new(RevealInner {
            options,
            phase: Cell::new(RevealPhase::Watching),
            observation: RefCell::new(None),
            on_reveal: RefCell::new(Vec::new()),
        });

        let Some(target) = target else {
            inner.phase.set(RevealPhase::Stopped);
            return Self { inner };
        };

        let weak = Rc::downgrade(&inner);
        let on_measure: Rc<dyn Fn(f64)> = Rc::new(move |fraction| {
            if let Some(inner) = weak.upgrade() {
                inner.measure(fraction);
            }
        });

        match source.observe(target, options.threshold(), on_measure) {
            Some(mut observation) => {
                // A source may measure synchronously inside `observe`.
                if inner.phase.get() == RevealPhase::Watching {
                    *inner.observation.borrow_mut() = Some(observation);
                } else {
                    observation.cancel();
                }
            }
            None => {
                if inner.phase.get() == RevealPhase::Watching {
                    inner.phase.set(RevealPhase::Stopped);
                }
            }
        }

        Self { inner }
    }

    /// `false` until the first qualifying measurement, `true` forever after.
    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.inner.phase.get() == RevealPhase::Revealed
    }

    #[cfg(test)]
    #[must_use]
    pub fn phase(&self) -> RevealPhase {
        self.inner.phase.get()
    }

    #[must_use]
    pub fn options(&self) -> RevealOptions {
        self.inner.options
    }

    /// Whether the viewport source is still delivering measurements.
    #[cfg(test)]
    #[must_use]
    pub fn is_observing(&self) -> bool {
        self.inner.observation.borrow().is_some()
    }

    /// Run `callback` once on reveal. Runs immediately if already revealed and
    /// never runs once the controller has stopped.
    pub fn on_reveal(&self, callback: impl FnOnce() + 'static) {
        match self.inner.phase.get() {
            RevealPhase::Revealed => callback(),
            RevealPhase::Watching => self.inner.on_reveal.borrow_mut().push(Box::new(callback)),
            RevealPhase::Stopped => {}
        }
    }

    /// Stop observing. Safe to call repeatedly and after a reveal.
    pub fn detach(&self) {
        if self.inner.phase.get() == RevealPhase::Watching {
            self.inner.phase.set(RevealPhase::Stopped);
        }
        self.inner.stop_observing();
        self.inner.on_reveal.borrow_mut().clear();
    }
}

impl fmt::Debug for RevealController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RevealController")
            .field("phase", &self.inner.phase.get())
            .field("options", &self.options())
            .finish_non_exhaustive()
    }
}

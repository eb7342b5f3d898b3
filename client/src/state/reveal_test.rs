use super::*;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

// =============================================================
// Fake viewport
// =============================================================

type Callback = Rc<dyn Fn(f64)>;

#[derive(Default)]
struct ViewportState {
    observers: RefCell<Vec<(u64, String, Callback)>>,
    next_id: Cell<u64>,
    thresholds: RefCell<Vec<f64>>,
    /// Every callback ever handed out, including cancelled ones.
    issued: RefCell<Vec<Callback>>,
    refuse: Cell<bool>,
    measure_on_observe: Cell<Option<f64>>,
}

#[derive(Clone, Default)]
struct FakeViewport(Rc<ViewportState>);

impl FakeViewport {
    /// Deliver one measurement to every active observer of `target`.
    fn measure(&self, target: &str, fraction: f64) {
        let callbacks = self
            .0
            .observers
            .borrow()
            .iter()
            .filter(|(_, t, _)| t == target)
            .map(|(_, _, cb)| Rc::clone(cb))
            .collect::<Vec<_>>();
        for cb in callbacks {
            cb(fraction);
        }
    }

    fn active(&self, target: &str) -> usize {
        self.0.observers.borrow().iter().filter(|(_, t, _)| t == target).count()
    }

    fn last_issued(&self) -> Callback {
        Rc::clone(self.0.issued.borrow().last().unwrap())
    }
}

impl VisibilitySource for FakeViewport {
    type Target = str;

    fn observe(&self, target: &str, threshold: f64, on_measure: Rc<dyn Fn(f64)>) -> Option<Subscription> {
        if self.0.refuse.get() {
            return None;
        }
        self.0.thresholds.borrow_mut().push(threshold);
        self.0.issued.borrow_mut().push(Rc::clone(&on_measure));

        let id = self.0.next_id.get();
        self.0.next_id.set(id + 1);
        self.0
            .observers
            .borrow_mut()
            .push((id, target.to_owned(), Rc::clone(&on_measure)));

        if let Some(fraction) = self.0.measure_on_observe.get() {
            on_measure(fraction);
        }

        let state = Rc::clone(&self.0);
        Some(Subscription::new(move || {
            state.observers.borrow_mut().retain(|(oid, _, _)| *oid != id);
        }))
    }
}

fn attach(viewport: &FakeViewport, target: &str, threshold: f64) -> RevealController {
    RevealController::attach(viewport, Some(target), RevealOptions::new(threshold))
}

// =============================================================
// Options
// =============================================================

#[test]
fn options_keep_valid_thresholds() {
    assert_eq!(RevealOptions::new(0.1).threshold(), 0.1);
    assert_eq!(RevealOptions::new(1.0).threshold(), 1.0);
    assert_eq!(RevealOptions::default().threshold(), SECTION_THRESHOLD);
    assert_eq!(RevealOptions::default().delay_ms(), 0);
}

#[test]
fn options_sanitize_out_of_range_thresholds() {
    assert_eq!(RevealOptions::new(0.0).threshold(), SECTION_THRESHOLD);
    assert_eq!(RevealOptions::new(-0.5).threshold(), SECTION_THRESHOLD);
    assert_eq!(RevealOptions::new(f64::NAN).threshold(), SECTION_THRESHOLD);
    assert_eq!(RevealOptions::new(2.5).threshold(), 1.0);
}

#[test]
fn options_delay_does_not_change_threshold() {
    let options = RevealOptions::new(CONTACT_THRESHOLD).with_delay_ms(400);
    assert_eq!(options.threshold(), CONTACT_THRESHOLD);
    assert_eq!(options.delay_ms(), 400);
}

#[test]
fn threshold_comparison_is_inclusive_with_tolerance() {
    let options = RevealOptions::new(0.2);
    assert!(options.is_met_by(0.2));
    assert!(options.is_met_by(0.1995));
    assert!(!options.is_met_by(0.19));
    assert!(!options.is_met_by(f64::NAN));
}

// =============================================================
// Trigger behavior
// =============================================================

#[test]
fn below_threshold_never_reveals() {
    let viewport = FakeViewport::default();
    let reveal = attach(&viewport, "about", 0.2);
    for fraction in [0.0, 0.05, 0.1, 0.15, 0.19, 0.0] {
        viewport.measure("about", fraction);
    }
    assert!(!reveal.is_revealed());
    assert_eq!(reveal.phase(), RevealPhase::Watching);
    assert!(reveal.is_observing());
}

#[test]
fn reveal_scenario_is_monotonic() {
    let viewport = FakeViewport::default();
    let reveal = attach(&viewport, "education", 0.2);

    viewport.measure("education", 0.15);
    assert!(!reveal.is_revealed());

    viewport.measure("education", 0.25);
    assert!(reveal.is_revealed());

    viewport.measure("education", 0.0);
    assert!(reveal.is_revealed());
    assert_eq!(reveal.phase(), RevealPhase::Revealed);
}

#[test]
fn trigger_stops_observation() {
    let viewport = FakeViewport::default();
    let reveal = attach(&viewport, "skills", 0.2);
    viewport.measure("skills", 0.5);

    assert_eq!(viewport.active("skills"), 0);
    assert!(!reveal.is_observing());

    // A stale callback delivered after the stop is ignored.
    viewport.last_issued()(0.0);
    assert!(reveal.is_revealed());
}

#[test]
fn first_measurement_can_reveal_immediately() {
    let viewport = FakeViewport::default();
    let reveal = attach(&viewport, "hero", 0.1);
    viewport.measure("hero", 1.0);
    assert!(reveal.is_revealed());
}

#[test]
fn synchronous_measurement_during_attach_reveals_and_stops() {
    let viewport = FakeViewport::default();
    viewport.0.measure_on_observe.set(Some(0.6));
    let reveal = attach(&viewport, "about", 0.2);
    assert!(reveal.is_revealed());
    assert!(!reveal.is_observing());
    assert_eq!(viewport.active("about"), 0);
}

#[test]
fn threshold_is_forwarded_to_source() {
    let viewport = FakeViewport::default();
    let _reveal = attach(&viewport, "contact", CONTACT_THRESHOLD);
    assert_eq!(*viewport.0.thresholds.borrow(), vec![CONTACT_THRESHOLD]);
}

#[test]
fn sections_reveal_independently() {
    let viewport = FakeViewport::default();
    let about = attach(&viewport, "about", 0.2);
    let contact = attach(&viewport, "contact", 0.1);

    viewport.measure("contact", 0.12);
    assert!(contact.is_revealed());
    assert!(!about.is_revealed());

    viewport.measure("about", 0.12);
    assert!(!about.is_revealed());
    viewport.measure("about", 0.3);
    assert!(about.is_revealed());
}

// =============================================================
// Teardown
// =============================================================

#[test]
fn detach_before_trigger_freezes_unrevealed() {
    let viewport = FakeViewport::default();
    let reveal = attach(&viewport, "projects", 0.2);
    reveal.detach();

    assert_eq!(viewport.active("projects"), 0);
    viewport.measure("projects", 1.0);
    viewport.last_issued()(1.0);

    assert!(!reveal.is_revealed());
    assert_eq!(reveal.phase(), RevealPhase::Stopped);
}

#[test]
fn detach_is_idempotent_and_safe_after_reveal() {
    let viewport = FakeViewport::default();
    let reveal = attach(&viewport, "about", 0.2);
    viewport.measure("about", 0.4);
    reveal.detach();
    reveal.detach();
    assert!(reveal.is_revealed());

    let other = attach(&viewport, "skills", 0.2);
    other.detach();
    other.detach();
    assert_eq!(other.phase(), RevealPhase::Stopped);
}

#[test]
fn dropping_controller_stops_observation() {
    let viewport = FakeViewport::default();
    let reveal = attach(&viewport, "about", 0.2);
    let clone = reveal.clone();
    drop(reveal);
    assert_eq!(viewport.active("about"), 1);
    drop(clone);
    assert_eq!(viewport.active("about"), 0);
}

#[test]
fn missing_target_is_a_noop() {
    let viewport = FakeViewport::default();
    let reveal = RevealController::attach(&viewport, None, RevealOptions::default());
    assert_eq!(reveal.phase(), RevealPhase::Stopped);
    assert!(!reveal.is_revealed());
    assert!(viewport.0.issued.borrow().is_empty());
    reveal.detach();
}

#[test]
fn unobservable_target_is_a_noop() {
    let viewport = FakeViewport::default();
    viewport.0.refuse.set(true);
    let reveal = attach(&viewport, "about", 0.2);
    assert_eq!(reveal.phase(), RevealPhase::Stopped);
    assert!(!reveal.is_observing());
}

// =============================================================
// Callbacks and stagger
// =============================================================

#[test]
fn on_reveal_fires_once() {
    let viewport = FakeViewport::default();
    let reveal = attach(&viewport, "about", 0.2);
    let fired = Rc::new(Cell::new(0));
    let fired_in_cb = Rc::clone(&fired);
    reveal.on_reveal(move || fired_in_cb.set(fired_in_cb.get() + 1));

    viewport.measure("about", 0.5);
    viewport.last_issued()(0.9);
    assert_eq!(fired.get(), 1);
}

#[test]
fn on_reveal_after_reveal_runs_immediately() {
    let viewport = FakeViewport::default();
    let reveal = attach(&viewport, "about", 0.2);
    viewport.measure("about", 0.5);

    let fired = Rc::new(Cell::new(false));
    let fired_in_cb = Rc::clone(&fired);
    reveal.on_reveal(move || fired_in_cb.set(true));
    assert!(fired.get());
}

#[test]
fn on_reveal_never_runs_after_detach() {
    let viewport = FakeViewport::default();
    let reveal = attach(&viewport, "about", 0.2);
    let fired = Rc::new(Cell::new(false));
    let fired_in_cb = Rc::clone(&fired);
    reveal.on_reveal(move || fired_in_cb.set(true));
    reveal.detach();

    let fired_late = Rc::clone(&fired);
    reveal.on_reveal(move || fired_late.set(true));
    viewport.last_issued()(1.0);
    assert!(!fired.get());
}

#[test]
fn delayed_reveal_flips_flag_on_trigger() {
    let viewport = FakeViewport::default();
    let options = RevealOptions::new(0.2).with_delay_ms(200);
    let reveal = RevealController::attach(&viewport, Some("education"), options);

    viewport.measure("education", 0.1);
    assert!(!reveal.is_revealed(), "not yet triggered");
    assert_eq!(reveal.options().delay_ms(), 200);

    viewport.measure("education", 0.3);
    assert!(reveal.is_revealed(), "triggered; only the transition waits");
    assert_eq!(reveal.options().delay_ms(), 200);
}

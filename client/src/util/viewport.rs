//! `IntersectionObserver` adapter feeding `RevealController`.
//!
//! The observer is created with the controller's threshold as its only
//! threshold, so the browser reports when the section crosses it. Each entry's
//! `intersectionRatio` becomes one measurement.

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::state::reveal::VisibilitySource;
use crate::state::subscription::Subscription;

/// Viewport intersection measurements from the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct IntersectionSource;

impl VisibilitySource for IntersectionSource {
    type Target = web_sys::Element;

    fn observe(&self, target: &web_sys::Element, threshold: f64, on_measure: Rc<dyn Fn(f64)>) -> Option<Subscription> {
        let callback = Closure::wrap(Box::new(move |entries: js_sys::Array| {
            for entry in entries.iter() {
                let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                on_measure(entry.intersection_ratio());
            }
        }) as Box<dyn FnMut(js_sys::Array)>);

        let init = web_sys::IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        let observer = match web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => observer,
            Err(err) => {
                log::warn!("IntersectionObserver unavailable, section stays hidden: {err:?}");
                return None;
            }
        };
        observer.observe(target);

        Some(Subscription::new(move || {
            observer.disconnect();
            // Cancellation usually happens inside `callback`; free it after it returns.
            Timeout::new(0, move || drop(callback)).forget();
        }))
    }
}

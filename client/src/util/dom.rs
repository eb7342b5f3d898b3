//! DOM event listener registration returning a `Subscription`.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;

use crate::state::subscription::Subscription;

/// Listen for `event_type` on `target` until the subscription is cancelled.
///
/// Returns an inert subscription if the listener cannot be registered.
pub fn listen<E>(target: web_sys::EventTarget, event_type: &'static str, handler: impl FnMut(E) + 'static) -> Subscription
where
    E: FromWasmAbi + 'static,
{
    let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    if let Err(err) = target.add_event_listener_with_callback(event_type, callback.as_ref().unchecked_ref()) {
        log::warn!("could not listen for {event_type}: {err:?}");
        return Subscription::noop();
    }

    Subscription::new(move || {
        if let Err(err) = target.remove_event_listener_with_callback(event_type, callback.as_ref().unchecked_ref()) {
            log::debug!("removing {event_type} listener failed: {err:?}");
        }
        drop(callback);
    })
}

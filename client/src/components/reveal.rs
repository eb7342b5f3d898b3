//! Leptos glue binding a section's `NodeRef` to a `RevealController`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sections call `use_reveal` once while rendering and style themselves from
//! the returned flag with the `reveal` / `is-visible` classes. The
//! controller is created after mount (when the node exists in the browser)
//! and detached when the section's owner is cleaned up.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use leptos::html::Section;
use leptos::prelude::*;

use crate::state::reveal::RevealOptions;

/// Reveal flag for a section, flipped once by viewport entry.
///
/// During SSR the flag stays `false`; the browser flips it after hydration.
pub fn use_reveal(target: NodeRef<Section>, options: RevealOptions) -> ReadSignal<bool> {
    let revealed = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        use crate::state::reveal::RevealController;
        use crate::util::viewport::IntersectionSource;

        let controller = StoredValue::new_local(None::<RevealController>);
        Effect::new(move || {
            let Some(section) = target.get() else {
                return;
            };
            if controller.with_value(Option::is_some) {
                return;
            }
            let element: &web_sys::Element = &section;
            let attached = RevealController::attach(&IntersectionSource, Some(element), options);
            attached.on_reveal(move || revealed.set(true));
            controller.set_value(Some(attached));
        });
        on_cleanup(move || {
            controller.try_update_value(|slot| {
                if let Some(attached) = slot.take() {
                    attached.detach();
                }
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (target, options);
    }

    revealed.read_only()
}

/// Reveal flag flipped as soon as the component mounts in the browser.
pub fn use_mount_reveal() -> ReadSignal<bool> {
    let revealed = RwSignal::new(false);
    #[cfg(feature = "hydrate")]
    Effect::new(move || revealed.set(true));
    revealed.read_only()
}

/// Inline style staggering a reveal transition by the options' delay.
/// `None` when there is no delay.
#[must_use]
pub fn reveal_style(options: RevealOptions) -> Option<String> {
    let delay_ms = options.delay_ms();
    (delay_ms > 0).then(|| format!("transition-delay: {delay_ms}ms"))
}

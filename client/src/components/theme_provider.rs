//! Theme context shared by every section.
//!
//! DESIGN
//! ======
//! In the browser the page shell builds the single `ThemePreferenceStore`
//! here and exposes it through `ThemeContext`. A store subscription mirrors
//! every change into the `mode` / `effective` signals and onto the `<html>`
//! element; the subscription is cancelled when the providing owner is
//! cleaned up.
//!
//! TRADE-OFFS
//! ==========
//! The store is `!Send`. A server render may drop its owner on any tokio
//! worker, so SSR never builds the store and provides only the two signals
//! at their defaults. The inline boot script covers the first paint.

#[cfg(test)]
#[path = "theme_provider_test.rs"]
mod theme_provider_test;

use leptos::prelude::*;

use crate::state::theme::{EffectiveTheme, ThemeMode};

#[cfg(feature = "hydrate")]
use crate::state::theme::ThemePreferenceStore;

/// Reactive view of the theme store, provided via context.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    #[cfg(feature = "hydrate")]
    store: StoredValue<ThemePreferenceStore, LocalStorage>,
    /// Stored mode (`light`, `dark`, or `system`).
    pub mode: RwSignal<ThemeMode>,
    /// Theme currently applied to the page.
    pub effective: RwSignal<EffectiveTheme>,
}

impl ThemeContext {
    /// Flip between light and dark. Only meaningful after hydration.
    pub fn toggle(&self) {
        #[cfg(feature = "hydrate")]
        {
            let mode = self.store.with_value(ThemePreferenceStore::toggle);
            log::debug!("theme toggled to {mode}");
        }
    }
}

/// Provide `ThemeContext`, backed by the persisted store in the browser.
///
/// The signals start at the defaults the server renders with and pick up the
/// stored values once the page has hydrated.
pub fn provide_theme() -> ThemeContext {
    let mode = RwSignal::new(ThemeMode::default());
    let effective = RwSignal::new(EffectiveTheme::default());

    let context = ThemeContext {
        #[cfg(feature = "hydrate")]
        store: connect_store(mode, effective),
        mode,
        effective,
    };
    provide_context(context);
    context
}

/// Build the browser store and keep `mode` / `effective` in step with it.
#[cfg(feature = "hydrate")]
fn connect_store(
    mode: RwSignal<ThemeMode>,
    effective: RwSignal<EffectiveTheme>,
) -> StoredValue<ThemePreferenceStore, LocalStorage> {
    use crate::state::subscription::Subscription;
    use crate::state::theme::ThemeChange;
    use crate::util::color_scheme::MediaQuerySignal;
    use crate::util::storage::LocalPreferenceStorage;
    use crate::util::theme_root;

    let store = ThemePreferenceStore::new(LocalPreferenceStorage::default(), MediaQuerySignal::new());
    theme_root::apply(store.effective_mode());

    let observer = StoredValue::new_local(store.subscribe(move |change: ThemeChange| {
        theme_root::apply(change.effective);
        mode.set(change.mode);
        effective.set(change.effective);
    }));
    on_cleanup(move || {
        observer.try_update_value(Subscription::cancel);
    });

    let store = StoredValue::new_local(store);
    Effect::new(move || {
        store.with_value(|store| {
            mode.set(store.mode());
            effective.set(store.effective_mode());
        });
    });
    store
}

/// The `ThemeContext` provided by the page shell.
pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

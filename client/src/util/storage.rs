//! `localStorage` slot for the theme preference.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behavior. Without the `hydrate`
//! feature the slot reports itself unavailable so SSR stays deterministic and
//! the store falls back to `system`.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use crate::state::subscription::Subscription;
use crate::state::theme::{PreferenceStorage, StorageError};

/// Key holding `"light"`, `"dark"`, or `"system"`.
pub const STORAGE_KEY: &str = "portfolio_theme";

/// One `localStorage` key used as durable preference storage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LocalPreferenceStorage {
    key: &'static str,
}

impl LocalPreferenceStorage {
    #[must_use]
    pub const fn new(key: &'static str) -> Self {
        Self { key }
    }

    #[must_use]
    pub fn key(&self) -> &'static str {
        self.key
    }
}

impl Default for LocalPreferenceStorage {
    fn default() -> Self {
        Self::new(STORAGE_KEY)
    }
}

#[cfg(feature = "hydrate")]
fn rejected(err: &wasm_bindgen::JsValue) -> StorageError {
    StorageError::Rejected(format!("{err:?}"))
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    let window = web_sys::window().ok_or(StorageError::Unavailable)?;
    match window.local_storage() {
        Ok(Some(storage)) => Ok(storage),
        Ok(None) => Err(StorageError::Unavailable),
        Err(err) => Err(rejected(&err)),
    }
}

impl PreferenceStorage for LocalPreferenceStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(self.key).map_err(|err| rejected(&err))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Ok(None)
        }
    }

    fn save(&self, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.set_item(self.key, value).map_err(|err| rejected(&err))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = value;
            Err(StorageError::Unavailable)
        }
    }

    /// Follows the window `storage` event, which fires for writes from other tabs.
    fn watch(&self, on_change: Box<dyn Fn(Option<String>)>) -> Subscription {
        #[cfg(feature = "hydrate")]
        {
            let Some(window) = web_sys::window() else {
                return Subscription::noop();
            };
            let key = self.key;
            crate::util::dom::listen(window.into(), "storage", move |event: web_sys::StorageEvent| {
                match event.key() {
                    Some(changed) if changed == key => on_change(event.new_value()),
                    // `localStorage.clear()` reports no key.
                    None => on_change(None),
                    Some(_) => {}
                }
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = on_change;
            Subscription::noop()
        }
    }
}

//! Theme preference store: the single source of truth for light/dark appearance.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page shell constructs one store at startup and injects it into every
//! section through Leptos context. The store persists the chosen mode as one
//! of the literal strings `"light"`, `"dark"`, or `"system"` and resolves
//! `system` against the host color-scheme signal whenever it is asked.
//!
//! DESIGN
//! ======
//! Persistence and the host signal sit behind the `PreferenceStorage` and
//! `ColorSchemeSignal` traits so the store runs against synthetic sources in
//! tests and against `localStorage` / `matchMedia` in the browser.
//!
//! TRADE-OFFS
//! ==========
//! Storage failures never surface to the user. A failed read falls back to
//! `system`; a failed write leaves the in-memory mode in effect for the rest
//! of the session. Each mutation attempts persistence exactly once.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use crate::state::subscription::Subscription;

// =============================================================================
// MODES
// =============================================================================

/// Appearance mode chosen by the user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemeMode {
    Light,
    Dark,
    /// Follow the host environment's color-scheme preference.
    #[default]
    System,
}

impl ThemeMode {
    pub const ALL: [Self; 3] = [Self::Light, Self::Dark, Self::System];

    /// Literal value written to persistent storage.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    /// Interpret a persisted value. Absent or unrecognized content is `System`.
    #[must_use]
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw.map(|value| value.trim().parse::<Self>()) {
            Some(Ok(mode)) => mode,
            _ => Self::System,
        }
    }

    /// Resolve to a concrete rendering theme.
    #[must_use]
    pub fn resolve(self, prefers_dark: bool) -> EffectiveTheme {
        match self {
            Self::Light => EffectiveTheme::Light,
            Self::Dark => EffectiveTheme::Dark,
            Self::System if prefers_dark => EffectiveTheme::Dark,
            Self::System => EffectiveTheme::Light,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = ParseThemeModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| ParseThemeModeError(s.to_owned()))
    }
}

/// A persisted value that is not one of the known mode literals.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized theme mode {0:?}")]
pub struct ParseThemeModeError(pub String);

/// Concrete theme applied to the rendering root. `System` never reaches here.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EffectiveTheme {
    #[default]
    Light,
    Dark,
}

impl EffectiveTheme {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl From<EffectiveTheme> for ThemeMode {
    fn from(theme: EffectiveTheme) -> Self {
        match theme {
            EffectiveTheme::Light => Self::Light,
            EffectiveTheme::Dark => Self::Dark,
        }
    }
}

// =============================================================================
// ENVIRONMENT SEAMS
// =============================================================================

/// Failure talking to durable preference storage.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("preference storage is unavailable")]
    Unavailable,
    #[error("preference storage rejected the operation: {0}")]
    Rejected(String),
}

/// Durable key-value slot holding the persisted theme mode.
pub trait PreferenceStorage {
    /// Read the raw persisted value, `None` when nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the backing store cannot be read.
    fn load(&self) -> Result<Option<String>, StorageError>;

    /// Overwrite the persisted value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` when the backing store refuses the write.
    fn save(&self, value: &str) -> Result<(), StorageError>;

    /// Observe writes made by another instance of the page (other tabs).
    fn watch(&self, _on_change: Box<dyn Fn(Option<String>)>) -> Subscription {
        Subscription::noop()
    }
}

/// Host environment's "prefers dark" signal.
pub trait ColorSchemeSignal {
    /// Current value of the signal.
    fn prefers_dark(&self) -> bool;

    /// Register for changes; the callback receives the new value.
    fn watch(&self, on_change: Box<dyn Fn(bool)>) -> Subscription;
}

// =============================================================================
// STORE
// =============================================================================

/// Snapshot delivered to observers after every relevant change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeChange {
    pub mode: ThemeMode,
    pub effective: EffectiveTheme,
}

type Observer = Rc<dyn Fn(ThemeChange)>;

struct StoreInner {
    mode: Cell<ThemeMode>,
    storage: Box<dyn PreferenceStorage>,
    scheme: Box<dyn ColorSchemeSignal>,
    observers: RefCell<Vec<(u64, Observer)>>,
    next_observer_id: Cell<u64>,
    /// Host signal and cross-tab storage watches; dropped with the store.
    watches: RefCell<Vec<Subscription>>,
}

impl StoreInner {
    fn change(&self) -> ThemeChange {
        let mode = self.mode.get();
        ThemeChange { mode, effective: mode.resolve(self.scheme.prefers_dark()) }
    }

    fn is_observing(&self, id: u64) -> bool {
        self.observers.borrow().iter().any(|(oid, _)| *oid == id)
    }

    fn notify(&self, change: ThemeChange) {
        // Snapshot so observers may subscribe, cancel, or set the mode re-entrantly.
        let snapshot = self
            .observers
            .borrow()
            .iter()
            .map(|(id, observer)| (*id, Rc::clone(observer)))
            .collect::<Vec<_>>();
        for (id, observer) in snapshot {
            if self.is_observing(id) {
                observer(change);
            }
        }
    }

    fn on_host_change(&self, prefers_dark: bool) {
        let mode = self.mode.get();
        if mode != ThemeMode::System {
            return;
        }
        self.notify(ThemeChange { mode, effective: mode.resolve(prefers_dark) });
    }

    fn adopt_external(&self, raw: Option<&str>) {
        let mode = ThemeMode::from_stored(raw);
        log::debug!("theme mode changed in another tab: {mode}");
        self.mode.set(mode);
        self.notify(self.change());
    }
}

/// Shared handle to the theme preference store.
///
/// Clones refer to the same store. Construct one per page and pass it to
/// consumers; the store lives as long as any handle does.
#[derive(Clone)]
pub struct ThemePreferenceStore {
    inner: Rc<StoreInner>,
}

impl ThemePreferenceStore {
    /// Initialize from persisted storage and start watching the host signal.
    pub fn new(storage: impl PreferenceStorage + 'static, scheme: impl ColorSchemeSignal + 'static) -> Self {
        let mode = match storage.load() {
            Ok(raw) => {
                let mode = ThemeMode::from_stored(raw.as_deref());
                if let Some(raw) = raw.as_deref()
                    && raw.trim() != mode.as_str()
                {
                    log::debug!("ignoring unrecognized stored theme {raw:?}");
                }
                mode
            }
            Err(err) => {
                log::warn!("theme preference unreadable, following system: {err}");
                ThemeMode::System
            }
        };

        let inner = Rc::new(StoreInner {
            mode: Cell::new(mode),
            storage: Box::new(storage),
            scheme: Box::new(scheme),
            observers: RefCell::new(Vec::new()),
            next_observer_id: Cell::new(0),
            watches: RefCell::new(Vec::new()),
        });

        let weak = Rc::downgrade(&inner);
        let host_watch = inner.scheme.watch(Box::new(move |prefers_dark| {
            if let Some(inner) = weak.upgrade() {
                inner.on_host_change(prefers_dark);
            }
        }));
        let weak = Rc::downgrade(&inner);
        let storage_watch = inner.storage.watch(Box::new(move |raw| {
            if let Some(inner) = weak.upgrade() {
                inner.adopt_external(raw.as_deref());
            }
        }));
        inner.watches.borrow_mut().extend([host_watch, storage_watch]);

        Self { inner }
    }

    /// The stored mode (`light`, `dark`, or `system`).
    #[must_use]
    pub fn mode(&self) -> ThemeMode {
        self.inner.mode.get()
    }

    /// The concrete theme to render, reading the host signal live.
    #[must_use]
    pub fn effective_mode(&self) -> EffectiveTheme {
        self.inner.change().effective
    }

    /// Replace the mode, persist it, and notify observers.
    pub fn set_mode(&self, mode: ThemeMode) {
        self.inner.mode.set(mode);
        if let Err(err) = self.inner.storage.save(mode.as_str()) {
            log::warn!("theme preference not persisted ({mode}): {err}");
        }
        self.inner.notify(self.inner.change());
    }

    /// Flip the effective theme, pinning an explicit mode. Returns the new mode.
    pub fn toggle(&self) -> ThemeMode {
        let next = ThemeMode::from(self.effective_mode().opposite());
        self.set_mode(next);
        next
    }

    /// Register an observer. It stays registered until the subscription is
    /// cancelled or dropped.
    pub fn subscribe(&self, observer: impl Fn(ThemeChange) + 'static) -> Subscription {
        let id = self.inner.next_observer_id.get();
        self.inner.next_observer_id.set(id + 1);
        self.inner.observers.borrow_mut().push((id, Rc::new(observer)));

        let weak = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.observers.borrow_mut().retain(|(oid, _)| *oid != id);
            }
        })
    }

    /// Number of live observers.
    #[cfg(test)]
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.inner.observers.borrow().len()
    }
}

impl fmt::Debug for ThemePreferenceStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemePreferenceStore")
            .field("mode", &self.mode())
            .field("observers", &self.inner.observers.borrow().len())
            .finish_non_exhaustive()
    }
}

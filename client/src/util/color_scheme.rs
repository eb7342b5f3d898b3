//! Host "prefers dark" signal backed by `matchMedia`.

#[cfg(test)]
#[path = "color_scheme_test.rs"]
mod color_scheme_test;

use crate::state::subscription::Subscription;
use crate::state::theme::ColorSchemeSignal;

/// Media query whose match state is the host preference.
pub const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

/// Live view of the operating environment's color-scheme preference.
///
/// Reports `false` (light) when no browser is available.
#[derive(Clone, Debug)]
pub struct MediaQuerySignal {
    #[cfg(feature = "hydrate")]
    query: Option<web_sys::MediaQueryList>,
}

impl MediaQuerySignal {
    #[must_use]
    pub fn new() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let query = web_sys::window().and_then(|window| match window.match_media(DARK_QUERY) {
                Ok(query) => query,
                Err(err) => {
                    log::debug!("matchMedia unavailable: {err:?}");
                    None
                }
            });
            Self { query }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self {}
        }
    }
}

impl Default for MediaQuerySignal {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorSchemeSignal for MediaQuerySignal {
    fn prefers_dark(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            self.query.as_ref().is_some_and(web_sys::MediaQueryList::matches)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            false
        }
    }

    fn watch(&self, on_change: Box<dyn Fn(bool)>) -> Subscription {
        #[cfg(feature = "hydrate")]
        {
            let Some(query) = self.query.clone() else {
                return Subscription::noop();
            };
            crate::util::dom::listen(query.into(), "change", move |event: web_sys::MediaQueryListEvent| {
                on_change(event.matches());
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = on_change;
            Subscription::noop()
        }
    }
}

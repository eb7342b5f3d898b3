//! Applies the effective theme to the `<html>` element.
//!
//! Two hooks style the page: the `dark` class and the `data-theme`
//! attribute. `boot_script` runs the same logic inline in `<head>` before the
//! first paint, so a dark-mode reader never sees a light flash while the
//! WASM bundle loads.

#[cfg(test)]
#[path = "theme_root_test.rs"]
mod theme_root_test;

use crate::state::theme::EffectiveTheme;
use crate::util::color_scheme::DARK_QUERY;
use crate::util::storage::STORAGE_KEY;

pub const DARK_CLASS: &str = "dark";
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Set the root class and attribute for `theme`.
pub fn apply(theme: EffectiveTheme) {
    #[cfg(feature = "hydrate")]
    {
        let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        else {
            return;
        };
        let class_list = root.class_list();
        let toggled = if theme.is_dark() {
            class_list.add_1(DARK_CLASS)
        } else {
            class_list.remove_1(DARK_CLASS)
        };
        if let Err(err) = toggled.and_then(|()| root.set_attribute(THEME_ATTRIBUTE, theme.as_str())) {
            log::warn!("could not apply {} theme: {err:?}", theme.as_str());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Inline script applying the persisted (or host) theme before hydration.
///
/// Mirrors `ThemeMode::from_stored` + `ThemeMode::resolve`: anything other
/// than `light` or `dark` follows the host preference.
#[must_use]
pub fn boot_script() -> String {
    format!(
        "(function(){{var m=null;try{{m=window.localStorage.getItem('{STORAGE_KEY}');}}catch(e){{}}\
         m=m&&m.trim();\
         var d=m==='dark'||(m!=='light'&&!!window.matchMedia&&window.matchMedia('{DARK_QUERY}').matches);\
         var r=document.documentElement;\
         if(d){{r.classList.add('{DARK_CLASS}');}}else{{r.classList.remove('{DARK_CLASS}');}}\
         r.setAttribute('{THEME_ATTRIBUTE}',d?'dark':'light');}})();"
    )
}

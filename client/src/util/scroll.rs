//! Smooth scrolling to in-page sections.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Element id targeted by an in-page `#anchor` href.
#[must_use]
pub fn section_id(href: &str) -> &str {
    href.strip_prefix('#').unwrap_or(href)
}

/// Smoothly scroll the section with `id` into view. Unknown ids are ignored.
pub fn scroll_to_section(id: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(id))
        else {
            log::debug!("no section #{id} to scroll to");
            return;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

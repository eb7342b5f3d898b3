use super::*;

#[test]
fn section_id_strips_anchor_prefix() {
    assert_eq!(section_id("#projects"), "projects");
    assert_eq!(section_id("contact"), "contact");
    assert_eq!(section_id("#"), "");
}

#[test]
fn scroll_is_callable_without_a_document() {
    scroll_to_section("about");
}

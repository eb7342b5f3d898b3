use super::*;

use crate::state::reveal::SECTION_THRESHOLD;

#[test]
fn reveal_style_omits_zero_delay() {
    assert_eq!(reveal_style(RevealOptions::new(SECTION_THRESHOLD)), None);
}

#[test]
fn reveal_style_uses_the_options_delay() {
    let options = RevealOptions::new(SECTION_THRESHOLD).with_delay_ms(200);
    assert_eq!(reveal_style(options).as_deref(), Some("transition-delay: 200ms"));
}

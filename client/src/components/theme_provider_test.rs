#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn server_context_starts_at_render_defaults() {
    let owner = Owner::new();
    let context = owner.with(provide_theme);
    assert_eq!(context.mode.get_untracked(), ThemeMode::System);
    assert_eq!(context.effective.get_untracked(), EffectiveTheme::Light);

    let provided = owner.with(use_theme);
    assert_eq!(provided.mode.get_untracked(), ThemeMode::System);
}

#[test]
fn server_toggle_leaves_signals_alone() {
    let owner = Owner::new();
    let context = owner.with(provide_theme);
    context.toggle();
    assert_eq!(context.effective.get_untracked(), EffectiveTheme::Light);
}

#[test]
fn server_owner_can_be_dropped_on_another_thread() {
    let owner = Owner::new();
    owner.with(provide_theme);

    let dropped = std::thread::spawn(move || drop(owner)).join();
    assert!(dropped.is_ok(), "dropping the render owner off-thread panicked");
}

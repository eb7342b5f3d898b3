#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn off_browser_signal_prefers_light() {
    assert!(!MediaQuerySignal::new().prefers_dark());
}

#[test]
fn off_browser_watch_is_inert() {
    let sub = MediaQuerySignal::default().watch(Box::new(|_| {}));
    assert!(!sub.is_active());
}

#[test]
fn query_targets_dark_scheme() {
    assert_eq!(DARK_QUERY, "(prefers-color-scheme: dark)");
}

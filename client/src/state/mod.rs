//! Client-side state modules.
//!
//! DESIGN
//! ======
//! Everything here is plain Rust with no Leptos or browser dependency. The
//! environment (storage, host color scheme, viewport geometry) reaches these
//! types only through traits, so each state machine is tested with synthetic
//! events in isolation from rendering.

pub mod contact;
pub mod reveal;
pub mod subscription;
pub mod theme;

//! Browser adapters and small environment helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each adapter implements one of the `state` seams against the real browser
//! (`localStorage`, `matchMedia`, `IntersectionObserver`) when the `hydrate`
//! feature is on, and degrades to an inert default during SSR and tests.

pub mod clock;
pub mod color_scheme;
#[cfg(feature = "hydrate")]
pub mod dom;
pub mod scroll;
pub mod storage;
pub mod theme_root;
#[cfg(feature = "hydrate")]
pub mod viewport;

//! Page sections and the components they share.
//!
//! SYSTEM CONTEXT
//! ==============
//! Sections render static copy from `content` and read two pieces of shared
//! behavior: the theme context from `theme_provider` and per-section reveal
//! flags from `reveal`.

pub mod about;
pub mod contact;
pub mod education;
pub mod footer;
pub mod hero;
pub mod navigation;
pub mod projects;
pub mod reveal;
pub mod skills;
pub mod theme_provider;
pub mod theme_toggle;

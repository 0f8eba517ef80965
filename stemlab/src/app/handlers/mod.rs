//! # Screen Handlers
//!
//! User-action handlers, one file per screen. Handlers validate input,
//! update screen state and spawn API calls whose results come back as
//! [`crate::app::AppEvent`]s. A handler that wants to change screen
//! returns the target; [`crate::app::App`] performs the navigation so
//! mount actions run in one place.

pub mod components;
pub mod generation;
pub mod library;
pub mod navigation;
pub mod onboarding;
pub mod preferences;
pub mod profile;

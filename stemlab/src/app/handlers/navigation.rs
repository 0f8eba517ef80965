//! # Navigation Handlers

use crate::app::state::{AppState, Screen};
use parking_lot::RwLock;
use std::sync::Arc;

/// Switch the current screen.
///
/// Internal handler function - use [`crate::app::App::navigate`] instead.
pub(crate) fn handle_screen_change(state: Arc<RwLock<AppState>>, screen: Screen) {
    let mut state = state.write();
    if state.current_screen != screen {
        tracing::info!(from = state.current_screen.route(), to = screen.route(), "Navigating");
    }
    state.current_screen = screen;
}

/// Send the user back to the root after the backend rejected the credential.
///
/// Screen state is reset so nothing from the old session is shown; the
/// notice feed is kept.
pub(crate) fn handle_session_expired(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    tracing::warn!(screen = state.current_screen.route(), "Session expired, returning to root");
    let notices = std::mem::take(&mut state.notices);
    *state = AppState {
        notices,
        ..Default::default()
    };
    state.error("Your session has expired");
}

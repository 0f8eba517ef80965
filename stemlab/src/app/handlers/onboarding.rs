//! # Onboarding Handlers

use crate::app::state::{AppState, Screen, ONBOARDING_PAGES};
use crate::services::storage::{self, LocalStorage};
use parking_lot::RwLock;
use std::sync::Arc;

pub(crate) fn handle_next_page(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    if !state.onboarding.is_last_page() {
        state.onboarding.page += 1;
    }
}

/// Jump to the last page; completion is still explicit.
pub(crate) fn handle_skip(state: Arc<RwLock<AppState>>) {
    state.write().onboarding.page = ONBOARDING_PAGES.len() - 1;
}

/// Persist the completion flag and move on to component selection.
///
/// A storage failure is logged; the user still moves on.
pub(crate) fn handle_complete(storage: &dyn LocalStorage) -> Screen {
    match storage::mark_onboarding_completed(storage) {
        Ok(()) => tracing::info!("Onboarding completed"),
        Err(e) => tracing::warn!(error = %e, "Failed to persist onboarding flag"),
    }
    Screen::ComponentSelection
}

/// Screen to open on start.
pub(crate) fn initial_screen(storage: &dyn LocalStorage) -> Screen {
    match storage::onboarding_completed(storage) {
        Ok(true) => Screen::ComponentSelection,
        Ok(false) => Screen::Onboarding,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read onboarding flag");
            Screen::Onboarding
        }
    }
}

//! # Theme & Skill Handlers
//!
//! The theme selection form. Saving goes through the store, which only
//! adopts the server-confirmed copy.

use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::app::events::{AppEvent, PreferencesOrigin};
use crate::app::state::AppState;
use crate::store::UserStore;
use crate::utils::validation::validate_preferences;
use shared::Difficulty;

/// Seed the form from the store (defaults when nothing is loaded).
pub(crate) fn handle_theme_mount(state: Arc<RwLock<AppState>>, store: &UserStore) {
    let mut state = state.write();
    state.themes.form = store.preferences().unwrap_or_default();
    state.themes.saving = false;
}

pub(crate) fn handle_toggle_theme(state: Arc<RwLock<AppState>>, theme_id: &str) {
    state.write().themes.form.toggle_theme(theme_id);
}

pub(crate) fn handle_toggle_interest(state: Arc<RwLock<AppState>>, interest: &str) {
    state.write().themes.form.toggle_interest(interest);
}

pub(crate) fn handle_skill_level(state: Arc<RwLock<AppState>>, level: Difficulty) {
    state.write().themes.form.skill_level = level;
}

pub(crate) fn handle_duration(state: Arc<RwLock<AppState>>, duration: &str) {
    state.write().themes.form.preferred_duration = duration.to_string();
}

pub(crate) fn handle_team_size(state: Arc<RwLock<AppState>>, team_size: &str) {
    state.write().themes.form.team_size = team_size.to_string();
}

/// Validate and save the form.
///
/// Internal handler function - use [`crate::app::App::save_themes`] instead.
pub(crate) fn handle_save_themes(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>, store: UserStore) {
    let form = {
        let mut state = state.write();
        if state.themes.saving {
            return;
        }
        if let Some(message) = validate_preferences(&state.themes.form).error {
            state.error(message);
            return;
        }
        state.themes.saving = true;
        state.themes.form.clone()
    };

    tokio::spawn(async move {
        let result = store.update_preferences(form).await;
        let event = AppEvent::PreferencesSaved {
            origin: PreferencesOrigin::ThemeSelection,
            result,
        };
        if event_tx.send(event).await.is_err() {
            tracing::debug!("Preferences result dropped, app closed");
        }
    });
}

//! # Profile Handlers

use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::app::events::{AppEvent, PreferencesOrigin};
use crate::app::state::{AppState, ProfileTab};
use crate::store::UserStore;
use shared::UserPreferences;

pub(crate) fn handle_profile_tab(state: Arc<RwLock<AppState>>, tab: ProfileTab) {
    state.write().profile.tab = tab;
}

/// Start editing a copy of the stored preferences.
pub(crate) fn handle_begin_edit(state: Arc<RwLock<AppState>>, store: &UserStore) {
    state.write().profile.draft = Some(store.preferences().unwrap_or_default());
}

pub(crate) fn handle_cancel_edit(state: Arc<RwLock<AppState>>) {
    state.write().profile.draft = None;
}

/// Apply `edit` to the draft. Ignored when not editing.
pub(crate) fn handle_edit_draft(state: Arc<RwLock<AppState>>, edit: impl FnOnce(&mut UserPreferences)) {
    if let Some(draft) = state.write().profile.draft.as_mut() {
        edit(draft);
    }
}

/// Save the draft through the store.
///
/// Internal handler function - use [`crate::app::App::save_profile`] instead.
pub(crate) fn handle_save_profile(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>, store: UserStore) {
    let draft = {
        let mut state = state.write();
        if state.profile.saving {
            return;
        }
        let Some(draft) = state.profile.draft.clone() else {
            return;
        };
        state.profile.saving = true;
        draft
    };

    tokio::spawn(async move {
        let result = store.update_preferences(draft).await;
        let event = AppEvent::PreferencesSaved {
            origin: PreferencesOrigin::Profile,
            result,
        };
        if event_tx.send(event).await.is_err() {
            tracing::debug!("Preferences result dropped, app closed");
        }
    });
}

//! # Ideas Library Handlers
//!
//! Favourite toggles and deletes are not optimistic: the displayed idea
//! only changes once the server acknowledges.

use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::app::events::AppEvent;
use crate::app::state::AppState;
use crate::core::ApiService;
use crate::query::{Scope, Selector, SortKey};
use shared::Idea;

/// Fetch the saved ideas.
///
/// Internal handler function - use [`crate::app::App::navigate`] instead.
pub(crate) fn handle_load_library(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>, api: Arc<dyn ApiService>) {
    {
        let mut state = state.write();
        state.library.ideas.loading = true;
        state.library.ideas.error = None;
    }

    tokio::spawn(async move {
        let result = api.list_ideas().await;
        if event_tx.send(AppEvent::LibraryLoaded(result)).await.is_err() {
            tracing::debug!("Library result dropped, app closed");
        }
    });
}

pub(crate) fn handle_library_search(state: Arc<RwLock<AppState>>, search: String) {
    state.write().library.query.search = search;
}

/// Difficulty filter: "All", "Favorites" or a difficulty name.
pub(crate) fn handle_library_filter(state: Arc<RwLock<AppState>>, filter: &str) {
    state.write().library.query.selector = Selector::parse_for::<Idea>(filter);
}

pub(crate) fn handle_library_tab(state: Arc<RwLock<AppState>>, tab: Scope) {
    state.write().library.query.scope = tab;
}

pub(crate) fn handle_library_sort(state: Arc<RwLock<AppState>>, key: Option<SortKey>) {
    state.write().library.query.sort = key;
}

/// Ask the server to flip the favourite flag.
///
/// Ignored while a toggle for the same idea is still in flight.
///
/// Internal handler function - use [`crate::app::App::toggle_favorite`] instead.
pub(crate) fn handle_toggle_favorite(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    api: Arc<dyn ApiService>,
    id: &str,
) {
    let is_favorite = {
        let mut state = state.write();
        let Some(current) = state.library.ideas.items.iter().find(|i| i.id == id).map(|i| i.is_favorite) else {
            tracing::warn!(id = id, "Favourite toggle for unknown idea");
            return;
        };
        if !state.library.pending_favorites.insert(id.to_string()) {
            return;
        }
        !current
    };

    let id = id.to_string();
    tokio::spawn(async move {
        let result = api.toggle_favorite(&id, is_favorite).await.map(|_| ());
        let event = AppEvent::FavoriteToggled { id, is_favorite, result };
        if event_tx.send(event).await.is_err() {
            tracing::debug!("Favourite result dropped, app closed");
        }
    });
}

/// Internal handler function - use [`crate::app::App::delete_idea`] instead.
pub(crate) fn handle_delete_idea(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>, api: Arc<dyn ApiService>, id: &str) {
    if !state.write().library.pending_deletes.insert(id.to_string()) {
        return;
    }

    let id = id.to_string();
    tokio::spawn(async move {
        let result = api.delete_idea(&id).await.map(|_| ());
        if event_tx.send(AppEvent::IdeaDeleted { id, result }).await.is_err() {
            tracing::debug!("Delete result dropped, app closed");
        }
    });
}

pub(crate) fn handle_open_idea(state: Arc<RwLock<AppState>>, id: &str) {
    let mut state = state.write();
    let detail = state.library.ideas.items.iter().find(|i| i.id == id).cloned();
    state.library.detail = detail;
}

pub(crate) fn handle_close_idea(state: Arc<RwLock<AppState>>) {
    state.write().library.detail = None;
}

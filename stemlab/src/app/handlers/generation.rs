//! # Idea Generation Handlers
//!
//! Every generation request is issued under a [`RequestGate`] token. Only
//! the response carrying the latest token is applied, so a double click
//! never lets an older, slower response overwrite a newer one.

use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::app::events::AppEvent;
use crate::app::state::{AppState, Screen};
use crate::core::{ApiService, RequestGate};
use crate::store::UserStore;
use crate::utils::validation::validate_generation;
use shared::IdeaGenerationRequest;

/// Generate on mount, or bounce back to selection when nothing is selected.
pub(crate) fn handle_generation_mount(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    api: Arc<dyn ApiService>,
    store: &UserStore,
    gate: &RequestGate,
) -> Option<Screen> {
    let selection = store.selected_components();
    if let Some(message) = validate_generation(&selection).error {
        state.write().error(message);
        return Some(Screen::ComponentSelection);
    }

    handle_generate(state, event_tx, api, store, gate);
    None
}

/// Request ideas for the current selection and preferences.
///
/// Rejected locally, with no network call, when nothing is selected.
///
/// Internal handler function - use [`crate::app::App::generate_ideas`] instead.
pub(crate) fn handle_generate(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    api: Arc<dyn ApiService>,
    store: &UserStore,
    gate: &RequestGate,
) {
    let user = store.snapshot();
    if let Some(message) = validate_generation(&user.selected_components).error {
        state.write().error(message);
        return;
    }

    let request = IdeaGenerationRequest::new(user.selected_component_names(), user.preferences);
    let token = gate.issue();
    {
        let mut state = state.write();
        state.generation.generating = true;
        state.generation.pending = Some(token);
        state.generation.error = None;
    }
    tracing::info!(
        ?token,
        components = request.selected_components.len(),
        count = request.count,
        "Requesting idea generation"
    );

    tokio::spawn(async move {
        let result = api.generate_ideas(&request).await;
        if event_tx.send(AppEvent::IdeasGenerated { token, result }).await.is_err() {
            tracing::debug!("Generation result dropped, app closed");
        }
    });
}

/// Save the generated idea at `index` to the library.
///
/// An idea without components is saved with the current selection's names.
///
/// Internal handler function - use [`crate::app::App::save_generated_idea`] instead.
pub(crate) fn handle_save_idea(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    api: Arc<dyn ApiService>,
    store: &UserStore,
    index: usize,
) {
    let (batch, idea) = {
        let mut state = state.write();
        let Some(idea) = state.generation.ideas.get(index).cloned() else {
            tracing::warn!(index = index, "Save for unknown generated idea");
            return;
        };
        if !state.generation.saving.insert(index) {
            return;
        }
        (state.generation.batch, idea)
    };

    let mut idea = idea;
    if idea.components.is_empty() {
        idea.components = store.snapshot().selected_component_names();
    }

    tokio::spawn(async move {
        let result = api.save_idea(&idea).await;
        if event_tx.send(AppEvent::IdeaSaved { batch, index, result }).await.is_err() {
            tracing::debug!("Save result dropped, app closed");
        }
    });
}

pub(crate) fn handle_open_generated(state: Arc<RwLock<AppState>>, index: usize) {
    let mut state = state.write();
    let detail = state.generation.ideas.get(index).cloned();
    state.generation.detail = detail;
}

pub(crate) fn handle_close_generated(state: Arc<RwLock<AppState>>) {
    state.write().generation.detail = None;
}

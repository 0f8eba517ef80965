//! # Component Handlers
//!
//! Component selection (local basket committed on continue) and the
//! component database browser (adds straight into the store).

use async_channel::Sender;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::app::events::{AppEvent, CatalogTarget};
use crate::app::state::{AppState, Screen, ViewMode};
use crate::core::ApiService;
use crate::query::{Selector, SortKey};
use crate::store::{dedupe_by_id, UserStore};
use crate::utils::validation::validate_selection;
use shared::Component;

/// Fetch the catalog for `target`.
///
/// Internal handler function - use [`crate::app::App::navigate`] instead.
pub(crate) fn handle_load_catalog(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    api: Arc<dyn ApiService>,
    target: CatalogTarget,
) {
    {
        let mut state = state.write();
        let catalog = match target {
            CatalogTarget::Selection => &mut state.selection.catalog,
            CatalogTarget::Browser => &mut state.browser.catalog,
        };
        catalog.loading = true;
        catalog.error = None;
    }

    tokio::spawn(async move {
        let result = api.list_components().await;
        if event_tx.send(AppEvent::CatalogLoaded { target, result }).await.is_err() {
            tracing::debug!("Catalog result dropped, app closed");
        }
    });
}

/// Seed the local basket from the store when the selection screen mounts.
pub(crate) fn handle_selection_mount(state: Arc<RwLock<AppState>>, store: &UserStore) {
    state.write().selection.local_selection = store.selected_components();
}

pub(crate) fn handle_selection_search(state: Arc<RwLock<AppState>>, search: String) {
    state.write().selection.query.search = search;
}

pub(crate) fn handle_selection_category(state: Arc<RwLock<AppState>>, category: &str) {
    state.write().selection.query.selector = Selector::parse_for::<Component>(category);
}

pub(crate) fn handle_view_mode(state: Arc<RwLock<AppState>>, mode: ViewMode) {
    state.write().selection.view_mode = mode;
}

/// Add or remove a catalog component from the local basket.
pub(crate) fn handle_toggle_component(state: Arc<RwLock<AppState>>, component_id: &str) {
    let mut state = state.write();
    let Some(component) = state
        .selection
        .catalog
        .items
        .iter()
        .find(|c| c.id == component_id)
        .cloned()
    else {
        tracing::warn!(component_id = component_id, "Toggle for unknown component");
        return;
    };

    if state.selection.is_selected(component_id) {
        state.selection.local_selection.retain(|c| c.id != component_id);
        state.success(format!("Removed {}", component.name));
    } else {
        let name = component.name.clone();
        state.selection.local_selection.push(component);
        state.success(format!("Added {}", name));
    }
}

/// Commit the local basket to the store.
///
/// Rejected locally when nothing is selected.
pub(crate) fn handle_continue(state: Arc<RwLock<AppState>>, store: &UserStore) -> Option<Screen> {
    let mut state = state.write();
    let validation = validate_selection(&state.selection.local_selection);
    if let Some(message) = validation.error {
        state.error(message);
        return None;
    }

    let selection = dedupe_by_id(state.selection.local_selection.clone());
    let count = selection.len();
    store.set_selected_components(selection);
    state.success(format!("Selected {} components", count));
    Some(Screen::ThemeSelection)
}

pub(crate) fn handle_browser_search(state: Arc<RwLock<AppState>>, search: String) {
    state.write().browser.query.search = search;
}

pub(crate) fn handle_browser_category(state: Arc<RwLock<AppState>>, category: &str) {
    state.write().browser.query.selector = Selector::parse_for::<Component>(category);
}

pub(crate) fn handle_browser_sort(state: Arc<RwLock<AppState>>, key: SortKey) {
    state.write().browser.query.sort = Some(key);
}

pub(crate) fn handle_open_component(state: Arc<RwLock<AppState>>, component_id: &str) {
    let mut state = state.write();
    let detail = state
        .browser
        .catalog
        .items
        .iter()
        .find(|c| c.id == component_id)
        .cloned();
    state.browser.detail = detail;
}

pub(crate) fn handle_close_component(state: Arc<RwLock<AppState>>) {
    state.write().browser.detail = None;
}

/// "Add to project" from the browser: appends to the store's selection.
pub(crate) fn handle_add_to_project(state: Arc<RwLock<AppState>>, store: &UserStore, component_id: &str) {
    let mut state = state.write();
    let Some(component) = state
        .browser
        .catalog
        .items
        .iter()
        .find(|c| c.id == component_id)
        .cloned()
    else {
        tracing::warn!(component_id = component_id, "Add for unknown component");
        return;
    };

    let name = component.name.clone();
    if store.add_selected_component(component) {
        state.success(format!("Added {} to your project", name));
    } else {
        state.info(format!("{} is already in your project", name));
    }
}

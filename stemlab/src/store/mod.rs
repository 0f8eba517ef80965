//! # User State Store
//!
//! Process-wide holder for the user's preferences, usage stats and current
//! component selection, shared by every screen controller.
//!
//! ## Ownership
//!
//! [`UserStore`] is a cheap `Clone` handle around an `Arc`. State lives
//! behind a `parking_lot::RwLock` that is never held across an `.await`.
//! Readers take a [`UserStore::snapshot`]; writers go through the methods
//! below, each of which publishes a [`StoreEvent`] to every subscriber.
//!
//! ## Persistence
//!
//! - preferences: server-backed, replaced only with the server-confirmed copy
//! - stats: server-loaded, incremented locally and never written back
//! - selection: mirrored synchronously to local storage on every change and
//!   restored from it when the store is built

mod events;
mod state;

pub use events::StoreEvent;
pub use state::{dedupe_by_id, LoadStatus, UserState};

use async_channel::{Receiver, Sender, TrySendError};
use chrono::Utc;
use parking_lot::{Mutex, RwLock};
use std::sync::Arc;
use std::time::Instant;

use crate::core::{ApiService, Result};
use crate::services::storage::{self, LocalStorage};
use shared::{Component, StatKey, UserPreferences, UserStats};

struct StoreInner {
    api: Arc<dyn ApiService>,
    storage: Arc<dyn LocalStorage>,
    state: RwLock<UserState>,
    subscribers: Mutex<Vec<Sender<StoreEvent>>>,
}

#[derive(Clone)]
pub struct UserStore {
    inner: Arc<StoreInner>,
}

impl UserStore {
    /// Build the store and restore the mirrored selection.
    ///
    /// Nothing is fetched until [`UserStore::load`] runs.
    pub fn new(api: Arc<dyn ApiService>, storage: Arc<dyn LocalStorage>) -> Self {
        let selected_components = match storage::load_selected_components(storage.as_ref()) {
            Ok(components) => dedupe_by_id(components),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to restore component selection");
                Vec::new()
            }
        };
        if !selected_components.is_empty() {
            tracing::debug!(count = selected_components.len(), "Restored component selection");
        }

        Self {
            inner: Arc::new(StoreInner {
                api,
                storage,
                state: RwLock::new(UserState {
                    selected_components,
                    ..Default::default()
                }),
                subscribers: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Register for change notifications.
    pub fn subscribe(&self) -> Receiver<StoreEvent> {
        let (tx, rx) = async_channel::unbounded();
        self.inner.subscribers.lock().push(tx);
        rx
    }

    fn publish(&self, event: StoreEvent) {
        self.inner
            .subscribers
            .lock()
            .retain(|tx| !matches!(tx.try_send(event.clone()), Err(TrySendError::Closed(_))));
    }

    pub fn snapshot(&self) -> UserState {
        self.inner.state.read().clone()
    }

    pub fn status(&self) -> LoadStatus {
        self.inner.state.read().status
    }

    pub fn preferences(&self) -> Option<UserPreferences> {
        self.inner.state.read().preferences.clone()
    }

    pub fn stats(&self) -> Option<UserStats> {
        self.inner.state.read().stats.clone()
    }

    pub fn selected_components(&self) -> Vec<Component> {
        self.inner.state.read().selected_components.clone()
    }

    pub fn load_error(&self) -> Option<String> {
        self.inner.state.read().load_error.clone()
    }

    /// Fetch preferences and stats concurrently.
    ///
    /// Both values are applied together or not at all. On failure the
    /// previous values stay, the error is recorded and broadcast, and the
    /// store still ends up `Ready`. There is no automatic retry.
    #[tracing::instrument(skip(self))]
    pub async fn load(&self) {
        let start = Instant::now();
        self.inner.state.write().status = LoadStatus::Loading;
        self.publish(StoreEvent::StatusChanged(LoadStatus::Loading));

        let api = &self.inner.api;
        let (preferences, stats) = futures::join!(api.get_preferences(), api.get_stats());
        let duration_ms = start.elapsed().as_millis();

        match (preferences, stats) {
            (Ok(preferences), Ok(stats)) => {
                {
                    let mut state = self.inner.state.write();
                    state.preferences = Some(preferences.clone());
                    state.stats = Some(stats.clone());
                    state.load_error = None;
                    state.status = LoadStatus::Ready;
                }
                tracing::info!(duration_ms = duration_ms, "User data loaded");
                self.publish(StoreEvent::PreferencesUpdated(preferences));
                self.publish(StoreEvent::StatsUpdated(stats));
            }
            (preferences, stats) => {
                let message = preferences
                    .err()
                    .or_else(|| stats.err())
                    .map(|e| e.to_string())
                    .unwrap_or_default();
                {
                    let mut state = self.inner.state.write();
                    state.load_error = Some(message.clone());
                    state.status = LoadStatus::Ready;
                }
                tracing::error!(error = %message, duration_ms = duration_ms, "Error loading user data");
                self.publish(StoreEvent::LoadFailed(message));
            }
        }

        self.publish(StoreEvent::StatusChanged(LoadStatus::Ready));
    }

    /// Manual reload after a failure.
    pub async fn refresh(&self) {
        self.load().await
    }

    /// Persist `preferences` and adopt the server-confirmed copy.
    ///
    /// On error local state is unchanged and the error is returned.
    /// Concurrent calls resolve last-response-wins.
    #[tracing::instrument(skip_all)]
    pub async fn update_preferences(&self, preferences: UserPreferences) -> Result<UserPreferences> {
        let confirmed = self
            .inner
            .api
            .save_preferences(&preferences)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Error updating preferences");
                e
            })?;

        self.inner.state.write().preferences = Some(confirmed.clone());
        tracing::info!(
            themes = confirmed.selected_themes.len(),
            skill_level = %confirmed.skill_level,
            "Preferences updated"
        );
        self.publish(StoreEvent::PreferencesUpdated(confirmed.clone()));
        Ok(confirmed)
    }

    /// Replace the selection (deduplicated by id, first wins) and mirror it.
    pub fn set_selected_components(&self, components: Vec<Component>) {
        let components = dedupe_by_id(components);
        self.commit_selection(|selection| *selection = components);
    }

    /// Append `component` unless its id is already selected.
    pub fn add_selected_component(&self, component: Component) -> bool {
        let mut added = false;
        self.commit_selection(|selection| {
            if !selection.iter().any(|c| c.id == component.id) {
                selection.push(component);
                added = true;
            }
        });
        added
    }

    pub fn remove_selected_component(&self, component_id: &str) -> bool {
        let mut removed = false;
        self.commit_selection(|selection| {
            let before = selection.len();
            selection.retain(|c| c.id != component_id);
            removed = selection.len() != before;
        });
        removed
    }

    pub fn clear_selection(&self) {
        self.commit_selection(Vec::clear);
    }

    fn commit_selection(&self, change: impl FnOnce(&mut Vec<Component>)) {
        let snapshot = {
            let mut state = self.inner.state.write();
            change(&mut state.selected_components);
            state.selected_components.clone()
        };

        if let Err(e) = storage::save_selected_components(self.inner.storage.as_ref(), &snapshot) {
            tracing::warn!(error = %e, "Failed to mirror component selection");
        }
        tracing::debug!(count = snapshot.len(), "Component selection changed");
        self.publish(StoreEvent::SelectionChanged { count: snapshot.len() });
    }

    /// Bump a usage counter locally and return the new stats.
    ///
    /// Starts from zeroed stats when none are loaded. Nothing is sent to
    /// the server.
    pub fn increment_stat(&self, key: StatKey, amount: u64) -> UserStats {
        let stats = {
            let mut state = self.inner.state.write();
            let stats = state.stats.get_or_insert_with(UserStats::default);
            stats.increment(key, amount, Utc::now());
            stats.clone()
        };
        tracing::debug!(stat = %key, amount = amount, value = stats.get(key), "Stat incremented");
        self.publish(StoreEvent::StatsUpdated(stats.clone()));
        stats
    }
}

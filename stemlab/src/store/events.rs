//! # Store Events
//!
//! Change notifications delivered to [`super::UserStore::subscribe`] receivers.

use super::state::LoadStatus;
use shared::{UserPreferences, UserStats};

#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    StatusChanged(LoadStatus),
    /// Server-confirmed preferences replaced the local copy
    PreferencesUpdated(UserPreferences),
    /// Local counters moved (not persisted)
    StatsUpdated(UserStats),
    SelectionChanged { count: usize },
    /// Preferences/stats load failed; the store is degraded until a manual reload
    LoadFailed(String),
}

//! # Store State Types

use shared::{Component, Difficulty, UserPreferences, UserStats};
use std::collections::HashSet;

/// `Uninitialized → Loading → Ready`.
///
/// A failed load still ends in `Ready` with whatever values were there
/// before, and records the failure in [`UserState::load_error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Uninitialized,
    Loading,
    Ready,
}

/// Everything the store holds.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserState {
    pub status: LoadStatus,
    pub preferences: Option<UserPreferences>,
    pub stats: Option<UserStats>,
    /// Current project basket, unique by id, in insertion order
    pub selected_components: Vec<Component>,
    /// Message of the last failed load, cleared by the next successful one
    pub load_error: Option<String>,
}

impl UserState {
    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    /// Ready but missing data because the last load failed.
    pub fn is_degraded(&self) -> bool {
        self.status == LoadStatus::Ready && self.load_error.is_some()
    }

    pub fn is_selected(&self, component_id: &str) -> bool {
        self.selected_components.iter().any(|c| c.id == component_id)
    }

    /// Skill level to use when no preferences are loaded yet.
    pub fn skill_level(&self) -> Difficulty {
        self.preferences
            .as_ref()
            .map(|p| p.skill_level)
            .unwrap_or_default()
    }

    pub fn selected_component_names(&self) -> Vec<String> {
        self.selected_components.iter().map(|c| c.name.clone()).collect()
    }
}

/// Drop later duplicates by id, keeping first-seen order.
pub fn dedupe_by_id(components: Vec<Component>) -> Vec<Component> {
    let mut seen = HashSet::new();
    components
        .into_iter()
        .filter(|c| seen.insert(c.id.clone()))
        .collect()
}

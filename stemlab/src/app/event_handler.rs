//! # Event Handler
//!
//! Applies results of spawned API calls to the application state.
//! Each handler takes the write lock once, for the duration of the update.

use crate::app::events::{AppEvent, CatalogTarget, PreferencesOrigin};
use crate::app::state::Screen;
use crate::app::App;
use crate::core::{AppError, RequestToken};
use shared::{Component, Idea, StatKey, UserPreferences};

impl App {
    /// Apply one async result. Returns the screen to navigate to, if any.
    pub(crate) fn handle_event_impl(&mut self, event: AppEvent) -> Option<Screen> {
        match event {
            AppEvent::CatalogLoaded { target, result } => {
                self.handle_catalog_loaded(target, result);
                None
            }
            AppEvent::IdeasGenerated { token, result } => {
                self.handle_ideas_generated(token, result);
                None
            }
            AppEvent::IdeaSaved { batch, index, result } => {
                self.handle_idea_saved(batch, index, result);
                None
            }
            AppEvent::LibraryLoaded(result) => {
                self.handle_library_loaded(result);
                None
            }
            AppEvent::FavoriteToggled { id, is_favorite, result } => {
                self.handle_favorite_toggled(&id, is_favorite, result);
                None
            }
            AppEvent::IdeaDeleted { id, result } => {
                self.handle_idea_deleted(&id, result);
                None
            }
            AppEvent::PreferencesSaved { origin, result } => self.handle_preferences_saved(origin, result),
        }
    }

    fn handle_catalog_loaded(&mut self, target: CatalogTarget, result: Result<Vec<Component>, AppError>) {
        let mut state = self.state.write();
        let catalog = match target {
            CatalogTarget::Selection => &mut state.selection.catalog,
            CatalogTarget::Browser => &mut state.browser.catalog,
        };
        if !catalog.loading {
            tracing::debug!(?target, "Catalog result with no load outstanding, dropped");
            return;
        }
        catalog.loading = false;

        match result {
            Ok(components) => {
                tracing::info!(?target, count = components.len(), "Catalog loaded");
                catalog.items = components;
                catalog.error = None;
            }
            Err(e) => {
                tracing::error!(?target, error = %e, "Components fetch error");
                catalog.error = Some(e.to_string());
                state.error("Failed to load components");
            }
        }
    }

    fn handle_ideas_generated(&mut self, token: RequestToken, result: Result<Vec<Idea>, AppError>) {
        if !self.generation_gate.is_current(token) {
            tracing::info!(?token, ok = result.is_ok(), "Discarding superseded generation response");
            return;
        }

        let mut state = self.state.write();
        state.generation.generating = false;
        state.generation.pending = None;

        match result {
            Ok(ideas) => {
                let count = ideas.len() as u64;
                tracing::info!(count = count, "Ideas generated");
                state.generation.ideas = ideas;
                state.generation.batch = Some(token);
                state.generation.saving.clear();
                state.generation.detail = None;
                state.success("Ideas generated successfully!");
                self.store.increment_stat(StatKey::IdeasGenerated, count);
            }
            Err(e) => {
                tracing::error!(error = %e, "Generate ideas error");
                state.generation.error = Some(e.to_string());
                state.error("Failed to generate ideas. Please try again.");
            }
        }
    }

    fn handle_idea_saved(&mut self, batch: Option<RequestToken>, index: usize, result: Result<Idea, AppError>) {
        let mut state = self.state.write();
        if state.generation.batch != batch {
            // the idea at `index` now belongs to a newer batch
            tracing::info!(index = index, ok = result.is_ok(), "Save finished for a replaced batch");
            if result.is_ok() {
                state.success("Idea saved to your library!");
            }
            return;
        }
        state.generation.saving.remove(&index);

        match result {
            Ok(saved) => {
                tracing::info!(id = %saved.id, "Idea saved");
                state.generation.saved_ids.insert(saved.id.clone());
                if let Some(idea) = state.generation.ideas.get_mut(index) {
                    idea.id = saved.id;
                }
                state.success("Idea saved to your library!");
            }
            Err(e) => {
                tracing::error!(index = index, error = %e, "Save idea error");
                state.error("Failed to save idea");
            }
        }
    }

    fn handle_library_loaded(&mut self, result: Result<Vec<Idea>, AppError>) {
        let mut state = self.state.write();
        if !state.library.ideas.loading {
            tracing::debug!("Library result with no load outstanding, dropped");
            return;
        }
        state.library.ideas.loading = false;

        match result {
            Ok(ideas) => {
                tracing::info!(count = ideas.len(), "Library loaded");
                state.library.ideas.items = ideas;
                state.library.ideas.error = None;
            }
            Err(e) => {
                tracing::error!(error = %e, "Ideas fetch error");
                state.library.ideas.error = Some(e.to_string());
                state.error("Failed to load ideas");
            }
        }
    }

    fn handle_favorite_toggled(&mut self, id: &str, is_favorite: bool, result: Result<(), AppError>) {
        let mut state = self.state.write();
        if !state.library.pending_favorites.remove(id) {
            tracing::debug!(id = id, "Favourite result with no toggle outstanding, dropped");
            return;
        }

        match result {
            Ok(()) => {
                for idea in state.library.ideas.items.iter_mut().filter(|i| i.id == id) {
                    idea.is_favorite = is_favorite;
                }
                if let Some(detail) = state.library.detail.as_mut().filter(|d| d.id == id) {
                    detail.is_favorite = is_favorite;
                }
                tracing::info!(id = id, is_favorite = is_favorite, "Favourite updated");
                state.success("Favorite status updated");
            }
            Err(e) => {
                tracing::error!(id = id, error = %e, "Toggle favourite error");
                state.error("Failed to update favorite status");
            }
        }
    }

    fn handle_idea_deleted(&mut self, id: &str, result: Result<(), AppError>) {
        let mut state = self.state.write();
        if !state.library.pending_deletes.remove(id) {
            tracing::debug!(id = id, "Delete result with no delete outstanding, dropped");
            return;
        }

        match result {
            Ok(()) => {
                state.library.ideas.items.retain(|i| i.id != id);
                if state.library.detail.as_ref().is_some_and(|d| d.id == id) {
                    state.library.detail = None;
                }
                tracing::info!(id = id, "Idea deleted");
                state.success("Idea deleted successfully");
            }
            Err(e) => {
                tracing::error!(id = id, error = %e, "Delete idea error");
                state.error("Failed to delete idea");
            }
        }
    }

    fn handle_preferences_saved(
        &mut self,
        origin: PreferencesOrigin,
        result: Result<UserPreferences, AppError>,
    ) -> Option<Screen> {
        let mut state = self.state.write();
        let outstanding = match origin {
            PreferencesOrigin::ThemeSelection => state.themes.saving,
            PreferencesOrigin::Profile => state.profile.saving,
        };
        if !outstanding {
            tracing::debug!(?origin, "Preferences result with no save outstanding, dropped");
            return None;
        }
        match (origin, result) {
            (PreferencesOrigin::ThemeSelection, Ok(confirmed)) => {
                state.themes.saving = false;
                state.themes.form = confirmed;
                state.success("Preferences saved successfully!");
                Some(Screen::IdeaGeneration)
            }
            (PreferencesOrigin::ThemeSelection, Err(_)) => {
                state.themes.saving = false;
                state.error("Failed to save preferences");
                None
            }
            (PreferencesOrigin::Profile, Ok(_)) => {
                state.profile.saving = false;
                state.profile.draft = None;
                state.success("Preferences updated successfully!");
                None
            }
            (PreferencesOrigin::Profile, Err(_)) => {
                state.profile.saving = false;
                state.error("Failed to update preferences");
                None
            }
        }
    }
}

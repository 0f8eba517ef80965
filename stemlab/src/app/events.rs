//! # Application Events
//!
//! Results of spawned API calls, sent back to the controller loop.

use crate::core::{AppError, RequestToken};
use shared::{Component, Idea, UserPreferences};

#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Catalog fetched for the selection or browser screen
    CatalogLoaded {
        target: CatalogTarget,
        result: Result<Vec<Component>, AppError>,
    },
    /// Generation response tagged with the token it was issued under
    IdeasGenerated {
        token: RequestToken,
        result: Result<Vec<Idea>, AppError>,
    },
    /// Save of the generated idea at `index` of the batch issued under `batch`
    IdeaSaved {
        batch: Option<RequestToken>,
        index: usize,
        result: Result<Idea, AppError>,
    },
    LibraryLoaded(Result<Vec<Idea>, AppError>),
    FavoriteToggled {
        id: String,
        is_favorite: bool,
        result: Result<(), AppError>,
    },
    IdeaDeleted {
        id: String,
        result: Result<(), AppError>,
    },
    /// Store save finished for the theme screen or the profile editor
    PreferencesSaved {
        origin: PreferencesOrigin,
        result: Result<UserPreferences, AppError>,
    },
}

/// Which screen asked for the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogTarget {
    Selection,
    Browser,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferencesOrigin {
    ThemeSelection,
    Profile,
}

//! # Application State Types
//!
//! Screens, per-screen controller state and the notice feed.

use std::collections::{BTreeSet, VecDeque};

use crate::core::RequestToken;
use crate::query::{ListQuery, Scope, Selector, SortKey};
use shared::{Component, Idea, UserPreferences};

/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    /// Three-page introduction; also the root route
    #[default]
    Onboarding,
    ComponentSelection,
    ThemeSelection,
    ComponentBrowser,
    IdeaGeneration,
    IdeasLibrary,
    Profile,
}

impl Screen {
    pub fn all() -> &'static [Screen] {
        &[
            Screen::Onboarding,
            Screen::ComponentSelection,
            Screen::ThemeSelection,
            Screen::ComponentBrowser,
            Screen::IdeaGeneration,
            Screen::IdeasLibrary,
            Screen::Profile,
        ]
    }

    pub fn route(&self) -> &'static str {
        match self {
            Screen::Onboarding => "/",
            Screen::ComponentSelection => "/component-selection",
            Screen::ThemeSelection => "/theme-selection",
            Screen::ComponentBrowser => "/component-browser",
            Screen::IdeaGeneration => "/ai-generation",
            Screen::IdeasLibrary => "/ideas-library",
            Screen::Profile => "/profile",
        }
    }

    /// Resolve a route. `/onboarding` is an alias of the root; anything
    /// unknown falls back to the root.
    pub fn from_route(route: &str) -> Screen {
        if route == "/onboarding" {
            return Screen::Onboarding;
        }
        Screen::all()
            .iter()
            .copied()
            .find(|s| s.route() == route)
            .unwrap_or_default()
    }

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Onboarding => "Welcome",
            Screen::ComponentSelection => "Select Components",
            Screen::ThemeSelection => "Themes & Skill Level",
            Screen::ComponentBrowser => "Component Database",
            Screen::IdeaGeneration => "AI Project Ideas",
            Screen::IdeasLibrary => "Ideas Library",
            Screen::Profile => "Profile",
        }
    }
}

/// Onboarding page content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OnboardingPage {
    pub title: &'static str,
    pub description: &'static str,
}

pub const ONBOARDING_PAGES: &[OnboardingPage] = &[
    OnboardingPage {
        title: "Scan Components",
        description: "Use your camera to scan QR codes and barcodes on electronic components. Instantly identify parts and add them to your project inventory.",
    },
    OnboardingPage {
        title: "AI-Powered Ideas",
        description: "Get creative project suggestions based on your available components. Our AI generates unique, feasible ideas tailored to your skill level.",
    },
    OnboardingPage {
        title: "Build Your Library",
        description: "Save your favorite project ideas, export detailed reports, and share innovations with your team. Track your STEM learning journey.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OnboardingState {
    pub page: usize,
}

impl OnboardingState {
    pub fn current(&self) -> &'static OnboardingPage {
        &ONBOARDING_PAGES[self.page.min(ONBOARDING_PAGES.len() - 1)]
    }

    pub fn is_last_page(&self) -> bool {
        self.page + 1 >= ONBOARDING_PAGES.len()
    }
}

/// Fetched collection with its loading flag and last error.
#[derive(Debug, Clone, PartialEq)]
pub struct Remote<T> {
    pub items: Vec<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for Remote<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
        }
    }
}

/// Grid or list presentation on the selection screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

/// Component selection screen. The selection is local until "continue"
/// commits it to the store.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SelectionState {
    pub catalog: Remote<Component>,
    pub query: ListQuery,
    pub view_mode: ViewMode,
    pub local_selection: Vec<Component>,
}

impl SelectionState {
    pub fn visible(&self) -> Vec<Component> {
        self.query.apply(&self.catalog.items)
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.local_selection.iter().any(|c| c.id == id)
    }
}

/// Theme and skill form, seeded from the store's preferences.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ThemeFormState {
    pub form: UserPreferences,
    pub saving: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BrowserState {
    pub catalog: Remote<Component>,
    pub query: ListQuery,
    /// Component open in the detail view
    pub detail: Option<Component>,
}

impl Default for BrowserState {
    fn default() -> Self {
        Self {
            catalog: Remote::default(),
            query: ListQuery::new().with_sort(SortKey::Name),
            detail: None,
        }
    }
}

impl BrowserState {
    pub fn visible(&self) -> Vec<Component> {
        self.query.apply(&self.catalog.items)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GenerationState {
    pub ideas: Vec<Idea>,
    pub generating: bool,
    /// Token of the request whose response will be accepted
    pub pending: Option<RequestToken>,
    /// Token of the request that produced `ideas`
    pub batch: Option<RequestToken>,
    pub error: Option<String>,
    /// Ids the server confirmed for saved ideas
    pub saved_ids: BTreeSet<String>,
    /// Generated-idea indices with a save in flight
    pub saving: BTreeSet<usize>,
    pub detail: Option<Idea>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LibraryState {
    pub ideas: Remote<Idea>,
    pub query: ListQuery,
    /// Ids with a favourite toggle awaiting acknowledgement
    pub pending_favorites: BTreeSet<String>,
    pub pending_deletes: BTreeSet<String>,
    pub detail: Option<Idea>,
}

impl LibraryState {
    pub fn visible(&self) -> Vec<Idea> {
        self.query.apply(&self.ideas.items)
    }

    pub fn selector(&self) -> &Selector {
        &self.query.selector
    }

    pub fn tab(&self) -> Scope {
        self.query.scope
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileTab {
    #[default]
    Profile,
    Stats,
    Settings,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfileState {
    pub tab: ProfileTab,
    /// Draft being edited; `None` when not editing
    pub draft: Option<UserPreferences>,
    pub saving: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

/// A user-facing outcome message (toast equivalent).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

/// Notices kept before the oldest is dropped.
pub const MAX_NOTICES: usize = 32;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub current_screen: Screen,
    pub onboarding: OnboardingState,
    pub selection: SelectionState,
    pub themes: ThemeFormState,
    pub browser: BrowserState,
    pub generation: GenerationState,
    pub library: LibraryState,
    pub profile: ProfileState,
    pub notices: VecDeque<Notice>,
}

impl AppState {
    pub fn notify(&mut self, level: NoticeLevel, message: impl Into<String>) {
        let message = message.into();
        match level {
            NoticeLevel::Error => tracing::warn!(notice = %message, "Error notice"),
            _ => tracing::debug!(notice = %message, "Notice"),
        }
        if self.notices.len() >= MAX_NOTICES {
            self.notices.pop_front();
        }
        self.notices.push_back(Notice { level, message });
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.notify(NoticeLevel::Info, message);
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.notify(NoticeLevel::Success, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.notify(NoticeLevel::Error, message);
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        self.notices.drain(..).collect()
    }

    pub fn last_notice(&self) -> Option<&Notice> {
        self.notices.back()
    }
}

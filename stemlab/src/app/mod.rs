//! # Application Module
//!
//! Headless screen controllers for the STEM idea client.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                 App (caller)                  │
//! │  - user actions → handlers                    │
//! │  - on_tick() / process_next_event()           │
//! └──────────────┬────────────────────────────────┘
//!                │ tokio::spawn
//!                ▼
//! ┌──────────────────────────────────────────────┐
//! │   API calls / store saves (Tokio tasks)       │
//! └──────────────┬────────────────────────────────┘
//!                │ AppEvent via async_channel
//!                ▼
//! ┌──────────────────────────────────────────────┐
//! │   event_handler: apply result to AppState     │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! ## State Management
//!
//! Screen state lives in `Arc<RwLock<AppState>>` (`parking_lot`). Shared user
//! data (preferences, stats, selection) lives in the [`UserStore`], which
//! handlers receive explicitly; screens never mutate it behind the store's
//! back.
//!
//! ## Session Expiry
//!
//! When built from an [`ApiClient`] the app listens to its session
//! channel. A 401 from any call, on any screen, resets screen state and
//! routes to [`Screen::Onboarding`] (`/`).
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use stemlab::app::{App, Screen};
//! use stemlab::config::ClientConfig;
//! use stemlab::services::api::ApiClient;
//! use stemlab::services::storage::MemoryStorage;
//!
//! # async fn run() -> stemlab::core::Result<()> {
//! let storage = Arc::new(MemoryStorage::new());
//! let client = ApiClient::new(&ClientConfig::default(), storage.clone())?;
//! let mut app = App::from_client(client, storage);
//! app.start();
//! app.navigate(Screen::IdeasLibrary);
//! app.process_next_event().await;
//! println!("{} saved ideas", app.state.read().library.ideas.items.len());
//! # Ok(())
//! # }
//! ```

mod event_handler;
mod events;
mod handlers;
mod state;

pub use events::{AppEvent, CatalogTarget, PreferencesOrigin};
pub use state::*;

use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;
use std::sync::Arc;

use crate::core::{ApiService, RequestGate};
use crate::query::{LibraryStats, Scope, SortKey};
use crate::services::api::{ApiClient, SessionEvent};
use crate::services::storage::LocalStorage;
use crate::store::UserStore;
use shared::{Difficulty, UserPreferences};

/// Library difficulty filter values, in display order.
pub const LIBRARY_FILTERS: &[&str] = &["All", "Beginner", "Intermediate", "Advanced", "Favorites"];

/// Screen controller orchestrator.
pub struct App {
    /// Screen state. Hold locks briefly; never across an `.await`.
    pub state: Arc<RwLock<AppState>>,
    pub store: UserStore,
    api: Arc<dyn ApiService>,
    storage: Arc<dyn LocalStorage>,
    event_tx: Sender<AppEvent>,
    event_rx: Receiver<AppEvent>,
    session_rx: Option<Receiver<SessionEvent>>,
    generation_gate: RequestGate,
}

impl App {
    pub fn new(api: Arc<dyn ApiService>, storage: Arc<dyn LocalStorage>, store: UserStore) -> Self {
        let (event_tx, event_rx) = unbounded();
        Self {
            state: Arc::new(RwLock::new(AppState::default())),
            store,
            api,
            storage,
            event_tx,
            event_rx,
            session_rx: None,
            generation_gate: RequestGate::new(),
        }
    }

    /// Build the app, its store, and the session listener around `client`.
    pub fn from_client(client: ApiClient, storage: Arc<dyn LocalStorage>) -> Self {
        let session_rx = client.session_events();
        let api: Arc<dyn ApiService> = Arc::new(client);
        let store = UserStore::new(api.clone(), storage.clone());
        Self::new(api, storage, store).with_session_events(session_rx)
    }

    pub fn with_session_events(mut self, session_rx: Receiver<SessionEvent>) -> Self {
        self.session_rx = Some(session_rx);
        self
    }

    /// Kick off the store load and open the first screen.
    ///
    /// Users who finished onboarding start on component selection.
    pub fn start(&mut self) {
        let store = self.store.clone();
        tokio::spawn(async move { store.load().await });

        let screen = handlers::onboarding::initial_screen(self.storage.as_ref());
        tracing::info!(screen = screen.route(), "App started");
        self.navigate(screen);
    }

    /// Reload preferences and stats after a failed load.
    pub fn reload_user_data(&self) {
        let store = self.store.clone();
        tokio::spawn(async move { store.refresh().await });
    }

    pub fn current_screen(&self) -> Screen {
        self.state.read().current_screen
    }

    /// Switch screens and run the target screen's mount actions.
    pub fn navigate(&mut self, screen: Screen) {
        handlers::navigation::handle_screen_change(self.state.clone(), screen);

        let redirect = match screen {
            Screen::Onboarding => {
                self.state.write().onboarding = OnboardingState::default();
                None
            }
            Screen::ComponentSelection => {
                handlers::components::handle_selection_mount(self.state.clone(), &self.store);
                handlers::components::handle_load_catalog(
                    self.state.clone(),
                    self.event_tx.clone(),
                    self.api.clone(),
                    CatalogTarget::Selection,
                );
                None
            }
            Screen::ThemeSelection => {
                handlers::preferences::handle_theme_mount(self.state.clone(), &self.store);
                None
            }
            Screen::ComponentBrowser => {
                handlers::components::handle_load_catalog(
                    self.state.clone(),
                    self.event_tx.clone(),
                    self.api.clone(),
                    CatalogTarget::Browser,
                );
                None
            }
            Screen::IdeaGeneration => handlers::generation::handle_generation_mount(
                self.state.clone(),
                self.event_tx.clone(),
                self.api.clone(),
                &self.store,
                &self.generation_gate,
            ),
            Screen::IdeasLibrary => {
                handlers::library::handle_load_library(self.state.clone(), self.event_tx.clone(), self.api.clone());
                None
            }
            Screen::Profile => {
                self.state.write().profile = ProfileState::default();
                None
            }
        };

        if let Some(target) = redirect {
            self.navigate(target);
        }
    }

    pub fn navigate_route(&mut self, route: &str) {
        self.navigate(Screen::from_route(route));
    }

    /// Apply every pending result without waiting.
    pub fn on_tick(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
        }
        self.drain_session_events(false);
    }

    /// Wait for the next async result or session expiry and apply it.
    ///
    /// Store loads report only through the session channel, so a 401 from
    /// them wakes this call too. Session events queued alongside a result
    /// are applied afterwards.
    pub async fn process_next_event(&mut self) -> bool {
        let event_rx = self.event_rx.clone();
        let next = match self.session_rx.clone() {
            Some(session_rx) => tokio::select! {
                event = event_rx.recv() => Some(event),
                Ok(SessionEvent::Expired) = session_rx.recv() => None,
            },
            None => Some(event_rx.recv().await),
        };

        match next {
            Some(Ok(event)) => {
                self.handle_event(event);
                self.drain_session_events(false);
                true
            }
            Some(Err(_)) => false,
            None => {
                self.drain_session_events(true);
                true
            }
        }
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        if let Some(screen) = self.handle_event_impl(event) {
            self.navigate(screen);
        }
    }

    fn drain_session_events(&mut self, mut expired: bool) {
        if let Some(session_rx) = &self.session_rx {
            while let Ok(SessionEvent::Expired) = session_rx.try_recv() {
                expired = true;
            }
        }
        if expired {
            // in-flight generation belongs to the old session
            self.generation_gate.issue();
            handlers::navigation::handle_session_expired(self.state.clone());
        }
    }

    // Onboarding

    pub fn next_onboarding_page(&self) {
        handlers::onboarding::handle_next_page(self.state.clone());
    }

    pub fn skip_onboarding(&self) {
        handlers::onboarding::handle_skip(self.state.clone());
    }

    pub fn complete_onboarding(&mut self) {
        let screen = handlers::onboarding::handle_complete(self.storage.as_ref());
        self.navigate(screen);
    }

    // Component selection

    pub fn set_selection_search(&self, search: impl Into<String>) {
        handlers::components::handle_selection_search(self.state.clone(), search.into());
    }

    pub fn set_selection_category(&self, category: &str) {
        handlers::components::handle_selection_category(self.state.clone(), category);
    }

    pub fn set_view_mode(&self, mode: ViewMode) {
        handlers::components::handle_view_mode(self.state.clone(), mode);
    }

    pub fn toggle_component(&self, component_id: &str) {
        handlers::components::handle_toggle_component(self.state.clone(), component_id);
    }

    pub fn continue_selection(&mut self) {
        if let Some(screen) = handlers::components::handle_continue(self.state.clone(), &self.store) {
            self.navigate(screen);
        }
    }

    // Theme selection

    pub fn toggle_theme(&self, theme_id: &str) {
        handlers::preferences::handle_toggle_theme(self.state.clone(), theme_id);
    }

    pub fn toggle_interest(&self, interest: &str) {
        handlers::preferences::handle_toggle_interest(self.state.clone(), interest);
    }

    pub fn set_skill_level(&self, level: Difficulty) {
        handlers::preferences::handle_skill_level(self.state.clone(), level);
    }

    pub fn set_duration(&self, duration: &str) {
        handlers::preferences::handle_duration(self.state.clone(), duration);
    }

    pub fn set_team_size(&self, team_size: &str) {
        handlers::preferences::handle_team_size(self.state.clone(), team_size);
    }

    pub fn save_themes(&self) {
        handlers::preferences::handle_save_themes(self.state.clone(), self.event_tx.clone(), self.store.clone());
    }

    // Component browser

    pub fn set_browser_search(&self, search: impl Into<String>) {
        handlers::components::handle_browser_search(self.state.clone(), search.into());
    }

    pub fn set_browser_category(&self, category: &str) {
        handlers::components::handle_browser_category(self.state.clone(), category);
    }

    pub fn set_browser_sort(&self, key: SortKey) {
        handlers::components::handle_browser_sort(self.state.clone(), key);
    }

    pub fn open_component(&self, component_id: &str) {
        handlers::components::handle_open_component(self.state.clone(), component_id);
    }

    pub fn close_component(&self) {
        handlers::components::handle_close_component(self.state.clone());
    }

    pub fn add_to_project(&self, component_id: &str) {
        handlers::components::handle_add_to_project(self.state.clone(), &self.store, component_id);
    }

    // Idea generation

    /// Regenerate for the current selection. Earlier in-flight requests
    /// are superseded.
    pub fn generate_ideas(&self) {
        handlers::generation::handle_generate(
            self.state.clone(),
            self.event_tx.clone(),
            self.api.clone(),
            &self.store,
            &self.generation_gate,
        );
    }

    pub fn save_generated_idea(&self, index: usize) {
        handlers::generation::handle_save_idea(
            self.state.clone(),
            self.event_tx.clone(),
            self.api.clone(),
            &self.store,
            index,
        );
    }

    pub fn open_generated_idea(&self, index: usize) {
        handlers::generation::handle_open_generated(self.state.clone(), index);
    }

    pub fn close_generated_idea(&self) {
        handlers::generation::handle_close_generated(self.state.clone());
    }

    /// Share text for a generated idea.
    pub fn share_generated_idea(&self, index: usize) -> Option<String> {
        self.state.read().generation.ideas.get(index).map(|i| i.share_text())
    }

    // Ideas library

    pub fn set_library_search(&self, search: impl Into<String>) {
        handlers::library::handle_library_search(self.state.clone(), search.into());
    }

    /// One of [`LIBRARY_FILTERS`].
    pub fn set_library_filter(&self, filter: &str) {
        handlers::library::handle_library_filter(self.state.clone(), filter);
    }

    pub fn set_library_tab(&self, tab: Scope) {
        handlers::library::handle_library_tab(self.state.clone(), tab);
    }

    pub fn set_library_sort(&self, key: Option<SortKey>) {
        handlers::library::handle_library_sort(self.state.clone(), key);
    }

    pub fn toggle_favorite(&self, id: &str) {
        handlers::library::handle_toggle_favorite(self.state.clone(), self.event_tx.clone(), self.api.clone(), id);
    }

    pub fn delete_idea(&self, id: &str) {
        handlers::library::handle_delete_idea(self.state.clone(), self.event_tx.clone(), self.api.clone(), id);
    }

    pub fn open_idea(&self, id: &str) {
        handlers::library::handle_open_idea(self.state.clone(), id);
    }

    pub fn close_idea(&self) {
        handlers::library::handle_close_idea(self.state.clone());
    }

    pub fn share_idea(&self, id: &str) -> Option<String> {
        self.state
            .read()
            .library
            .ideas
            .items
            .iter()
            .find(|i| i.id == id)
            .map(|i| i.share_text())
    }

    pub fn library_stats(&self) -> LibraryStats {
        LibraryStats::from_ideas(&self.state.read().library.ideas.items)
    }

    // Profile

    pub fn set_profile_tab(&self, tab: ProfileTab) {
        handlers::profile::handle_profile_tab(self.state.clone(), tab);
    }

    pub fn begin_profile_edit(&self) {
        handlers::profile::handle_begin_edit(self.state.clone(), &self.store);
    }

    pub fn edit_profile(&self, edit: impl FnOnce(&mut UserPreferences)) {
        handlers::profile::handle_edit_draft(self.state.clone(), edit);
    }

    pub fn cancel_profile_edit(&self) {
        handlers::profile::handle_cancel_edit(self.state.clone());
    }

    pub fn save_profile(&self) {
        handlers::profile::handle_save_profile(self.state.clone(), self.event_tx.clone(), self.store.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use crate::core::AppError;
    use crate::services::storage::{self, MemoryStorage, AUTH_TOKEN_KEY};
    use crate::test_support::{component, idea, MockApi};
    use shared::StatKey;
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn app_with(api: Arc<MockApi>) -> (App, Arc<MemoryStorage>) {
        let local = Arc::new(MemoryStorage::new());
        let store = UserStore::new(api.clone(), local.clone());
        (App::new(api, local.clone(), store), local)
    }

    fn catalog() -> Vec<shared::Component> {
        vec![
            component("1", "Arduino Uno", "Microcontrollers"),
            component("2", "DHT22", "Sensors"),
            component("3", "Servo Motor", "Actuators"),
        ]
    }

    async fn settle(app: &mut App) {
        let processed = tokio::time::timeout(Duration::from_secs(5), app.process_next_event())
            .await
            .expect("timed out waiting for app event");
        assert!(processed);
    }

    fn last_notice(app: &App) -> Notice {
        app.state.read().last_notice().cloned().expect("no notice")
    }

    #[tokio::test]
    async fn test_start_routes_by_onboarding_flag() {
        let api = Arc::new(MockApi::with_catalog(catalog()));
        let (mut app, _) = app_with(api.clone());
        app.start();
        assert_eq!(app.current_screen(), Screen::Onboarding);

        let (mut app, local) = app_with(api.clone());
        storage::mark_onboarding_completed(local.as_ref()).unwrap();
        app.start();
        assert_eq!(app.current_screen(), Screen::ComponentSelection);
        settle(&mut app).await;
        assert_eq!(app.state.read().selection.catalog.items.len(), 3);
    }

    #[tokio::test]
    async fn test_onboarding_flow_persists_flag() {
        let api = Arc::new(MockApi::with_catalog(catalog()));
        let (mut app, local) = app_with(api);
        app.navigate_route("/");

        app.next_onboarding_page();
        assert_eq!(app.state.read().onboarding.page, 1);
        app.skip_onboarding();
        assert!(app.state.read().onboarding.is_last_page());
        app.next_onboarding_page();
        assert_eq!(app.state.read().onboarding.page, 2);

        app.complete_onboarding();
        assert!(storage::onboarding_completed(local.as_ref()).unwrap());
        assert_eq!(app.current_screen(), Screen::ComponentSelection);
    }

    #[tokio::test]
    async fn test_continue_requires_a_component() {
        let api = Arc::new(MockApi::with_catalog(catalog()));
        let (mut app, _) = app_with(api);
        app.navigate(Screen::ComponentSelection);
        settle(&mut app).await;

        app.continue_selection();
        assert_eq!(app.current_screen(), Screen::ComponentSelection);
        let notice = last_notice(&app);
        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.message, "Please select at least one component to continue");

        app.toggle_component("2");
        app.toggle_component("1");
        app.toggle_component("2");
        app.toggle_component("2");
        app.continue_selection();

        let names: Vec<_> = app.store.selected_components().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Arduino Uno", "DHT22"]);
        assert_eq!(app.current_screen(), Screen::ThemeSelection);
    }

    #[tokio::test]
    async fn test_selection_filters_catalog() {
        let api = Arc::new(MockApi::with_catalog(catalog()));
        let (mut app, _) = app_with(api);
        app.navigate(Screen::ComponentSelection);
        settle(&mut app).await;

        app.set_selection_category("Sensors");
        let visible = app.state.read().selection.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "2");

        app.set_selection_category("All");
        app.set_selection_search("MOTOR");
        let visible = app.state.read().selection.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "3");
    }

    #[tokio::test]
    async fn test_generation_without_selection_makes_no_call() {
        let api = Arc::new(MockApi::with_catalog(catalog()));
        let (mut app, _) = app_with(api.clone());

        app.navigate(Screen::IdeaGeneration);

        assert_eq!(api.count("generate_ideas"), 0);
        assert_eq!(app.current_screen(), Screen::ComponentSelection);
        assert!(app
            .state
            .read()
            .notices
            .iter()
            .any(|n| n.message == "Please select components first"));

        app.generate_ideas();
        assert_eq!(api.count("generate_ideas"), 0);
    }

    #[tokio::test]
    async fn test_generation_increments_stat_and_sends_names() {
        let api = Arc::new(MockApi::default());
        api.generate_plan
            .lock()
            .push_back((Duration::ZERO, vec![idea("a", "One"), idea("b", "Two")]));
        let (mut app, _) = app_with(api.clone());
        app.store.set_selected_components(catalog());

        app.navigate(Screen::IdeaGeneration);
        assert!(app.state.read().generation.generating);
        settle(&mut app).await;

        let state = app.state.read();
        assert!(!state.generation.generating);
        assert_eq!(state.generation.ideas.len(), 2);
        drop(state);
        assert_eq!(app.store.stats().unwrap().get(StatKey::IdeasGenerated), 2);

        let requests = api.generate_requests.lock();
        assert_eq!(requests[0].selected_components, vec!["Arduino Uno", "DHT22", "Servo Motor"]);
        assert_eq!(requests[0].count, 5);
    }

    #[tokio::test]
    async fn test_stale_generation_response_is_discarded() {
        let api = Arc::new(MockApi::default());
        {
            let mut plan = api.generate_plan.lock();
            plan.push_back((Duration::from_millis(150), vec![idea("old-1", "Old"), idea("old-2", "Old")]));
            plan.push_back((Duration::ZERO, vec![idea("new-1", "New")]));
        }
        let (mut app, _) = app_with(api.clone());
        app.store.set_selected_components(catalog());

        app.generate_ideas();
        app.generate_ideas();

        // newer response arrives first, the older one afterwards
        settle(&mut app).await;
        settle(&mut app).await;

        let state = app.state.read();
        let ids: Vec<_> = state.generation.ideas.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["new-1"]);
        assert!(!state.generation.generating);
        drop(state);
        assert_eq!(app.store.stats().unwrap().ideas_generated, 1);
    }

    #[tokio::test]
    async fn test_save_generated_idea_fills_components() {
        let api = Arc::new(MockApi::default());
        let (mut app, _) = app_with(api.clone());
        app.store.set_selected_components(vec![component("1", "Arduino Uno", "Microcontrollers")]);
        app.generate_ideas();
        settle(&mut app).await;

        app.save_generated_idea(0);
        settle(&mut app).await;

        let saved = api.ideas.lock()[0].clone();
        assert_eq!(saved.components, vec!["Arduino Uno"]);
        assert!(app.state.read().generation.saved_ids.contains(&saved.id));
        assert_eq!(last_notice(&app).message, "Idea saved to your library!");
    }

    #[tokio::test]
    async fn test_theme_save_requires_theme_then_routes_to_generation() {
        let api = Arc::new(MockApi::default());
        let (mut app, _) = app_with(api.clone());
        app.store.set_selected_components(catalog());
        app.navigate(Screen::ThemeSelection);

        app.save_themes();
        assert_eq!(last_notice(&app).message, "Please select at least one theme");
        assert_eq!(api.count("save_preferences"), 0);

        app.toggle_theme("robotics");
        app.set_skill_level(Difficulty::Intermediate);
        app.save_themes();
        settle(&mut app).await;

        assert_eq!(app.current_screen(), Screen::IdeaGeneration);
        let prefs = app.store.preferences().unwrap();
        assert_eq!(prefs.selected_themes, vec!["robotics"]);
        assert_eq!(prefs.skill_level, Difficulty::Intermediate);
        // generation started on mount
        assert_eq!(api.count("generate_ideas"), 1);
    }

    #[tokio::test]
    async fn test_theme_save_failure_stays_on_screen() {
        let api = Arc::new(MockApi::default());
        let (mut app, _) = app_with(api.clone());
        app.navigate(Screen::ThemeSelection);
        app.toggle_theme("iot");
        api.fail(AppError::Network("down".to_string()));

        app.save_themes();
        settle(&mut app).await;

        assert_eq!(app.current_screen(), Screen::ThemeSelection);
        assert_eq!(last_notice(&app).message, "Failed to save preferences");
        assert!(app.store.preferences().is_none());
    }

    #[tokio::test]
    async fn test_favorite_shown_only_after_acknowledgement() {
        let api = Arc::new(MockApi::default());
        *api.ideas.lock() = vec![idea("7", "Weather Station"), idea("8", "Line Follower")];
        *api.favorite_delay.lock() = Duration::from_millis(50);
        let (mut app, _) = app_with(api.clone());
        app.navigate(Screen::IdeasLibrary);
        settle(&mut app).await;

        app.toggle_favorite("7");
        {
            let state = app.state.read();
            assert!(!state.library.ideas.items[0].is_favorite);
            assert!(state.library.pending_favorites.contains("7"));
        }

        settle(&mut app).await;
        let state = app.state.read();
        assert!(state.library.ideas.items[0].is_favorite);
        assert!(!state.library.ideas.items[1].is_favorite);
        assert!(state.library.pending_favorites.is_empty());
    }

    #[tokio::test]
    async fn test_favorite_failure_keeps_flag() {
        let api = Arc::new(MockApi::default());
        *api.ideas.lock() = vec![idea("7", "Weather Station")];
        let (mut app, _) = app_with(api.clone());
        app.navigate(Screen::IdeasLibrary);
        settle(&mut app).await;

        api.fail(AppError::Http {
            status: 500,
            message: "boom".to_string(),
        });
        app.toggle_favorite("7");
        settle(&mut app).await;

        assert!(!app.state.read().library.ideas.items[0].is_favorite);
        assert_eq!(last_notice(&app).message, "Failed to update favorite status");
    }

    #[tokio::test]
    async fn test_library_filters_and_delete() {
        let api = Arc::new(MockApi::default());
        let mut starred = idea("2", "Robot Arm");
        starred.is_favorite = true;
        starred.difficulty = Difficulty::Advanced;
        *api.ideas.lock() = vec![idea("1", "Plant Monitor"), starred];
        let (mut app, _) = app_with(api.clone());
        app.navigate(Screen::IdeasLibrary);
        settle(&mut app).await;

        app.set_library_filter("Favorites");
        assert_eq!(app.state.read().library.visible().len(), 1);
        app.set_library_filter("Advanced");
        assert_eq!(app.state.read().library.visible()[0].id, "2");
        app.set_library_filter("All");
        app.set_library_tab(Scope::Favorites);
        assert_eq!(app.state.read().library.visible().len(), 1);

        let stats = app.library_stats();
        assert_eq!((stats.total, stats.favorites, stats.advanced), (2, 1, 1));

        app.delete_idea("1");
        assert_eq!(app.state.read().library.ideas.items.len(), 2);
        settle(&mut app).await;
        assert_eq!(app.state.read().library.ideas.items.len(), 1);
        assert_eq!(last_notice(&app).message, "Idea deleted successfully");
    }

    #[tokio::test]
    async fn test_browser_add_to_project() {
        let api = Arc::new(MockApi::with_catalog(catalog()));
        let (mut app, _) = app_with(api);
        app.navigate(Screen::ComponentBrowser);
        settle(&mut app).await;

        app.set_browser_sort(SortKey::Category);
        let first = app.state.read().browser.visible()[0].name.clone();
        assert_eq!(first, "Servo Motor");

        app.add_to_project("2");
        assert_eq!(last_notice(&app).message, "Added DHT22 to your project");
        app.add_to_project("2");
        let notice = last_notice(&app);
        assert_eq!(notice.level, NoticeLevel::Info);
        assert_eq!(notice.message, "DHT22 is already in your project");
        assert_eq!(app.store.selected_components().len(), 1);
    }

    #[tokio::test]
    async fn test_profile_edit_saves_through_store() {
        let api = Arc::new(MockApi::default());
        let (mut app, _) = app_with(api.clone());
        app.navigate(Screen::Profile);

        app.begin_profile_edit();
        app.edit_profile(|p| p.dark_mode_enabled = true);
        app.save_profile();
        settle(&mut app).await;

        assert!(app.store.preferences().unwrap().dark_mode_enabled);
        assert!(app.state.read().profile.draft.is_none());
        assert_eq!(last_notice(&app).message, "Preferences updated successfully!");
    }

    #[tokio::test]
    async fn test_unauthorized_response_routes_to_root() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/ideas"))
            .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({"detail": "expired"})))
            .mount(&server)
            .await;

        let local = Arc::new(MemoryStorage::new());
        local.set(AUTH_TOKEN_KEY, "stale").unwrap();
        let config = ClientConfig {
            backend_url: server.uri(),
            ..Default::default()
        };
        let client = ApiClient::new(&config, local.clone()).unwrap();
        let mut app = App::from_client(client, local.clone());

        app.navigate(Screen::IdeasLibrary);
        settle(&mut app).await;

        assert_eq!(app.current_screen(), Screen::Onboarding);
        assert_eq!(app.current_screen().route(), "/");
        assert!(storage::auth_token(local.as_ref()).unwrap().is_none());
        assert!(app.state.read().library.ideas.items.is_empty());
    }

    #[tokio::test]
    async fn test_unauthorized_store_reload_routes_to_root() {
        let server = MockServer::start().await;
        for route in ["/api/preferences", "/api/stats"] {
            Mock::given(method("GET"))
                .and(path(route))
                .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({"detail": "expired"})))
                .mount(&server)
                .await;
        }

        let local = Arc::new(MemoryStorage::new());
        local.set(AUTH_TOKEN_KEY, "stale").unwrap();
        let config = ClientConfig {
            backend_url: server.uri(),
            ..Default::default()
        };
        let client = ApiClient::new(&config, local.clone()).unwrap();
        let mut app = App::from_client(client, local.clone());

        app.navigate(Screen::Profile);
        app.reload_user_data();
        settle(&mut app).await;

        assert_eq!(app.current_screen(), Screen::Onboarding);
        assert!(storage::auth_token(local.as_ref()).unwrap().is_none());
        assert_eq!(last_notice(&app).message, "Your session has expired");
    }

    #[tokio::test]
    async fn test_save_result_for_replaced_batch_leaves_new_ideas_alone() {
        let api = Arc::new(MockApi::default());
        {
            let mut plan = api.generate_plan.lock();
            plan.push_back((Duration::ZERO, vec![idea("", "First")]));
            plan.push_back((Duration::ZERO, vec![idea("", "Second")]));
        }
        *api.save_delay.lock() = Duration::from_millis(100);
        let (mut app, _) = app_with(api.clone());
        app.store.set_selected_components(catalog());

        app.generate_ideas();
        settle(&mut app).await;
        app.save_generated_idea(0);
        app.generate_ideas();

        // the second batch lands before the delayed save
        settle(&mut app).await;
        assert_eq!(app.state.read().generation.ideas[0].title, "Second");
        settle(&mut app).await;

        assert_eq!(api.ideas.lock()[0].title, "First");
        let state = app.state.read();
        assert_eq!(state.generation.ideas[0].title, "Second");
        assert!(state.generation.ideas[0].id.is_empty());
        assert!(state.generation.saved_ids.is_empty());
        drop(state);

        app.save_generated_idea(0);
        settle(&mut app).await;
        let state = app.state.read();
        assert_eq!(state.generation.ideas[0].id, "saved-2");
        assert!(state.generation.saving.is_empty());
    }

    #[tokio::test]
    async fn test_session_expiry_drops_in_flight_generation() {
        let api = Arc::new(MockApi::default());
        api.generate_plan
            .lock()
            .push_back((Duration::from_millis(100), vec![idea("late", "Late")]));
        let (session_tx, session_rx) = unbounded();
        let (app, _) = app_with(api.clone());
        let mut app = app.with_session_events(session_rx);
        app.store.set_selected_components(catalog());

        app.generate_ideas();
        session_tx.send(SessionEvent::Expired).await.unwrap();
        settle(&mut app).await;
        assert_eq!(app.current_screen(), Screen::Onboarding);

        settle(&mut app).await;
        let state = app.state.read();
        assert!(state.generation.ideas.is_empty());
        assert!(!state.generation.generating);
        drop(state);
        assert_eq!(app.store.stats().map_or(0, |s| s.ideas_generated), 0);
    }

    #[tokio::test]
    async fn test_theme_save_after_expiry_does_not_route() {
        let api = Arc::new(MockApi::default());
        let (session_tx, session_rx) = unbounded();
        let (app, _) = app_with(api.clone());
        let mut app = app.with_session_events(session_rx);
        app.navigate(Screen::ThemeSelection);
        app.toggle_theme("robotics");

        app.save_themes();
        session_tx.send(SessionEvent::Expired).await.unwrap();
        app.on_tick();
        assert_eq!(app.current_screen(), Screen::Onboarding);

        settle(&mut app).await;
        assert!(app.store.preferences().is_some());
        assert_eq!(app.current_screen(), Screen::Onboarding);
        assert_eq!(api.count("generate_ideas"), 0);
    }
}

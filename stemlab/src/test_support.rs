//! In-memory `ApiService` used by store and controller tests.

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::time::Duration;

use crate::core::{ApiService, AppError, Result};
use shared::{
    Availability, Component, Difficulty, HealthResponse, Idea, IdeaGenerationRequest,
    MessageResponse, UserPreferences, UserStats,
};

#[derive(Default)]
pub(crate) struct MockApi {
    pub components: Mutex<Vec<Component>>,
    pub ideas: Mutex<Vec<Idea>>,
    pub preferences: Mutex<UserPreferences>,
    pub stats: Mutex<UserStats>,
    /// When set, every call fails with this error.
    pub fail_with: Mutex<Option<AppError>>,
    /// Per-call (delay, response) for `generate_ideas`, consumed in order.
    pub generate_plan: Mutex<VecDeque<(Duration, Vec<Idea>)>>,
    pub favorite_delay: Mutex<Duration>,
    pub save_delay: Mutex<Duration>,
    pub generate_requests: Mutex<Vec<IdeaGenerationRequest>>,
    calls: Mutex<Vec<&'static str>>,
}

impl MockApi {
    pub fn with_catalog(components: Vec<Component>) -> Self {
        let api = Self::default();
        *api.components.lock() = components;
        api
    }

    pub fn fail(&self, err: AppError) {
        *self.fail_with.lock() = Some(err);
    }

    pub fn recover(&self) {
        *self.fail_with.lock() = None;
    }

    pub fn count(&self, operation: &str) -> usize {
        self.calls.lock().iter().filter(|c| **c == operation).count()
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().len()
    }

    fn enter(&self, operation: &'static str) -> Result<()> {
        self.calls.lock().push(operation);
        match self.fail_with.lock().clone() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

pub(crate) fn component(id: &str, name: &str, category: &str) -> Component {
    Component {
        id: id.to_string(),
        name: name.to_string(),
        category: category.to_string(),
        description: format!("{} part", name),
        price_range: "$5-10".to_string(),
        availability: Availability::Available,
        ..Default::default()
    }
}

pub(crate) fn idea(id: &str, title: &str) -> Idea {
    Idea {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("{} description", title),
        difficulty: Difficulty::Beginner,
        ..Default::default()
    }
}

fn not_found(what: &str) -> AppError {
    AppError::Http {
        status: 404,
        message: format!("{} not found", what),
    }
}

#[async_trait]
impl ApiService for MockApi {
    async fn health_check(&self) -> Result<HealthResponse> {
        self.enter("health_check")?;
        Ok(HealthResponse {
            status: "healthy".to_string(),
            timestamp: Some(Utc::now()),
        })
    }

    async fn list_components(&self) -> Result<Vec<Component>> {
        self.enter("list_components")?;
        Ok(self.components.lock().clone())
    }

    async fn get_component(&self, id: &str) -> Result<Component> {
        self.enter("get_component")?;
        self.components
            .lock()
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| not_found("Component"))
    }

    async fn components_by_category(&self, category: &str) -> Result<Vec<Component>> {
        self.enter("components_by_category")?;
        Ok(self
            .components
            .lock()
            .iter()
            .filter(|c| c.category == category)
            .cloned()
            .collect())
    }

    async fn get_preferences(&self) -> Result<UserPreferences> {
        self.enter("get_preferences")?;
        Ok(self.preferences.lock().clone())
    }

    async fn save_preferences(&self, preferences: &UserPreferences) -> Result<UserPreferences> {
        self.enter("save_preferences")?;
        let mut confirmed = preferences.clone();
        confirmed.id = Some("prefs-1".to_string());
        confirmed.last_updated = Some(Utc::now());
        *self.preferences.lock() = confirmed.clone();
        Ok(confirmed)
    }

    async fn list_ideas(&self) -> Result<Vec<Idea>> {
        self.enter("list_ideas")?;
        Ok(self.ideas.lock().clone())
    }

    async fn save_idea(&self, idea: &Idea) -> Result<Idea> {
        self.enter("save_idea")?;
        let delay = *self.save_delay.lock();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        let mut ideas = self.ideas.lock();
        let mut saved = idea.clone();
        if saved.id.is_empty() {
            saved.id = format!("saved-{}", ideas.len() + 1);
        }
        saved.updated_at = Some(Utc::now());
        ideas.insert(0, saved.clone());
        Ok(saved)
    }

    async fn update_idea(&self, id: &str, idea: &Idea) -> Result<Idea> {
        self.enter("update_idea")?;
        let mut ideas = self.ideas.lock();
        let slot = ideas
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| not_found("Idea"))?;
        *slot = idea.clone();
        Ok(slot.clone())
    }

    async fn delete_idea(&self, id: &str) -> Result<MessageResponse> {
        self.enter("delete_idea")?;
        let mut ideas = self.ideas.lock();
        let before = ideas.len();
        ideas.retain(|i| i.id != id);
        if ideas.len() == before {
            return Err(not_found("Idea"));
        }
        Ok(MessageResponse {
            message: "Idea deleted successfully".to_string(),
        })
    }

    async fn toggle_favorite(&self, id: &str, is_favorite: bool) -> Result<MessageResponse> {
        self.enter("toggle_favorite")?;
        let delay = *self.favorite_delay.lock();
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        let mut ideas = self.ideas.lock();
        let idea = ideas
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| not_found("Idea"))?;
        idea.is_favorite = is_favorite;
        Ok(MessageResponse {
            message: "Favorite status updated".to_string(),
        })
    }

    async fn search_ideas(&self, query: &str) -> Result<Vec<Idea>> {
        self.enter("search_ideas")?;
        let needle = query.to_lowercase();
        Ok(self
            .ideas
            .lock()
            .iter()
            .filter(|i| i.title.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn generate_ideas(&self, request: &IdeaGenerationRequest) -> Result<Vec<Idea>> {
        self.enter("generate_ideas")?;
        self.generate_requests.lock().push(request.clone());
        let planned = self.generate_plan.lock().pop_front();
        let (delay, ideas) =
            planned.unwrap_or_else(|| (Duration::ZERO, vec![idea("gen-1", "Generated Idea")]));
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        Ok(ideas)
    }

    async fn get_stats(&self) -> Result<UserStats> {
        self.enter("get_stats")?;
        Ok(self.stats.lock().clone())
    }
}

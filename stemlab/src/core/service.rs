//! # Service Traits
//!
//! Traits for dependency injection. The store and the screen controllers only
//! ever see `Arc<dyn ApiService>`, so tests can swap in an in-memory backend.

use async_trait::async_trait;
use shared::{
    Component, HealthResponse, Idea, IdeaGenerationRequest, MessageResponse, UserPreferences,
    UserStats,
};

use super::error::Result;

/// One operation per backend resource.
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Liveness probe
    async fn health_check(&self) -> Result<HealthResponse>;

    /// Full component catalog
    async fn list_components(&self) -> Result<Vec<Component>>;

    async fn get_component(&self, id: &str) -> Result<Component>;

    async fn components_by_category(&self, category: &str) -> Result<Vec<Component>>;

    async fn get_preferences(&self) -> Result<UserPreferences>;

    /// Full replacement; the returned value is the server-confirmed record
    async fn save_preferences(&self, preferences: &UserPreferences) -> Result<UserPreferences>;

    /// Saved idea library, newest first
    async fn list_ideas(&self) -> Result<Vec<Idea>>;

    async fn save_idea(&self, idea: &Idea) -> Result<Idea>;

    async fn update_idea(&self, id: &str, idea: &Idea) -> Result<Idea>;

    async fn delete_idea(&self, id: &str) -> Result<MessageResponse>;

    async fn toggle_favorite(&self, id: &str, is_favorite: bool) -> Result<MessageResponse>;

    async fn search_ideas(&self, query: &str) -> Result<Vec<Idea>>;

    /// Ask the backend for fresh, not yet persisted ideas
    async fn generate_ideas(&self, request: &IdeaGenerationRequest) -> Result<Vec<Idea>>;

    async fn get_stats(&self) -> Result<UserStats>;
}

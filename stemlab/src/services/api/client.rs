//! # API Client
//!
//! Main HTTP client for backend API communication. Every request goes through
//! [`ApiClient::execute`], which attaches the bearer token, logs the call and
//! maps the response onto [`AppError`].

use async_channel::{Receiver, Sender};
use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Instant;

use crate::config::ClientConfig;
use crate::core::service::ApiService;
use crate::core::{AppError, Result};
use crate::services::storage::{self, LocalStorage, AUTH_TOKEN_KEY};
use shared::{
    Component, ErrorResponse, HealthResponse, Idea, IdeaGenerationRequest, MessageResponse,
    UserPreferences, UserStats,
};

/// Published when the backend rejects the stored credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// A call returned 401; the token is gone and the app must return to its root screen.
    Expired,
}

/// HTTP client for the idea service.
///
/// Holds a pooled `reqwest::Client` configured with the fixed request
/// timeout, the local storage the bearer token is read from, and the
/// channel 401s are announced on.
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: Url,
    storage: Arc<dyn LocalStorage>,
    session_tx: Sender<SessionEvent>,
    session_rx: Receiver<SessionEvent>,
}

impl ApiClient {
    pub fn new(config: &ClientConfig, storage: Arc<dyn LocalStorage>) -> Result<Self> {
        let base_url = Url::parse(&config.backend_url)
            .map_err(|e| AppError::Config(format!("invalid backend URL {}: {}", config.backend_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(AppError::Config(format!("backend URL {} cannot be a base", config.backend_url)));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.timeout)
            .build()
            .map_err(|e| AppError::Config(format!("failed to build HTTP client: {}", e)))?;

        let (session_tx, session_rx) = async_channel::unbounded();

        Ok(Self {
            client,
            base_url,
            storage,
            session_tx,
            session_rx,
        })
    }

    /// Receiver for session invalidation events.
    pub fn session_events(&self) -> Receiver<SessionEvent> {
        self.session_rx.clone()
    }

    /// Build `<base>/api/<segments...>`, percent-encoding each segment.
    pub(crate) fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| AppError::Config("backend URL cannot be a base".to_string()))?
            .pop_if_empty()
            .push("api")
            .extend(segments);
        Ok(url)
    }

    pub(crate) fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder> {
        Ok(self.client.request(method, self.endpoint(segments)?))
    }

    /// Send a request and decode the JSON body.
    ///
    /// A 401 clears the stored token and publishes [`SessionEvent::Expired`]
    /// before returning [`AppError::Unauthorized`]. Nothing is retried.
    pub(crate) async fn execute<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        request: RequestBuilder,
    ) -> Result<T> {
        let start = Instant::now();

        let request = match storage::auth_token(self.storage.as_ref()) {
            Ok(Some(token)) => request.bearer_auth(token),
            Ok(None) => request,
            Err(e) => {
                tracing::warn!(operation, error = %e, "Could not read auth token, sending unauthenticated");
                request
            }
        };

        let response = request.send().await.map_err(|e| {
            tracing::error!(operation, error = %e, timeout = e.is_timeout(), "Network error");
            AppError::Network(e.to_string())
        })?;

        let status = response.status();
        let duration = start.elapsed();

        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!(operation, duration_ms = duration.as_millis(), "Unauthorized, invalidating session");
            self.invalidate_session();
            return Err(AppError::Unauthorized);
        }

        if status.is_success() {
            let body = response.bytes().await.map_err(|e| {
                tracing::error!(operation, error = %e, "Failed to read response body");
                AppError::Network(e.to_string())
            })?;
            let parsed = serde_json::from_slice::<T>(&body).map_err(|e| {
                tracing::error!(operation, error = %e, "Response parse error");
                AppError::Decode(e.to_string())
            })?;
            tracing::debug!(
                operation,
                status = status.as_u16(),
                duration_ms = duration.as_millis(),
                "Request succeeded"
            );
            Ok(parsed)
        } else {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .ok()
                .and_then(|err| err.message().map(str::to_string))
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("Request failed")
                        .to_string()
                });
            tracing::warn!(
                operation,
                status = status.as_u16(),
                error = %message,
                duration_ms = duration.as_millis(),
                "Request failed"
            );
            Err(AppError::Http {
                status: status.as_u16(),
                message,
            })
        }
    }

    fn invalidate_session(&self) {
        if let Err(e) = self.storage.remove(AUTH_TOKEN_KEY) {
            tracing::error!(error = %e, "Failed to clear auth token");
        }
        // Unbounded channel: only fails once every receiver is gone.
        let _ = self.session_tx.try_send(SessionEvent::Expired);
    }
}

#[async_trait::async_trait]
impl ApiService for ApiClient {
    async fn health_check(&self) -> Result<HealthResponse> {
        crate::services::api::health::health_check(self).await
    }

    async fn list_components(&self) -> Result<Vec<Component>> {
        crate::services::api::components::list_components(self).await
    }

    async fn get_component(&self, id: &str) -> Result<Component> {
        crate::services::api::components::get_component(self, id).await
    }

    async fn components_by_category(&self, category: &str) -> Result<Vec<Component>> {
        crate::services::api::components::components_by_category(self, category).await
    }

    async fn get_preferences(&self) -> Result<UserPreferences> {
        crate::services::api::preferences::get_preferences(self).await
    }

    async fn save_preferences(&self, preferences: &UserPreferences) -> Result<UserPreferences> {
        crate::services::api::preferences::save_preferences(self, preferences).await
    }

    async fn list_ideas(&self) -> Result<Vec<Idea>> {
        crate::services::api::ideas::list_ideas(self).await
    }

    async fn save_idea(&self, idea: &Idea) -> Result<Idea> {
        crate::services::api::ideas::save_idea(self, idea).await
    }

    async fn update_idea(&self, id: &str, idea: &Idea) -> Result<Idea> {
        crate::services::api::ideas::update_idea(self, id, idea).await
    }

    async fn delete_idea(&self, id: &str) -> Result<MessageResponse> {
        crate::services::api::ideas::delete_idea(self, id).await
    }

    async fn toggle_favorite(&self, id: &str, is_favorite: bool) -> Result<MessageResponse> {
        crate::services::api::ideas::toggle_favorite(self, id, is_favorite).await
    }

    async fn search_ideas(&self, query: &str) -> Result<Vec<Idea>> {
        crate::services::api::ideas::search_ideas(self, query).await
    }

    async fn generate_ideas(&self, request: &IdeaGenerationRequest) -> Result<Vec<Idea>> {
        crate::services::api::generation::generate_ideas(self, request).await
    }

    async fn get_stats(&self) -> Result<UserStats> {
        crate::services::api::stats::get_stats(self).await
    }
}

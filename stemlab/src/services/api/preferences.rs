//! # Preference Endpoints

use reqwest::Method;
use shared::UserPreferences;

use super::client::ApiClient;
use crate::core::Result;

/// Current preferences; the backend seeds defaults on first access.
#[tracing::instrument(skip(client))]
pub async fn get_preferences(client: &ApiClient) -> Result<UserPreferences> {
    let request = client.request(Method::GET, &["preferences"])?;
    client.execute("get_preferences", request).await
}

/// Full replacement. Returns the record as stored by the backend.
#[tracing::instrument(skip(client, preferences), fields(skill_level = %preferences.skill_level))]
pub async fn save_preferences(
    client: &ApiClient,
    preferences: &UserPreferences,
) -> Result<UserPreferences> {
    let request = client
        .request(Method::POST, &["preferences"])?
        .json(preferences);
    client.execute("save_preferences", request).await
}

//! # Saved Idea Endpoints
//!
//! CRUD over the personal idea library plus favorite toggling and search.

use reqwest::Method;
use shared::{Idea, MessageResponse};

use super::client::ApiClient;
use crate::core::Result;

/// Saved ideas, newest first.
#[tracing::instrument(skip(client))]
pub async fn list_ideas(client: &ApiClient) -> Result<Vec<Idea>> {
    let request = client.request(Method::GET, &["ideas"])?;
    client.execute("list_ideas", request).await
}

/// Persist a generated idea. The response carries the confirmed id.
#[tracing::instrument(skip(client, idea), fields(title = %idea.title))]
pub async fn save_idea(client: &ApiClient, idea: &Idea) -> Result<Idea> {
    let request = client.request(Method::POST, &["ideas"])?.json(idea);
    let saved: Idea = client.execute("save_idea", request).await?;
    tracing::info!(id = %saved.id, "Idea saved");
    Ok(saved)
}

#[tracing::instrument(skip(client, idea), fields(id = %id))]
pub async fn update_idea(client: &ApiClient, id: &str, idea: &Idea) -> Result<Idea> {
    let request = client.request(Method::PUT, &["ideas", id])?.json(idea);
    client.execute("update_idea", request).await
}

#[tracing::instrument(skip(client), fields(id = %id))]
pub async fn delete_idea(client: &ApiClient, id: &str) -> Result<MessageResponse> {
    let request = client.request(Method::DELETE, &["ideas", id])?;
    client.execute("delete_idea", request).await
}

/// `PATCH /api/ideas/{id}/favorite?is_favorite={bool}`
#[tracing::instrument(skip(client), fields(id = %id, is_favorite = is_favorite))]
pub async fn toggle_favorite(client: &ApiClient, id: &str, is_favorite: bool) -> Result<MessageResponse> {
    let request = client
        .request(Method::PATCH, &["ideas", id, "favorite"])?
        .query(&[("is_favorite", is_favorite)]);
    client.execute("toggle_favorite", request).await
}

/// Server-side search over title, description and tags.
#[tracing::instrument(skip(client), fields(query = %query))]
pub async fn search_ideas(client: &ApiClient, query: &str) -> Result<Vec<Idea>> {
    let request = client
        .request(Method::GET, &["ideas", "search"])?
        .query(&[("query", query)]);
    client.execute("search_ideas", request).await
}

//! # Component Catalog Endpoints
//!
//! Read-only access to the electronic component catalog.

use reqwest::Method;
use shared::Component;

use super::client::ApiClient;
use crate::core::Result;

/// Full catalog.
#[tracing::instrument(skip(client))]
pub async fn list_components(client: &ApiClient) -> Result<Vec<Component>> {
    let request = client.request(Method::GET, &["components"])?;
    let components: Vec<Component> = client.execute("list_components", request).await?;
    tracing::debug!(count = components.len(), "Component catalog fetched");
    Ok(components)
}

#[tracing::instrument(skip(client), fields(id = %id))]
pub async fn get_component(client: &ApiClient, id: &str) -> Result<Component> {
    let request = client.request(Method::GET, &["components", id])?;
    client.execute("get_component", request).await
}

/// Catalog entries whose category matches exactly (server-side filter).
#[tracing::instrument(skip(client), fields(category = %category))]
pub async fn components_by_category(client: &ApiClient, category: &str) -> Result<Vec<Component>> {
    let request = client.request(Method::GET, &["components", "category", category])?;
    client.execute("components_by_category", request).await
}

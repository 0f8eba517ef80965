//! # Health Endpoint

use reqwest::Method;
use shared::HealthResponse;

use super::client::ApiClient;
use crate::core::Result;

/// `GET /api/health`
#[tracing::instrument(skip(client))]
pub async fn health_check(client: &ApiClient) -> Result<HealthResponse> {
    let request = client.request(Method::GET, &["health"])?;
    client.execute("health_check", request).await
}

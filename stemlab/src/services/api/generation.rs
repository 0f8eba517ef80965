//! # Idea Generation Endpoint

use reqwest::Method;
use shared::{Idea, IdeaGenerationRequest};

use super::client::ApiClient;
use crate::core::Result;

/// Ask the backend for fresh ideas. The returned ideas are not persisted.
#[tracing::instrument(
    skip(client, request),
    fields(components = request.selected_components.len(), count = request.count)
)]
pub async fn generate_ideas(client: &ApiClient, request: &IdeaGenerationRequest) -> Result<Vec<Idea>> {
    tracing::info!("Requesting idea generation");
    let start = std::time::Instant::now();

    let http_request = client
        .request(Method::POST, &["generate-ideas"])?
        .json(request);
    let ideas: Vec<Idea> = client.execute("generate_ideas", http_request).await?;

    tracing::info!(
        generated = ideas.len(),
        duration_ms = start.elapsed().as_millis(),
        "Ideas generated"
    );
    Ok(ideas)
}

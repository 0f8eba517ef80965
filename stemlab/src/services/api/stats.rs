//! # Statistics Endpoint

use reqwest::Method;
use shared::UserStats;

use super::client::ApiClient;
use crate::core::Result;

#[tracing::instrument(skip(client))]
pub async fn get_stats(client: &ApiClient) -> Result<UserStats> {
    let request = client.request(Method::GET, &["stats"])?;
    client.execute("get_stats", request).await
}

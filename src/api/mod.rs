/**
 * Backend API
 *
 * Typed REST wrappers over the nutrition backend. All endpoints share one
 * `ApiClient`; the backend does the heavy lifting (meal-plan generation,
 * image analysis, nutrition estimation) and these clients only shape
 * requests and merge responses back into the local state.
 *
 * Calls are issued sequentially by the consuming layer; stale in-flight
 * responses are ignored on completion rather than cancelled.
 */

pub mod meal_plan;
pub mod nutrition;
pub mod profile;
pub mod scanner;

pub use meal_plan::MealPlanApi;
pub use nutrition::NutritionApi;
pub use profile::ProfileApi;
pub use scanner::ScannerApi;

use crate::config::Config;
use crate::error::{AppError, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

/// Shared HTTP client for the nutrition backend.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client from configuration.
    pub fn new(config: &Config) -> Self {
        let http = Client::builder()
            .user_agent("BiteTrack/1.0 (Nutrition Tracking Client)")
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET a JSON resource.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        debug!("GET {}", path);
        let response = self.http.get(self.url(path)).send().await?;
        Self::decode(response).await
    }

    /// GET a JSON resource with query parameters.
    pub async fn get_json_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        debug!("GET {} (query: {:?})", path, query);
        let response = self.http.get(self.url(path)).query(query).send().await?;
        Self::decode(response).await
    }

    /// POST a JSON body and decode the JSON response.
    pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        debug!("POST {}", path);
        let response = self.http.post(self.url(path)).json(body).send().await?;
        Self::decode(response).await
    }

    /// DELETE a resource, discarding any response body.
    pub async fn delete(&self, path: &str) -> Result<()> {
        debug!("DELETE {}", path);
        let response = self.http.delete(self.url(path)).send().await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response.text().await.unwrap_or_default();
        Err(AppError::Api {
            status: status.as_u16(),
            message: message.chars().take(200).collect(),
        })
    }
}

/**
 * Nutrition API
 *
 * Endpoints:
 * - POST /{id}/log      - Log a meal entry
 * - GET  /{id}/history  - Fetch logged entries, optionally date-filtered
 */

use crate::api::ApiClient;
use crate::error::Result;
use crate::services::Cache;
use crate::types::NutritionEntry;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Log payload: the entry plus the legacy flat `image` field the backend
/// still expects alongside `imageUri`.
#[derive(Debug, Serialize)]
struct LogPayload<'a> {
    #[serde(flatten)]
    entry: &'a NutritionEntry,
    image: String,
}

/// Client for nutrition-log endpoints.
#[derive(Clone)]
pub struct NutritionApi {
    client: ApiClient,
    history_cache: Arc<Cache<Vec<NutritionEntry>>>,
}

impl NutritionApi {
    pub fn new(client: ApiClient, cache_ttl: Duration) -> Self {
        Self {
            client,
            history_cache: Arc::new(Cache::new(cache_ttl)),
        }
    }

    /// Log a nutrition entry for the user. Any cached history for the user
    /// is invalidated so the next fetch reflects the new entry.
    pub async fn log_nutrition(
        &self,
        entry: &NutritionEntry,
        user_id: &str,
    ) -> Result<NutritionEntry> {
        let payload = LogPayload {
            entry,
            image: entry.image_uri.clone().unwrap_or_default(),
        };

        let logged: NutritionEntry = self
            .client
            .post_json(&format!("/{}/log", user_id), &payload)
            .await?;

        self.invalidate_history(user_id);
        info!("Logged {} for {}", logged.meal_name, user_id);
        Ok(logged)
    }

    /// Fetch logged entries, optionally bounded by ISO dates.
    pub async fn get_history(
        &self,
        user_id: &str,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> Result<Vec<NutritionEntry>> {
        let cache_key = format!(
            "{}:{}:{}",
            user_id,
            start_date.unwrap_or(""),
            end_date.unwrap_or("")
        );
        if let Some(entries) = self.history_cache.get(&cache_key) {
            debug!("History cache hit for {}", cache_key);
            return Ok(entries);
        }

        let mut query: Vec<(&str, &str)> = Vec::new();
        if let Some(start) = start_date {
            query.push(("startDate", start));
        }
        if let Some(end) = end_date {
            query.push(("endDate", end));
        }

        let entries: Vec<NutritionEntry> = self
            .client
            .get_json_with_query(&format!("/{}/history", user_id), &query)
            .await?;

        self.history_cache.set(cache_key, entries.clone());
        Ok(entries)
    }

    /// Drop cached history. Entries are keyed by user and date range, so a
    /// full clear is the cheap, correct invalidation for this single-user
    /// client.
    pub fn invalidate_history(&self, _user_id: &str) {
        self.history_cache.clear();
    }
}

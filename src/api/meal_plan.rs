/**
 * Meal Plan API
 *
 * Endpoints:
 * - GET  /{id}                  - Fetch the weekly plan
 * - POST /{id}/generate         - Trigger server-side generation
 * - GET  /{id}/details/{meal}   - Fetch details for one meal
 *
 * Plans change only when regenerated, so fetches are served from a TTL
 * cache; generation replaces the cached copy.
 */

use crate::api::ApiClient;
use crate::error::Result;
use crate::services::Cache;
use crate::types::{Meal, UserProfile, WeeklyMealPlan};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Client for meal-plan endpoints.
#[derive(Clone)]
pub struct MealPlanApi {
    client: ApiClient,
    cache: Arc<Cache<WeeklyMealPlan>>,
}

impl MealPlanApi {
    pub fn new(client: ApiClient, cache_ttl: Duration) -> Self {
        Self {
            client,
            cache: Arc::new(Cache::new(cache_ttl)),
        }
    }

    /// Fetch the user's weekly plan, preferring a cached copy.
    pub async fn get_meal_plan(&self, user_id: &str) -> Result<WeeklyMealPlan> {
        if let Some(plan) = self.cache.get(user_id) {
            debug!("Meal plan cache hit for {}", user_id);
            return Ok(plan);
        }

        let plan: WeeklyMealPlan = self.client.get_json(&format!("/{}", user_id)).await?;
        self.cache.set(user_id.to_string(), plan.clone());
        Ok(plan)
    }

    /// Generate a fresh plan from the current profile. The returned plan
    /// replaces any cached copy.
    pub async fn generate_meal_plan(
        &self,
        user_id: &str,
        profile: &UserProfile,
    ) -> Result<WeeklyMealPlan> {
        let plan: WeeklyMealPlan = self
            .client
            .post_json(&format!("/{}/generate", user_id), profile)
            .await?;

        self.cache.set(user_id.to_string(), plan.clone());
        info!("Generated meal plan for {}", user_id);
        Ok(plan)
    }

    /// Fetch preparation details for a single meal by name.
    pub async fn get_meal_details(&self, user_id: &str, meal_name: &str) -> Result<Meal> {
        self.client
            .get_json(&format!("/{}/details/{}", user_id, meal_name))
            .await
    }

    /// Drop any cached plan for the user (called after a profile reset).
    pub fn invalidate(&self, user_id: &str) {
        self.cache.remove(user_id);
    }
}

/**
 * Scanner API
 *
 * Endpoints:
 * - POST /scan-image - Analyze a food photo, returns per-serving macros
 * - POST /estimate   - AI description and tips for a named meal
 *
 * Image analysis runs entirely server-side; the client only base64-encodes
 * the photo bytes.
 */

use crate::api::ApiClient;
use crate::error::Result;
use crate::types::{NutritionEstimate, ScanResult};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Serialize;
use tracing::info;

#[derive(Debug, Serialize)]
struct ScanRequest {
    image: String,
}

#[derive(Debug, Serialize)]
struct EstimateRequest<'a> {
    name: &'a str,
    ingredients: &'a [String],
}

/// Client for the AI food-scanner endpoints.
#[derive(Clone)]
pub struct ScannerApi {
    client: ApiClient,
}

impl ScannerApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Analyze a food image and return its estimated nutrition.
    pub async fn scan_food_image(&self, image_bytes: &[u8]) -> Result<ScanResult> {
        let request = ScanRequest {
            image: STANDARD.encode(image_bytes),
        };

        let result: ScanResult = self.client.post_json("/scan-image", &request).await?;
        info!(
            "Scanned image: {} ({} kcal/serving)",
            result.name, result.calories
        );
        Ok(result)
    }

    /// Fetch an AI-generated description and tips for a meal.
    pub async fn get_nutrition_estimate(
        &self,
        name: &str,
        ingredients: &[String],
    ) -> Result<NutritionEstimate> {
        let request = EstimateRequest { name, ingredients };
        self.client.post_json("/estimate", &request).await
    }
}

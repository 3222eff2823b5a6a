/**
 * Nutrition Types
 *
 * Logged meals, scan results from the image analyzer, and AI nutrition
 * estimates. Wire names follow the backend: mostly camelCase, except the
 * historical `meal_name` and `possible_serving_size` fields.
 */

use serde::{Deserialize, Serialize};

/// Meal slot for a logged entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

/// A single logged nutrition entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionEntry {
    /// Backend-assigned entry id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// ISO date of the entry, assigned server-side when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    pub meal_type: MealType,

    /// The backend emits `mealName` from some endpoints and `meal_name` from
    /// others; accept both.
    #[serde(rename = "meal_name", alias = "mealName")]
    pub meal_name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_uri: Option<String>,

    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,

    #[serde(default)]
    pub ingredients: Vec<String>,
}

/// Result of analyzing a food image. Macro values are per single serving.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResult {
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
    #[serde(default)]
    pub ingredients: Vec<String>,
    /// Free-text serving hint from the analyzer, e.g. "2 slices".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub possible_serving_size: Option<String>,
}

impl ScanResult {
    /// Scale macro fields by a serving multiplier, rounding to whole units
    /// the way the tracker displays them.
    pub fn scaled(&self, servings: f64) -> ScanResult {
        ScanResult {
            name: self.name.clone(),
            calories: (self.calories * servings).round(),
            protein: (self.protein * servings).round(),
            carbs: (self.carbs * servings).round(),
            fats: (self.fats * servings).round(),
            ingredients: self.ingredients.clone(),
            possible_serving_size: self.possible_serving_size.clone(),
        }
    }
}

/// AI-generated description and tips for a scanned meal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionEstimate {
    pub description: String,
    #[serde(default)]
    pub tips: Vec<String>,
}

/**
 * Meal Plan Types
 *
 * Weekly meal plans generated server-side and fetched read-only by the client.
 */

use serde::{Deserialize, Serialize};

/// Macro and calorie breakdown for a single meal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionValues {
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
    pub vitamin: f64,
    pub calories: f64,
}

/// A single meal with preparation details.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    pub name: String,
    pub ingredients: Vec<String>,
    pub procedure: Vec<String>,
    pub time_in_minutes: u32,
    pub nutrition_values: NutritionValues,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
}

impl Meal {
    /// Total calories for the meal.
    pub fn calories(&self) -> f64 {
        self.nutrition_values.calories
    }
}

/// The four meals of a single day.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DailyMeals {
    pub breakfast: Meal,
    pub lunch: Meal,
    pub snacks: Meal,
    pub dinner: Meal,
}

impl DailyMeals {
    /// Sum of calories across the day's meals.
    pub fn total_calories(&self) -> f64 {
        self.breakfast.calories()
            + self.lunch.calories()
            + self.snacks.calories()
            + self.dinner.calories()
    }
}

/// Primary and alternative meal options for one day.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MealPlanOptions {
    pub main_meal: DailyMeals,
    pub alternative_meal: DailyMeals,
}

/// Seven days of meal options keyed by short weekday name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeeklyMealMap {
    pub mon: MealPlanOptions,
    pub tue: MealPlanOptions,
    pub wed: MealPlanOptions,
    pub thu: MealPlanOptions,
    pub fri: MealPlanOptions,
    pub sat: MealPlanOptions,
    pub sun: MealPlanOptions,
}

impl WeeklyMealMap {
    /// Look up a day by its short name ("mon" .. "sun").
    pub fn day(&self, name: &str) -> Option<&MealPlanOptions> {
        match name {
            "mon" => Some(&self.mon),
            "tue" => Some(&self.tue),
            "wed" => Some(&self.wed),
            "thu" => Some(&self.thu),
            "fri" => Some(&self.fri),
            "sat" => Some(&self.sat),
            "sun" => Some(&self.sun),
            _ => None,
        }
    }
}

/// A generated weekly plan for one user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyMealPlan {
    pub user_id: String,
    pub weekly_meal_plan: WeeklyMealMap,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_daily_total_calories() {
        let mut day = DailyMeals::default();
        day.breakfast.nutrition_values.calories = 400.0;
        day.lunch.nutrition_values.calories = 650.0;
        day.snacks.nutrition_values.calories = 200.0;
        day.dinner.nutrition_values.calories = 550.0;

        assert_eq!(day.total_calories(), 1800.0);
    }

    #[test]
    fn test_weekly_map_day_lookup() {
        let map = WeeklyMealMap::default();
        assert!(map.day("mon").is_some());
        assert!(map.day("sun").is_some());
        assert!(map.day("monday").is_none());
    }

    #[test]
    fn test_plan_wire_names() {
        let plan = WeeklyMealPlan {
            user_id: "u1".to_string(),
            weekly_meal_plan: WeeklyMealMap::default(),
        };

        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["userId"], "u1");
        assert!(json["weeklyMealPlan"]["mon"]["main_meal"].is_object());
    }
}

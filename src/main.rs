use anyhow::Context;
use bitetrack::api::{ApiClient, MealPlanApi};
use bitetrack::services::{metrics, KvStore, ProfileStore};
use bitetrack::types::OnboardingStatus;
use bitetrack::Config;
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Diagnostic entry point: reports the stored profile, derived metrics, and
/// (when onboarding is complete) the current meal plan.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bitetrack=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env();
    info!("Using backend {}", config.api_base_url);

    // Open the durable store and the profile container
    let store = Arc::new(
        KvStore::new(&config.database_path)
            .with_context(|| format!("opening store at {}", config.database_path))?,
    );
    let profiles = ProfileStore::new(store);
    info!("Device id: {}", profiles.device_id());

    let profile = profiles.profile();
    match profile.onboarding_status() {
        OnboardingStatus::NotStarted => {
            info!("No profile stored - app would route to onboarding");
            return Ok(());
        }
        OnboardingStatus::InProgress => {
            info!("Onboarding in progress - app would resume onboarding");
            return Ok(());
        }
        OnboardingStatus::Complete => {}
    }

    // Derived metrics summary
    let today = Utc::now().date_naive();
    let height_cm = profile.height_cm.unwrap_or(0) as f64;
    let weight = profile.weight.unwrap_or(0.0);
    let bmi = metrics::bmi(height_cm, weight);
    match metrics::bmi_category(bmi) {
        Some(category) => info!("BMI {} ({})", bmi, category.label()),
        None => info!("BMI unavailable (missing height or weight)"),
    }
    if let Some(ref dob) = profile.dob {
        if let Some(years) = metrics::age(dob, today) {
            info!("Age: {} years", years);
        }
    }
    if let (Some(ref target), Some(goal)) = (&profile.target_date, profile.goal_weight) {
        if let Some(target_date) = metrics::parse_iso_date(target) {
            let days = metrics::days_remaining(target_date, today);
            let rate = metrics::weekly_rate(weight, goal, days);
            info!("{} days to target, {:.2} kg/week", days, rate);
        }
    }

    // Fetch the current meal plan for a completed profile
    let user_id = profiles.require_id()?;
    let client = ApiClient::new(&config);
    let meal_plans = MealPlanApi::new(client, Duration::from_secs(config.cache_ttl_secs));

    match meal_plans.get_meal_plan(&user_id).await {
        Ok(plan) => {
            let today_calories = plan.weekly_meal_plan.mon.main_meal.total_calories();
            info!("Meal plan loaded; Monday main plan: {} kcal", today_calories);
        }
        Err(e) => warn!("Could not fetch meal plan: {}", e),
    }

    Ok(())
}

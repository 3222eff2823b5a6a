//! Form validation for the onboarding flow.
//!
//! Pure functions over profile fields. Conflicts and field errors are
//! returned as data so the consuming screens decide how to present them;
//! nothing here is an `Err`.

use crate::services::metrics::{age, days_remaining, parse_iso_date};
use crate::types::DietPreference;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Minimum user age accepted at signup.
pub const MIN_AGE_YEARS: i32 = 13;

/// Target date must be at least this far out.
pub const MIN_TARGET_DAYS: i64 = 30;

/// Target date must be at most this far out (two years).
pub const MAX_TARGET_DAYS: i64 = 730;

/// Field name -> message map for a validated form.
pub type FieldErrors = BTreeMap<&'static str, String>;

/// A violated diet-preference exclusion rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceConflict {
    NonVegAndVegan,
    NonVegAndVeg,
    VeganAndEgg,
}

impl PreferenceConflict {
    /// User-facing explanation of the rule.
    pub fn message(&self) -> &'static str {
        match self {
            PreferenceConflict::NonVegAndVegan => {
                "You cannot select both Non-Vegetarian and Vegan options."
            }
            PreferenceConflict::NonVegAndVeg => {
                "You cannot select both Non-Vegetarian and Vegetarian options. \
                 Non-vegetarian typically includes vegetarian."
            }
            PreferenceConflict::VeganAndEgg => "Vegan diet does not include eggs.",
        }
    }
}

/// Check a preference selection against the exclusion rules, returning every
/// violated rule.
pub fn check_preferences(preferences: &[DietPreference]) -> Vec<PreferenceConflict> {
    let has = |p: DietPreference| preferences.contains(&p);
    let mut conflicts = Vec::new();

    if has(DietPreference::NonVeg) && has(DietPreference::Vegan) {
        conflicts.push(PreferenceConflict::NonVegAndVegan);
    }
    if has(DietPreference::NonVeg) && has(DietPreference::Veg) {
        conflicts.push(PreferenceConflict::NonVegAndVeg);
    }
    if has(DietPreference::Vegan) && has(DietPreference::Egg) {
        conflicts.push(PreferenceConflict::VeganAndEgg);
    }

    conflicts
}

/// Validate the basic-info screen fields.
pub fn validate_basic_info(
    dob: Option<&str>,
    country: Option<&str>,
    state: Option<&str>,
    today: NaiveDate,
) -> FieldErrors {
    let mut errors = FieldErrors::new();

    match dob {
        None | Some("") => {
            errors.insert("dob", "Date of birth is required".to_string());
        }
        Some(value) => match age(value, today) {
            Some(years) if years >= MIN_AGE_YEARS => {}
            Some(_) => {
                errors.insert(
                    "dob",
                    format!("You must be at least {} years old", MIN_AGE_YEARS),
                );
            }
            None => {
                errors.insert("dob", "Please enter a valid date of birth".to_string());
            }
        },
    }

    if country.map_or(true, |c| c.trim().is_empty()) {
        errors.insert("country", "Country is required".to_string());
    }
    if state.map_or(true, |s| s.trim().is_empty()) {
        errors.insert("state", "State is required".to_string());
    }

    errors
}

/// Validate the body-info screen fields.
///
/// Ranges match the onboarding form: height 100-250 cm, weights 20-300 kg,
/// target date between 30 days and two years from today.
pub fn validate_body_info(
    height_cm: u32,
    weight_kg: f64,
    goal_weight_kg: f64,
    target_date: Option<&str>,
    today: NaiveDate,
) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if !(100..=250).contains(&height_cm) {
        errors.insert(
            "height",
            "Height should be between approx 3'3\" and 8'2\"".to_string(),
        );
    }
    if !(20.0..=300.0).contains(&weight_kg) {
        errors.insert("weight", "Please enter a valid weight (20-300 kg)".to_string());
    }
    if !(20.0..=300.0).contains(&goal_weight_kg) {
        errors.insert(
            "goalWeight",
            "Please enter a valid goal weight (20-300 kg)".to_string(),
        );
    }

    match target_date.and_then(parse_iso_date) {
        None => {
            errors.insert("targetDate", "Please select a target date".to_string());
        }
        Some(target) => {
            let days = days_remaining(target, today);
            if days < MIN_TARGET_DAYS {
                errors.insert(
                    "targetDate",
                    "Target date must be at least 30 days from today".to_string(),
                );
            } else if days > MAX_TARGET_DAYS {
                errors.insert(
                    "targetDate",
                    "Target date must be within two years".to_string(),
                );
            }
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn test_preference_conflicts() {
        assert!(check_preferences(&[DietPreference::Veg, DietPreference::Egg]).is_empty());

        assert_eq!(
            check_preferences(&[DietPreference::NonVeg, DietPreference::Vegan]),
            vec![PreferenceConflict::NonVegAndVegan]
        );
        assert_eq!(
            check_preferences(&[DietPreference::Vegan, DietPreference::Egg]),
            vec![PreferenceConflict::VeganAndEgg]
        );

        // Every violated rule is reported, not just the first.
        let all = check_preferences(&[
            DietPreference::NonVeg,
            DietPreference::Vegan,
            DietPreference::Veg,
            DietPreference::Egg,
        ]);
        assert_eq!(
            all,
            vec![
                PreferenceConflict::NonVegAndVegan,
                PreferenceConflict::NonVegAndVeg,
                PreferenceConflict::VeganAndEgg,
            ]
        );
    }

    #[test]
    fn test_basic_info_age_floor() {
        let errors = validate_basic_info(Some("2015-01-01"), Some("India"), Some("Goa"), today());
        assert!(errors.contains_key("dob"));

        let errors = validate_basic_info(Some("2000-01-01"), Some("India"), Some("Goa"), today());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_basic_info_required_fields() {
        let errors = validate_basic_info(None, None, Some("  "), today());
        assert!(errors.contains_key("dob"));
        assert!(errors.contains_key("country"));
        assert!(errors.contains_key("state"));
    }

    #[test]
    fn test_body_info_ranges() {
        let errors = validate_body_info(90, 10.0, 350.0, Some("2024-08-01"), today());
        assert!(errors.contains_key("height"));
        assert!(errors.contains_key("weight"));
        assert!(errors.contains_key("goalWeight"));

        let errors = validate_body_info(170, 70.0, 65.0, Some("2024-08-01"), today());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_target_date_window() {
        // 29 days out: too soon.
        let errors = validate_body_info(170, 70.0, 65.0, Some("2024-07-14"), today());
        assert!(errors.contains_key("targetDate"));

        // Exactly 30 days out: accepted.
        let errors = validate_body_info(170, 70.0, 65.0, Some("2024-07-15"), today());
        assert!(errors.is_empty());

        // Past two years: rejected.
        let errors = validate_body_info(170, 70.0, 65.0, Some("2026-12-31"), today());
        assert!(errors.contains_key("targetDate"));
    }
}

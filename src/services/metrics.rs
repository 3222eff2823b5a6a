//! Derived metrics over the profile aggregate.
//!
//! Pure, deterministic transforms with no storage or UI dependency. A failed
//! computation (zero height, unparseable date) yields a neutral zero/None
//! rather than an error, matching how the screens render "N/A".

use chrono::{Datelike, NaiveDate};

/// BMI classification per the standard WHO cut-offs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

/// Convert imperial height to whole centimeters (30.48 cm/ft + 2.54 cm/in).
pub fn height_to_cm(feet: u32, inches: u32) -> u32 {
    (feet as f64 * 30.48 + inches as f64 * 2.54).round() as u32
}

/// Body mass index rounded to one decimal place.
/// Returns 0 when either input is non-positive.
pub fn bmi(height_cm: f64, weight_kg: f64) -> f64 {
    if height_cm <= 0.0 || weight_kg <= 0.0 {
        return 0.0;
    }
    let height_m = height_cm / 100.0;
    let value = weight_kg / (height_m * height_m);
    (value * 10.0).round() / 10.0
}

/// Classify a BMI value. A zero (guarded) BMI has no category.
pub fn bmi_category(bmi: f64) -> Option<BmiCategory> {
    if bmi <= 0.0 {
        return None;
    }
    Some(if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::Normal
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    })
}

/// Parse the date portion of an ISO date or RFC 3339 timestamp string.
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    let date_part = value.get(..10).unwrap_or(value);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Age in whole calendar years at `today`.
///
/// The year difference is decremented by one when today's month/day falls
/// before the birthday within the current year. Returns None when the date
/// string does not parse.
pub fn age(dob: &str, today: NaiveDate) -> Option<i32> {
    let dob = parse_iso_date(dob)?;
    let mut years = today.year() - dob.year();
    if (today.month(), today.day()) < (dob.month(), dob.day()) {
        years -= 1;
    }
    Some(years)
}

/// Whole days until the target date, clamped to 0 when already passed.
pub fn days_remaining(target: NaiveDate, today: NaiveDate) -> i64 {
    (target - today).num_days().max(0)
}

/// Expected weekly weight change in kg/week over the remaining window.
/// The denominator floors at one week to guard divide-by-zero.
pub fn weekly_rate(start_weight: f64, goal_weight: f64, days_remaining: i64) -> f64 {
    let weeks = (days_remaining as f64 / 7.0).max(1.0);
    (start_weight - goal_weight).abs() / weeks
}

/// Normalize the analyzer's free-text serving hint to a multiplier.
///
/// Known phrases map directly; otherwise a leading numeric value is used,
/// defaulting to a single serving.
pub fn parse_serving_size(text: &str) -> f64 {
    let normalized = text.trim().to_lowercase();

    const PHRASES: &[(&str, f64)] = &[
        ("one slice", 1.0),
        ("1 slice", 1.0),
        ("one bowl", 1.0),
        ("1 bowl", 1.0),
        ("one plate", 1.0),
        ("1 plate", 1.0),
        ("two slices", 2.0),
        ("2 slices", 2.0),
        ("two bowls", 2.0),
        ("2 bowls", 2.0),
        ("two plates", 2.0),
        ("2 plates", 2.0),
        ("three slices", 3.0),
        ("3 slices", 3.0),
        ("three bowls", 3.0),
        ("3 bowls", 3.0),
        ("three plates", 3.0),
        ("3 plates", 3.0),
        ("half portion", 0.5),
        ("1/2 portion", 0.5),
    ];

    if let Some((_, value)) = PHRASES.iter().find(|(phrase, _)| *phrase == normalized) {
        return *value;
    }

    // Fall back to a numeric prefix, e.g. "1.5 cups".
    let numeric: String = normalized
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    numeric.parse().unwrap_or(1.0)
}

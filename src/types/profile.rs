/**
 * Profile Types
 *
 * The user profile aggregate persisted on-device and synced with the backend.
 * Every field is optional: the aggregate starts empty on first launch and is
 * filled in incrementally across the onboarding screens.
 */

use serde::{Deserialize, Serialize};

/// User gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Diet preference facets. Multi-select; mutual exclusions are checked by
/// `services::validation`, not enforced structurally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DietPreference {
    Veg,
    Egg,
    Vegan,
    #[serde(rename = "Non-Veg")]
    NonVeg,
}

/// Named diet program, single optional selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DietType {
    LowCarb,
    Mediterranean,
    Keto,
    IntermittentFasting,
}

impl DietType {
    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            DietType::LowCarb => "Low Carb",
            DietType::Mediterranean => "Mediterranean",
            DietType::Keto => "Keto",
            DietType::IntermittentFasting => "Intermittent Fasting",
        }
    }
}

/// The persisted user aggregate (wire name `UserData`).
///
/// `height_cm` is stored redundantly with feet/inches and is allowed to drift;
/// the onboarding flow recomputes it on every height change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Backend-assigned identity, present once the profile has been saved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,

    /// Date of birth as an ISO date string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dob: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_feet: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_inches: Option<u32>,

    /// Derived from feet/inches at form-submit time; stored independently.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<u32>,

    /// Current weight in kg.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,

    /// Goal weight in kg.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal_weight: Option<f64>,

    /// Target date for reaching the goal weight (ISO string).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferences: Option<Vec<DietPreference>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allergies: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dislikes: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_of_diet: Option<DietType>,
}

impl UserProfile {
    /// An empty aggregate, the state on first launch.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether no field has been filled in yet.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Completeness is inferred from the backend-assigned id.
    pub fn has_identity(&self) -> bool {
        self.id.is_some()
    }

    /// Where the app should route on launch.
    pub fn onboarding_status(&self) -> OnboardingStatus {
        if self.has_identity() {
            OnboardingStatus::Complete
        } else if self.is_empty() {
            OnboardingStatus::NotStarted
        } else {
            OnboardingStatus::InProgress
        }
    }
}

/// Launch routing state, derived from the aggregate rather than stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingStatus {
    /// Empty aggregate - route to the first onboarding screen.
    NotStarted,
    /// Some fields set but no backend id - resume onboarding.
    InProgress,
    /// Backend id assigned - route to the main app.
    Complete,
}

/// Partial profile for shallow-merge updates.
/// All fields are optional - only provided fields will be updated. Array-valued
/// fields replace the prior list wholesale; callers must supply the complete
/// desired list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dob: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_feet: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_inches: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_weight: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferences: Option<Vec<DietPreference>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub allergies: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dislikes: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_of_diet: Option<DietType>,
}

impl ProfilePatch {
    /// Apply the patch to a full profile. Present keys overwrite, absent keys
    /// are preserved. Lists are replaced, never appended.
    pub fn apply_to(&self, profile: &mut UserProfile) {
        if let Some(ref id) = self.id {
            profile.id = Some(id.clone());
        }
        if let Some(gender) = self.gender {
            profile.gender = Some(gender);
        }
        if let Some(ref dob) = self.dob {
            profile.dob = Some(dob.clone());
        }
        if let Some(ref country) = self.country {
            profile.country = Some(country.clone());
        }
        if let Some(ref state) = self.state {
            profile.state = Some(state.clone());
        }
        if let Some(feet) = self.height_feet {
            profile.height_feet = Some(feet);
        }
        if let Some(inches) = self.height_inches {
            profile.height_inches = Some(inches);
        }
        if let Some(cm) = self.height_cm {
            profile.height_cm = Some(cm);
        }
        if let Some(weight) = self.weight {
            profile.weight = Some(weight);
        }
        if let Some(goal) = self.goal_weight {
            profile.goal_weight = Some(goal);
        }
        if let Some(ref date) = self.target_date {
            profile.target_date = Some(date.clone());
        }
        if let Some(ref prefs) = self.preferences {
            profile.preferences = Some(prefs.clone());
        }
        if let Some(ref allergies) = self.allergies {
            profile.allergies = Some(allergies.clone());
        }
        if let Some(ref dislikes) = self.dislikes {
            profile.dislikes = Some(dislikes.clone());
        }
        if let Some(diet) = self.type_of_diet {
            profile.type_of_diet = Some(diet);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_profile() {
        let profile = UserProfile::empty();
        assert!(profile.is_empty());
        assert!(!profile.has_identity());
        assert_eq!(profile.onboarding_status(), OnboardingStatus::NotStarted);
    }

    #[test]
    fn test_onboarding_status_progression() {
        let mut profile = UserProfile::empty();

        profile.gender = Some(Gender::Female);
        assert_eq!(profile.onboarding_status(), OnboardingStatus::InProgress);

        profile.id = Some("user-1".to_string());
        assert_eq!(profile.onboarding_status(), OnboardingStatus::Complete);
    }

    #[test]
    fn test_patch_apply_preserves_absent_fields() {
        let mut profile = UserProfile::empty();
        profile.weight = Some(70.0);

        let patch = ProfilePatch {
            goal_weight: Some(65.0),
            ..Default::default()
        };
        patch.apply_to(&mut profile);

        assert_eq!(profile.weight, Some(70.0));
        assert_eq!(profile.goal_weight, Some(65.0));
    }

    #[test]
    fn test_patch_replaces_lists_wholesale() {
        let mut profile = UserProfile::empty();
        profile.allergies = Some(vec!["peanuts".to_string(), "shellfish".to_string()]);

        let patch = ProfilePatch {
            allergies: Some(vec!["gluten".to_string()]),
            ..Default::default()
        };
        patch.apply_to(&mut profile);

        assert_eq!(profile.allergies, Some(vec!["gluten".to_string()]));
    }

    #[test]
    fn test_wire_names_are_camel_case() {
        let mut profile = UserProfile::empty();
        profile.height_feet = Some(5);
        profile.goal_weight = Some(65.0);
        profile.type_of_diet = Some(DietType::IntermittentFasting);
        profile.preferences = Some(vec![DietPreference::NonVeg]);

        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["heightFeet"], 5);
        assert_eq!(json["goalWeight"], 65.0);
        assert_eq!(json["typeOfDiet"], "intermittentFasting");
        assert_eq!(json["preferences"][0], "Non-Veg");
    }
}

/**
 * Profile Store
 *
 * Holds the single in-memory `UserProfile` aggregate and writes it through to
 * the key-value store on every mutation. Exactly one instance exists per
 * process; the durable copy is the backstop, not a second source of truth -
 * on conflict the in-memory copy wins and is the one written through.
 */

use crate::error::{AppError, Result};
use crate::services::KvStore;
use crate::types::{OnboardingStatus, ProfilePatch, UserProfile};
use std::sync::{Arc, RwLock};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Fixed namespace key for the serialized profile aggregate.
pub const PROFILE_KEY: &str = "userData";

/// Key holding the locally generated install identifier.
pub const DEVICE_ID_KEY: &str = "deviceId";

/// Single-writer profile state container with write-through persistence.
pub struct ProfileStore {
    store: Arc<KvStore>,
    profile: RwLock<UserProfile>,
}

impl ProfileStore {
    /// Create the container, loading any durable copy.
    ///
    /// An absent or corrupt stored profile initializes to an empty aggregate;
    /// absence is the normal first-launch state used to drive onboarding
    /// routing, so no error is propagated.
    pub fn new(store: Arc<KvStore>) -> Self {
        let profile: UserProfile = store.get_json(PROFILE_KEY).unwrap_or_default();

        match profile.onboarding_status() {
            OnboardingStatus::NotStarted => debug!("No stored profile, starting empty"),
            status => info!("Loaded stored profile ({:?})", status),
        }

        Self {
            store,
            profile: RwLock::new(profile),
        }
    }

    /// Current in-memory aggregate. Never touches storage.
    pub fn profile(&self) -> UserProfile {
        self.profile.read().unwrap().clone()
    }

    /// Replace the aggregate wholesale and persist synchronously.
    /// Used when the backend returns an authoritative copy.
    pub fn set_profile(&self, data: UserProfile) -> Result<()> {
        {
            let mut profile = self.profile.write().unwrap();
            *profile = data;
        }
        self.persist()
    }

    /// Shallow-merge a patch into the aggregate and persist synchronously.
    /// Returns the merged copy. Keys present in the patch overwrite, absent
    /// keys are preserved; list fields are replaced wholesale.
    pub fn update_profile(&self, patch: ProfilePatch) -> Result<UserProfile> {
        let merged = {
            let mut profile = self.profile.write().unwrap();
            patch.apply_to(&mut profile);
            profile.clone()
        };
        self.persist()?;
        debug!("Profile updated ({:?})", merged.onboarding_status());
        Ok(merged)
    }

    /// Reset the aggregate to empty and remove the durable copy.
    pub fn clear_profile(&self) -> Result<()> {
        {
            let mut profile = self.profile.write().unwrap();
            *profile = UserProfile::empty();
        }
        self.store.delete(PROFILE_KEY)?;
        info!("Profile cleared");
        Ok(())
    }

    /// Launch routing state derived from the current aggregate.
    pub fn onboarding_status(&self) -> OnboardingStatus {
        self.profile.read().unwrap().onboarding_status()
    }

    /// The backend-assigned id, or `ProfileIncomplete` when onboarding has
    /// not finished. Callers check this before issuing id-scoped network
    /// calls so an incomplete profile routes to onboarding instead of a
    /// doomed request.
    pub fn require_id(&self) -> Result<String> {
        self.profile
            .read()
            .unwrap()
            .id
            .clone()
            .ok_or(AppError::ProfileIncomplete)
    }

    /// Stable per-install identifier, generated on first access.
    pub fn device_id(&self) -> String {
        if let Some(id) = self.store.get_json::<String>(DEVICE_ID_KEY) {
            return id;
        }

        let id = Uuid::new_v4().to_string();
        if let Err(e) = self.store.set_json(DEVICE_ID_KEY, &id) {
            warn!("Failed to persist device id: {}", e);
        }
        id
    }

    fn persist(&self) -> Result<()> {
        let profile = self.profile.read().unwrap().clone();
        self.store.set_json(PROFILE_KEY, &profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DietPreference, Gender};

    fn new_store() -> ProfileStore {
        ProfileStore::new(Arc::new(KvStore::new_in_memory().unwrap()))
    }

    #[test]
    fn test_starts_empty() {
        let store = new_store();
        assert!(store.profile().is_empty());
        assert_eq!(store.onboarding_status(), OnboardingStatus::NotStarted);
    }

    #[test]
    fn test_sequential_patches_accumulate() {
        let store = new_store();

        store
            .update_profile(ProfilePatch {
                weight: Some(70.0),
                ..Default::default()
            })
            .unwrap();
        store
            .update_profile(ProfilePatch {
                goal_weight: Some(65.0),
                ..Default::default()
            })
            .unwrap();

        let profile = store.profile();
        assert_eq!(profile.weight, Some(70.0));
        assert_eq!(profile.goal_weight, Some(65.0));
    }

    #[test]
    fn test_set_profile_is_idempotent() {
        let store = new_store();

        let mut data = UserProfile::empty();
        data.id = Some("u1".to_string());
        data.gender = Some(Gender::Other);

        store.set_profile(data.clone()).unwrap();
        store.set_profile(data.clone()).unwrap();

        assert_eq!(store.profile(), data);
        assert_eq!(store.onboarding_status(), OnboardingStatus::Complete);
    }

    #[test]
    fn test_clear_removes_durable_copy() {
        let kv = Arc::new(KvStore::new_in_memory().unwrap());
        let store = ProfileStore::new(kv.clone());

        store
            .update_profile(ProfilePatch {
                country: Some("India".to_string()),
                ..Default::default()
            })
            .unwrap();
        assert!(kv.contains(PROFILE_KEY));

        store.clear_profile().unwrap();
        assert!(store.profile().is_empty());
        assert!(!kv.contains(PROFILE_KEY));
    }

    #[test]
    fn test_reload_from_durable_copy() {
        let kv = Arc::new(KvStore::new_in_memory().unwrap());

        {
            let store = ProfileStore::new(kv.clone());
            store
                .update_profile(ProfilePatch {
                    preferences: Some(vec![DietPreference::Veg, DietPreference::Egg]),
                    ..Default::default()
                })
                .unwrap();
        }

        // A fresh container over the same store sees the persisted aggregate.
        let reloaded = ProfileStore::new(kv);
        assert_eq!(
            reloaded.profile().preferences,
            Some(vec![DietPreference::Veg, DietPreference::Egg])
        );
    }

    #[test]
    fn test_corrupt_durable_copy_recovers_empty() {
        let kv = Arc::new(KvStore::new_in_memory().unwrap());
        kv.set(PROFILE_KEY, "{\"weight\": \"not a number\"").unwrap();

        let store = ProfileStore::new(kv.clone());
        assert!(store.profile().is_empty());

        // Recovery is idempotent: the corrupt key was dropped.
        let again = ProfileStore::new(kv);
        assert!(again.profile().is_empty());
    }

    #[test]
    fn test_require_id() {
        let store = new_store();
        assert!(matches!(
            store.require_id(),
            Err(AppError::ProfileIncomplete)
        ));

        store
            .update_profile(ProfilePatch {
                id: Some("u9".to_string()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(store.require_id().unwrap(), "u9");
    }

    #[test]
    fn test_device_id_is_stable() {
        let store = new_store();
        let first = store.device_id();
        let second = store.device_id();
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }
}

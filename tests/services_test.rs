//! Unit tests for the services module

use bitetrack::services::{metrics, validation, Cache, KvStore, ProfileStore, PROFILE_KEY};
use bitetrack::types::{DietPreference, ProfilePatch, UserProfile};
use chrono::NaiveDate;
use std::sync::Arc;
use std::time::Duration;

#[test]
fn test_profile_round_trip_through_store() {
    let kv = Arc::new(KvStore::new_in_memory().unwrap());
    let profiles = ProfileStore::new(kv.clone());

    profiles
        .update_profile(ProfilePatch {
            weight: Some(70.0),
            ..Default::default()
        })
        .unwrap();
    profiles
        .update_profile(ProfilePatch {
            goal_weight: Some(65.0),
            ..Default::default()
        })
        .unwrap();

    // Both fields survive sequential partial updates, in memory and on disk.
    let in_memory = profiles.profile();
    assert_eq!(in_memory.weight, Some(70.0));
    assert_eq!(in_memory.goal_weight, Some(65.0));

    let durable: UserProfile = kv.get_json(PROFILE_KEY).unwrap();
    assert_eq!(durable, in_memory);
}

#[test]
fn test_patch_replaces_allergy_list() {
    let profiles = ProfileStore::new(Arc::new(KvStore::new_in_memory().unwrap()));

    profiles
        .update_profile(ProfilePatch {
            allergies: Some(vec!["peanuts".to_string(), "dairy".to_string()]),
            ..Default::default()
        })
        .unwrap();

    // A patch carrying allergies replaces the whole list; forgetting prior
    // entries is by contract the caller's responsibility.
    profiles
        .update_profile(ProfilePatch {
            allergies: Some(vec!["dairy".to_string()]),
            ..Default::default()
        })
        .unwrap();

    assert_eq!(
        profiles.profile().allergies,
        Some(vec!["dairy".to_string()])
    );
}

#[test]
fn test_clear_profile_removes_durable_key() {
    let kv = Arc::new(KvStore::new_in_memory().unwrap());
    let profiles = ProfileStore::new(kv.clone());

    profiles
        .update_profile(ProfilePatch {
            country: Some("India".to_string()),
            ..Default::default()
        })
        .unwrap();
    profiles.clear_profile().unwrap();

    assert!(profiles.profile().is_empty());
    assert!(!kv.contains(PROFILE_KEY));
}

#[test]
fn test_corrupt_store_recovery_is_idempotent() {
    let kv = Arc::new(KvStore::new_in_memory().unwrap());
    kv.set(PROFILE_KEY, "definitely not json").unwrap();

    for _ in 0..3 {
        let profiles = ProfileStore::new(kv.clone());
        assert!(profiles.profile().is_empty());
    }
}

#[test]
fn test_metrics_reference_values() {
    assert_eq!(metrics::bmi(0.0, 70.0), 0.0);
    assert_eq!(metrics::bmi(170.0, 0.0), 0.0);
    assert_eq!(metrics::bmi(170.0, 70.0), 24.2);

    let today = NaiveDate::from_ymd_opt(2024, 6, 14).unwrap();
    assert_eq!(metrics::age("2000-06-15", today), Some(23));
    let birthday = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
    assert_eq!(metrics::age("2000-06-15", birthday), Some(24));
}

#[test]
fn test_preference_rules_as_data() {
    let conflicts =
        validation::check_preferences(&[DietPreference::NonVeg, DietPreference::Veg]);
    assert_eq!(conflicts.len(), 1);
    assert!(!conflicts[0].message().is_empty());
}

#[test]
fn test_cache_expiry() {
    let cache: Cache<String> = Cache::new(Duration::from_millis(10));

    cache.set("plan".to_string(), "cached".to_string());
    assert_eq!(cache.get("plan"), Some("cached".to_string()));

    std::thread::sleep(Duration::from_millis(20));
    assert_eq!(cache.get("plan"), None);
}

/**
 * Profile API
 *
 * Endpoints:
 * - POST   /profile       - Save profile, backend assigns the id
 * - GET    /{id}/data     - Fetch the authoritative profile
 * - DELETE /{id}/reset    - Reset server-side data for a user
 */

use crate::api::ApiClient;
use crate::error::Result;
use crate::services::metrics::parse_iso_date;
use crate::types::UserProfile;
use tracing::info;

/// Client for profile endpoints.
#[derive(Clone)]
pub struct ProfileApi {
    client: ApiClient,
}

impl ProfileApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Save the profile at onboarding completion. The response is the
    /// authoritative copy with the backend-assigned id; callers write it
    /// back into the profile store wholesale.
    pub async fn save_profile(&self, profile: &UserProfile) -> Result<UserProfile> {
        let payload = cleaned_payload(profile);
        let saved: UserProfile = self.client.post_json("/profile", &payload).await?;
        info!("Profile saved, id={:?}", saved.id);
        Ok(saved)
    }

    /// Fetch the server's copy of a profile.
    pub async fn get_profile(&self, user_id: &str) -> Result<UserProfile> {
        self.client.get_json(&format!("/{}/data", user_id)).await
    }

    /// Delete all server-side data for a user. The caller clears the local
    /// profile store separately.
    pub async fn reset_profile(&self, user_id: &str) -> Result<()> {
        self.client.delete(&format!("/{}/reset", user_id)).await?;
        info!("Server-side profile reset for {}", user_id);
        Ok(())
    }
}

/// Shape the profile the way the backend expects it: empty diet lists are
/// omitted rather than sent as `[]`, and the date of birth is normalized to
/// an RFC 3339 timestamp.
fn cleaned_payload(profile: &UserProfile) -> UserProfile {
    let mut payload = profile.clone();

    if payload.allergies.as_ref().is_some_and(|a| a.is_empty()) {
        payload.allergies = None;
    }
    if payload.dislikes.as_ref().is_some_and(|d| d.is_empty()) {
        payload.dislikes = None;
    }
    if let Some(ref dob) = payload.dob {
        if let Some(date) = parse_iso_date(dob) {
            payload.dob = Some(format!("{}T00:00:00.000Z", date.format("%Y-%m-%d")));
        }
    }

    payload
}

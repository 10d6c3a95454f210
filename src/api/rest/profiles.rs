use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::Json;
use axum::Router;
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::profile::{PartyRole, Profile};
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/profiles", post(create_profile).get(list_profiles))
}

#[derive(Deserialize)]
pub struct CreateProfileRequest {
    pub role: PartyRole,
    pub full_name: String,
    pub phone: String,
    pub location: String,
}

// Stand-in for the authentication collaborator; the role is fixed here and
// never updatable afterwards.
async fn create_profile(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateProfileRequest>,
) -> Result<Json<Profile>, AppError> {
    if payload.full_name.trim().is_empty() {
        return Err(AppError::Validation("full_name cannot be empty".to_string()));
    }

    let profile = Profile {
        id: Uuid::new_v4(),
        role: payload.role,
        full_name: payload.full_name,
        phone: payload.phone,
        location: payload.location,
        created_at: Utc::now(),
    };

    state.profiles.insert(profile.id, profile.clone());
    Ok(Json(profile))
}

async fn list_profiles(State(state): State<Arc<AppState>>) -> Json<Vec<Profile>> {
    let profiles = state
        .profiles
        .iter()
        .map(|entry| entry.value().clone())
        .collect();
    Json(profiles)
}

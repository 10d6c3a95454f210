use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::Json;
use axum::Router;
use chrono::{NaiveDate, NaiveTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::load::{Load, LoadStatus};
use crate::models::profile::PartyRole;
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/loads", post(create_load).get(list_loads))
        .route("/loads/:id", get(get_load))
}

#[derive(Deserialize)]
pub struct CreateLoadRequest {
    pub shipper_id: Uuid,
    pub crop_type: String,
    pub quantity: f64,
    pub unit: String,
    pub pickup_location: String,
    pub destination: String,
    pub pickup_date: NaiveDate,
    pub pickup_time: Option<NaiveTime>,
    pub estimated_price: Option<f64>,
}

async fn create_load(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateLoadRequest>,
) -> Result<Json<Load>, AppError> {
    let shipper = state
        .profiles
        .get(&payload.shipper_id)
        .ok_or_else(|| AppError::NotFound(format!("profile {} not found", payload.shipper_id)))?;
    if shipper.role != PartyRole::Shipper {
        return Err(AppError::Validation(
            "loads can only be created by shipper profiles".to_string(),
        ));
    }
    drop(shipper);

    if payload.crop_type.trim().is_empty() {
        return Err(AppError::Validation("crop_type cannot be empty".to_string()));
    }
    if payload.quantity <= 0.0 {
        return Err(AppError::Validation("quantity must be > 0".to_string()));
    }
    if payload.pickup_location.trim().is_empty() || payload.destination.trim().is_empty() {
        return Err(AppError::Validation(
            "pickup_location and destination cannot be empty".to_string(),
        ));
    }
    if payload.estimated_price.is_some_and(|price| price < 0.0) {
        return Err(AppError::Validation(
            "estimated_price cannot be negative".to_string(),
        ));
    }

    let load = Load {
        id: Uuid::new_v4(),
        shipper_id: payload.shipper_id,
        crop_type: payload.crop_type,
        quantity: payload.quantity,
        unit: payload.unit,
        pickup_location: payload.pickup_location,
        destination: payload.destination,
        pickup_date: payload.pickup_date,
        pickup_time: payload.pickup_time,
        estimated_price: payload.estimated_price,
        status: LoadStatus::Pending,
        created_at: Utc::now(),
    };

    state.loads.insert(load.id, load.clone());
    Ok(Json(load))
}

async fn list_loads(State(state): State<Arc<AppState>>) -> Json<Vec<Load>> {
    let loads = state
        .loads
        .iter()
        .map(|entry| entry.value().clone())
        .collect();
    Json(loads)
}

async fn get_load(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Load>, AppError> {
    let load = state
        .loads
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("load {id} not found")))?;

    Ok(Json(load.value().clone()))
}

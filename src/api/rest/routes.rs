use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::Json;
use axum::Router;
use chrono::{NaiveDate, NaiveTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::error::AppError;
use crate::models::profile::PartyRole;
use crate::models::route::{RouteStatus, TruckRoute};
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/routes", post(create_route).get(list_routes))
}

#[derive(Deserialize)]
pub struct CreateRouteRequest {
    pub carrier_id: Uuid,
    pub vehicle_type: String,
    pub capacity: f64,
    pub capacity_unit: String,
    pub start_location: String,
    pub end_location: String,
    pub available_date: NaiveDate,
    pub available_time: Option<NaiveTime>,
    pub price_per_km: f64,
}

async fn create_route(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateRouteRequest>,
) -> Result<Json<TruckRoute>, AppError> {
    let carrier = state
        .profiles
        .get(&payload.carrier_id)
        .ok_or_else(|| AppError::NotFound(format!("profile {} not found", payload.carrier_id)))?;
    if carrier.role != PartyRole::Carrier {
        return Err(AppError::Validation(
            "routes can only be created by carrier profiles".to_string(),
        ));
    }
    drop(carrier);

    if payload.capacity <= 0.0 {
        return Err(AppError::Validation("capacity must be > 0".to_string()));
    }
    if payload.price_per_km < 0.0 {
        return Err(AppError::Validation(
            "price_per_km cannot be negative".to_string(),
        ));
    }
    if payload.start_location.trim().is_empty() || payload.end_location.trim().is_empty() {
        return Err(AppError::Validation(
            "start_location and end_location cannot be empty".to_string(),
        ));
    }

    let route = TruckRoute {
        id: Uuid::new_v4(),
        carrier_id: payload.carrier_id,
        vehicle_type: payload.vehicle_type,
        capacity: payload.capacity,
        capacity_unit: payload.capacity_unit,
        start_location: payload.start_location,
        end_location: payload.end_location,
        available_date: payload.available_date,
        available_time: payload.available_time,
        price_per_km: payload.price_per_km,
        status: RouteStatus::Available,
        created_at: Utc::now(),
    };

    state.routes.insert(route.id, route.clone());
    Ok(Json(route))
}

async fn list_routes(State(state): State<Arc<AppState>>) -> Json<Vec<TruckRoute>> {
    let routes = state
        .routes
        .iter()
        .map(|entry| entry.value().clone())
        .collect();
    Json(routes)
}

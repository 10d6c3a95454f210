use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::Json;
use axum::Router;
use serde::Deserialize;
use uuid::Uuid;

use crate::engine::booking::{propose_booking, resolve_booking, BookingResolution};
use crate::error::AppError;
use crate::models::booking::{Booking, BookingAction};
use crate::models::profile::PartyRole;
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/bookings", post(create_booking).get(list_bookings))
        .route("/bookings/:id/action", post(booking_action))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposeBookingRequest {
    pub load_id: Uuid,
    pub route_id: Uuid,
    pub initiator_role: PartyRole,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingActionRequest {
    pub action: BookingAction,
    pub actor_role: PartyRole,
}

async fn create_booking(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ProposeBookingRequest>,
) -> Result<Json<Booking>, AppError> {
    let result = propose_booking(
        &state,
        payload.load_id,
        payload.route_id,
        payload.initiator_role,
    )
    .await;

    let outcome = if result.is_ok() { "success" } else { "error" };
    state
        .metrics
        .booking_actions_total
        .with_label_values(&["propose", outcome])
        .inc();

    Ok(Json(result?))
}

async fn booking_action(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<BookingActionRequest>,
) -> Result<Json<BookingResolution>, AppError> {
    let result = resolve_booking(&state, id, payload.action, payload.actor_role).await;

    let outcome = if result.is_ok() { "success" } else { "error" };
    state
        .metrics
        .booking_actions_total
        .with_label_values(&[action_label(payload.action), outcome])
        .inc();

    Ok(Json(result?))
}

fn action_label(action: BookingAction) -> &'static str {
    match action {
        BookingAction::Accept => "accept",
        BookingAction::Reject => "reject",
        BookingAction::Cancel => "cancel",
        BookingAction::StartTransit => "start_transit",
        BookingAction::Complete => "complete",
    }
}

async fn list_bookings(State(state): State<Arc<AppState>>) -> Json<Vec<Booking>> {
    let bookings = state
        .bookings
        .iter()
        .map(|entry| entry.value().clone())
        .collect();
    Json(bookings)
}

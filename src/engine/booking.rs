use chrono::Utc;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::engine::compatibility::lanes_overlap;
use crate::engine::scoring::estimated_cost;
use crate::error::AppError;
use crate::models::booking::{Booking, BookingAction, BookingStatus};
use crate::models::load::{Load, LoadStatus};
use crate::models::profile::PartyRole;
use crate::models::route::{RouteStatus, TruckRoute};
use crate::state::AppState;

/// Outcome of a booking action, with the cascaded load and route state.
#[derive(Debug, Clone, Serialize)]
pub struct BookingResolution {
    pub booking: Booking,
    pub load: Load,
    pub route: TruckRoute,
}

/// The initiating party waits for the other side to accept.
pub fn initial_status(initiator: PartyRole) -> BookingStatus {
    match initiator {
        PartyRole::Shipper => BookingStatus::PendingTruckAcceptance,
        PartyRole::Carrier => BookingStatus::PendingFarmerAcceptance,
    }
}

/// Pure transition table. Accept/reject belong to the awaited party only;
/// cancel is open to either side from any non-terminal state; the operational
/// events move a confirmed booking through transit to completion.
pub fn apply_action(
    current: BookingStatus,
    action: BookingAction,
    actor: PartyRole,
) -> Result<BookingStatus, AppError> {
    use BookingAction::*;
    use BookingStatus::*;
    use PartyRole::*;

    match (current, action, actor) {
        (PendingTruckAcceptance, Accept, Carrier) => Ok(Confirmed),
        (PendingTruckAcceptance, Reject, Carrier) => Ok(Rejected),
        (PendingFarmerAcceptance, Accept, Shipper) => Ok(Confirmed),
        (PendingFarmerAcceptance, Reject, Shipper) => Ok(Rejected),
        (Confirmed, StartTransit, Carrier) => Ok(InTransit),
        (InTransit, Complete, _) => Ok(Completed),
        (state, Cancel, _) if !state.is_terminal() => Ok(Cancelled),
        (state, action, actor) => Err(AppError::InvalidTransition(format!(
            "action {action:?} by {actor:?} is not allowed from state {state:?}"
        ))),
    }
}

pub fn load_has_active_booking(state: &AppState, load_id: Uuid, except: Option<Uuid>) -> bool {
    state.bookings.iter().any(|entry| {
        let booking = entry.value();
        booking.load_id == load_id && booking.status.is_active() && Some(booking.id) != except
    })
}

pub fn route_has_active_booking(state: &AppState, route_id: Uuid, except: Option<Uuid>) -> bool {
    state.bookings.iter().any(|entry| {
        let booking = entry.value();
        booking.route_id == route_id && booking.status.is_active() && Some(booking.id) != except
    })
}

/// Creates a booking in its initial pending state and moves the load and
/// route to `matched`. Serialized on the booking lock so the
/// at-most-one-active-booking invariant holds under concurrent proposals.
pub async fn propose_booking(
    state: &AppState,
    load_id: Uuid,
    route_id: Uuid,
    initiator: PartyRole,
) -> Result<Booking, AppError> {
    let _guard = state.booking_lock.lock().await;

    let load = state
        .loads
        .get(&load_id)
        .map(|entry| entry.value().clone())
        .ok_or_else(|| AppError::NotFound(format!("load {load_id} not found")))?;
    let route = state
        .routes
        .get(&route_id)
        .map(|entry| entry.value().clone())
        .ok_or_else(|| AppError::NotFound(format!("route {route_id} not found")))?;

    if load_has_active_booking(state, load_id, None) {
        return Err(AppError::ConflictingBooking(format!(
            "load {load_id} already has an active booking"
        )));
    }
    if route_has_active_booking(state, route_id, None) {
        return Err(AppError::ConflictingBooking(format!(
            "route {route_id} already has an active booking"
        )));
    }

    if !matches!(load.status, LoadStatus::Pending | LoadStatus::Matched) {
        return Err(AppError::Validation(format!(
            "load {load_id} is not open for booking"
        )));
    }
    if !matches!(route.status, RouteStatus::Available | RouteStatus::Matched) {
        return Err(AppError::Validation(format!(
            "route {route_id} is not open for booking"
        )));
    }

    if route.capacity < load.quantity {
        return Err(AppError::CapacityExceeded {
            capacity: route.capacity,
            quantity: load.quantity,
        });
    }
    if !lanes_overlap(&load, &route) {
        return Err(AppError::Validation(format!(
            "route {route_id} does not overlap the load's lane"
        )));
    }

    let distance_km = state
        .distances
        .distance_km(&load.pickup_location, &load.destination);
    let total_price = estimated_cost(distance_km, route.price_per_km) as f64;

    let booking = Booking {
        id: Uuid::new_v4(),
        load_id,
        route_id,
        shipper_id: load.shipper_id,
        carrier_id: route.carrier_id,
        total_price,
        distance_km,
        status: initial_status(initiator),
        initiator,
        booking_date: Utc::now(),
        completion_date: None,
    };

    // validation is complete; apply booking + cascades together
    let mut matched_load = load;
    matched_load.status = LoadStatus::Matched;
    let mut matched_route = route;
    matched_route.status = RouteStatus::Matched;

    state.bookings.insert(booking.id, booking.clone());
    state.loads.insert(load_id, matched_load);
    state.routes.insert(route_id, matched_route);
    state.metrics.active_bookings.inc();

    info!(
        booking_id = %booking.id,
        load_id = %load_id,
        route_id = %route_id,
        initiator = ?initiator,
        status = ?booking.status,
        "booking proposed"
    );

    Ok(booking)
}

/// Applies a booking action and its cascading load/route updates. Runs under
/// the booking lock; the writes happen only after the transition and both
/// referenced entities have been validated, so a partial cascade cannot occur.
pub async fn resolve_booking(
    state: &AppState,
    booking_id: Uuid,
    action: BookingAction,
    actor: PartyRole,
) -> Result<BookingResolution, AppError> {
    let _guard = state.booking_lock.lock().await;

    let booking = state
        .bookings
        .get(&booking_id)
        .map(|entry| entry.value().clone())
        .ok_or_else(|| AppError::NotFound(format!("booking {booking_id} not found")))?;

    let next = apply_action(booking.status, action, actor)?;

    let mut load = state
        .loads
        .get(&booking.load_id)
        .map(|entry| entry.value().clone())
        .ok_or_else(|| {
            AppError::Internal(format!("booking {booking_id} references a missing load"))
        })?;
    let mut route = state
        .routes
        .get(&booking.route_id)
        .map(|entry| entry.value().clone())
        .ok_or_else(|| {
            AppError::Internal(format!("booking {booking_id} references a missing route"))
        })?;

    let mut updated = booking.clone();
    updated.status = next;

    match next {
        BookingStatus::Confirmed => {
            load.status = LoadStatus::Booked;
            route.status = RouteStatus::Booked;
        }
        BookingStatus::InTransit => {}
        BookingStatus::Completed => {
            updated.completion_date = Some(Utc::now());
            load.status = LoadStatus::Completed;
            route.status = RouteStatus::Completed;
        }
        BookingStatus::Rejected | BookingStatus::Cancelled => {
            // release the pair back into the matching pool unless some other
            // active booking still claims it
            if !load_has_active_booking(state, load.id, Some(booking_id)) {
                load.status = LoadStatus::Pending;
            }
            if !route_has_active_booking(state, route.id, Some(booking_id)) {
                route.status = RouteStatus::Available;
            }
        }
        BookingStatus::PendingFarmerAcceptance | BookingStatus::PendingTruckAcceptance => {}
    }

    state.bookings.insert(updated.id, updated.clone());
    state.loads.insert(load.id, load.clone());
    state.routes.insert(route.id, route.clone());

    if booking.status.is_active() && next.is_terminal() {
        state.metrics.active_bookings.dec();
    }

    info!(
        booking_id = %updated.id,
        from = ?booking.status,
        to = ?next,
        actor = ?actor,
        "booking resolved"
    );

    Ok(BookingResolution {
        booking: updated,
        load,
        route,
    })
}

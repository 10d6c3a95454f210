use uuid::Uuid;

use crate::engine::booking::route_has_active_booking;
use crate::engine::compatibility::is_compatible;
use crate::engine::scoring::{estimated_cost, score_route, MatchCandidate};
use crate::error::AppError;
use crate::state::AppState;

/// Ranks every eligible route for the given load. Read-only; runs against the
/// current store snapshot without taking the booking lock. Zero compatible
/// routes is a normal empty result.
pub fn find_matches(state: &AppState, load_id: Uuid) -> Result<Vec<MatchCandidate>, AppError> {
    let load = state
        .loads
        .get(&load_id)
        .map(|entry| entry.value().clone())
        .ok_or_else(|| AppError::NotFound(format!("load {load_id} not found")))?;

    let distance_km = state
        .distances
        .distance_km(&load.pickup_location, &load.destination);

    let mut candidates: Vec<MatchCandidate> = state
        .routes
        .iter()
        .filter(|entry| is_compatible(&load, entry.value()))
        .filter(|entry| !route_has_active_booking(state, *entry.key(), None))
        .map(|entry| {
            let route = entry.value();
            let (score, breakdown) = score_route(&load, route, distance_km);

            let (carrier_name, carrier_phone) = state
                .profiles
                .get(&route.carrier_id)
                .map(|profile| (profile.full_name.clone(), profile.phone.clone()))
                .unwrap_or_else(|| ("unknown carrier".to_string(), "unknown".to_string()));

            MatchCandidate {
                route_id: route.id,
                carrier_name,
                carrier_phone,
                vehicle_type: route.vehicle_type.clone(),
                capacity: route.capacity,
                price_per_km: route.price_per_km,
                distance_km,
                estimated_cost: estimated_cost(distance_km, route.price_per_km),
                match_score_percent: score,
                rank: 0,
                breakdown,
            }
        })
        .collect();

    // score desc, then cheaper first, then route id, so re-runs on unchanged
    // inputs always return the same order
    candidates.sort_by(|a, b| {
        b.match_score_percent
            .cmp(&a.match_score_percent)
            .then(a.estimated_cost.cmp(&b.estimated_cost))
            .then(a.route_id.cmp(&b.route_id))
    });
    candidates.truncate(state.match_limit);

    for (index, candidate) in candidates.iter_mut().enumerate() {
        candidate.rank = index + 1;
    }

    Ok(candidates)
}

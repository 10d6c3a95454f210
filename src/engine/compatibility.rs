use crate::geo::city_token;
use crate::models::load::Load;
use crate::models::route::{RouteStatus, TruckRoute};

/// Structural eligibility of a route for a load: open, big enough, and on an
/// overlapping lane.
pub fn is_compatible(load: &Load, route: &TruckRoute) -> bool {
    route.status == RouteStatus::Available
        && route.capacity >= load.quantity
        && lanes_overlap(load, route)
}

/// Geographic overlap is a deliberately permissive substring check on the
/// leading city token, not exact corridor matching: a match on either
/// endpoint suffices.
pub fn lanes_overlap(load: &Load, route: &TruckRoute) -> bool {
    let pickup_city = city_token(&load.pickup_location);
    let destination_city = city_token(&load.destination);
    let route_start = route.start_location.to_lowercase();
    let route_end = route.end_location.to_lowercase();

    let pickup_overlaps = !pickup_city.is_empty() && route_start.contains(&pickup_city);
    let destination_overlaps =
        !destination_city.is_empty() && route_end.contains(&destination_city);

    pickup_overlaps || destination_overlaps
}

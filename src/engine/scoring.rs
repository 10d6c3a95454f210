use serde::Serialize;
use uuid::Uuid;

use crate::models::load::Load;
use crate::models::route::TruckRoute;

const CAPACITY_POINTS: f64 = 30.0;
const PRICE_POINTS: f64 = 50.0;
const REFERENCE_RATE_PER_KM: f64 = 20.0;
const PRICE_PENALTY_PER_UNIT: f64 = 2.0;
const RELIABILITY_FLOOR: u32 = 70;
const RELIABILITY_SPAN: u32 = 21;

/// Scores never reach 100 so the UI can signal "no perfect match exists".
pub const SCORE_CAP: u32 = 98;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub capacity_score: f64,
    pub price_score: f64,
    pub reliability_score: f64,
    pub capacity_margin: f64,
    pub summary: Vec<String>,
}

/// A scored, ranked route offered back to the caller for a given load.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchCandidate {
    pub route_id: Uuid,
    pub carrier_name: String,
    pub carrier_phone: String,
    pub vehicle_type: String,
    pub capacity: f64,
    pub price_per_km: f64,
    pub distance_km: u32,
    pub estimated_cost: i64,
    pub match_score_percent: u32,
    pub rank: usize,
    pub breakdown: ScoreBreakdown,
}

pub fn estimated_cost(distance_km: u32, price_per_km: f64) -> i64 {
    (f64::from(distance_km) * price_per_km).round() as i64
}

/// Composite suitability score in [0, SCORE_CAP], plus the per-term breakdown.
///
/// Capacity rewards headroom but saturates once the route comfortably covers
/// the load, so grossly oversized trucks gain nothing extra. Price is measured
/// against a flat reference rate. Reliability is a deterministic stand-in in
/// [70, 90] keyed by route id until a persisted carrier rating exists.
pub fn score_route(load: &Load, route: &TruckRoute, distance_km: u32) -> (u32, ScoreBreakdown) {
    let capacity_margin = if load.quantity > 0.0 {
        route.capacity / load.quantity
    } else {
        0.0
    };

    let capacity_score = (capacity_margin * CAPACITY_POINTS).min(CAPACITY_POINTS);
    let price_score = (PRICE_POINTS
        - (route.price_per_km - REFERENCE_RATE_PER_KM) * PRICE_PENALTY_PER_UNIT)
        .max(0.0);
    let reliability_score = reliability_score(route.id);

    let total = (capacity_score + price_score + reliability_score).round() as u32;
    let score = total.min(SCORE_CAP);

    let cost = estimated_cost(distance_km, route.price_per_km);
    let breakdown = ScoreBreakdown {
        capacity_score,
        price_score,
        reliability_score,
        capacity_margin,
        summary: summarize(load, route, capacity_margin, cost),
    };

    (score, breakdown)
}

fn reliability_score(route_id: Uuid) -> f64 {
    let offset = (route_id.as_u128() % u128::from(RELIABILITY_SPAN)) as u32;
    f64::from(RELIABILITY_FLOOR + offset)
}

fn summarize(load: &Load, route: &TruckRoute, capacity_margin: f64, cost: i64) -> Vec<String> {
    let mut summary = Vec::with_capacity(3);

    summary.push(format!(
        "{capacity_margin:.1}x capacity margin over the requested {} {}",
        load.quantity, load.unit
    ));

    if route.price_per_km <= REFERENCE_RATE_PER_KM {
        summary.push(format!(
            "{:.0}/km, at or below the {REFERENCE_RATE_PER_KM:.0}/km reference rate",
            route.price_per_km
        ));
    } else {
        summary.push(format!(
            "{:.0}/km, {:.0} above the {REFERENCE_RATE_PER_KM:.0}/km reference rate",
            route.price_per_km,
            route.price_per_km - REFERENCE_RATE_PER_KM
        ));
    }

    if let Some(budget) = load.estimated_price {
        if (cost as f64) <= budget {
            summary.push(format!("estimated cost {cost} within the {budget:.0} budget"));
        } else {
            summary.push(format!(
                "estimated cost {cost} exceeds the {budget:.0} budget by {:.0}",
                cost as f64 - budget
            ));
        }
    }

    summary
}

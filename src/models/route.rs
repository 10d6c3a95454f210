use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RouteStatus {
    Available,
    Matched,
    Booked,
    Completed,
    Cancelled,
}

/// A carrier's offered capacity on a lane. May be proposed against several
/// loads while open; leaves the matching pool once booked.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TruckRoute {
    pub id: Uuid,
    pub carrier_id: Uuid,
    pub vehicle_type: String,
    pub capacity: f64,
    pub capacity_unit: String,
    pub start_location: String,
    pub end_location: String,
    pub available_date: NaiveDate,
    pub available_time: Option<NaiveTime>,
    pub price_per_km: f64,
    pub status: RouteStatus,
    pub created_at: DateTime<Utc>,
}

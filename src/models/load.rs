use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LoadStatus {
    Pending,
    Matched,
    Booked,
    Completed,
    Cancelled,
}

/// A shipment a shipper wants transported. Never deleted, only
/// status-transitioned, so booking history stays intact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Load {
    pub id: Uuid,
    pub shipper_id: Uuid,
    pub crop_type: String,
    pub quantity: f64,
    pub unit: String,
    pub pickup_location: String,
    pub destination: String,
    pub pickup_date: NaiveDate,
    pub pickup_time: Option<NaiveTime>,
    pub estimated_price: Option<f64>,
    pub status: LoadStatus,
    pub created_at: DateTime<Utc>,
}

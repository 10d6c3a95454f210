use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::profile::PartyRole;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    PendingFarmerAcceptance,
    PendingTruckAcceptance,
    Confirmed,
    InTransit,
    Completed,
    Rejected,
    Cancelled,
}

impl BookingStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            BookingStatus::Completed | BookingStatus::Rejected | BookingStatus::Cancelled
        )
    }

    /// Active bookings are the ones that claim their load and route.
    pub fn is_active(&self) -> bool {
        !self.is_terminal()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BookingAction {
    Accept,
    Reject,
    Cancel,
    StartTransit,
    Complete,
}

/// The binding agreement pairing one load with one route. The only entity
/// allowed to move a load or route off its open status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub load_id: Uuid,
    pub route_id: Uuid,
    pub shipper_id: Uuid,
    pub carrier_id: Uuid,
    pub total_price: f64,
    pub distance_km: u32,
    pub status: BookingStatus,
    pub initiator: PartyRole,
    pub booking_date: DateTime<Utc>,
    pub completion_date: Option<DateTime<Utc>>,
}

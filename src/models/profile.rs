use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Which side of the marketplace a profile belongs to. Fixed at creation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PartyRole {
    Shipper,
    Carrier,
}

/// Account record owned by the authentication collaborator; read-only here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub role: PartyRole,
    pub full_name: String,
    pub phone: String,
    pub location: String,
    pub created_at: DateTime<Utc>,
}

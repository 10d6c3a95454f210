use dashmap::DashMap;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::geo::DistanceTable;
use crate::models::booking::Booking;
use crate::models::load::Load;
use crate::models::profile::Profile;
use crate::models::route::TruckRoute;
use crate::observability::metrics::Metrics;

pub struct AppState {
    pub profiles: DashMap<Uuid, Profile>,
    pub loads: DashMap<Uuid, Load>,
    pub routes: DashMap<Uuid, TruckRoute>,
    pub bookings: DashMap<Uuid, Booking>,
    pub distances: DistanceTable,
    /// Serializes every booking read-modify-write so at most one active
    /// booking can ever claim a load or route. Matching reads stay lock-free.
    pub booking_lock: Mutex<()>,
    pub match_limit: usize,
    pub metrics: Metrics,
}

impl AppState {
    pub fn new(match_limit: usize, distances: DistanceTable) -> Self {
        Self {
            profiles: DashMap::new(),
            loads: DashMap::new(),
            routes: DashMap::new(),
            bookings: DashMap::new(),
            distances,
            booking_lock: Mutex::new(()),
            match_limit,
            metrics: Metrics::new(),
        }
    }
}

use std::collections::HashMap;

/// Leading city token of a free-text location: everything before the first
/// comma, trimmed and lowercased. "Mumbai, Maharashtra" -> "mumbai".
pub fn city_token(location: &str) -> String {
    location
        .split(',')
        .next()
        .unwrap_or("")
        .trim()
        .to_lowercase()
}

/// Static city-pair distance lookup. Pairs are unordered (A->B equals B->A);
/// unknown lanes resolve to a fixed fallback so matching stays deterministic.
pub struct DistanceTable {
    lanes: HashMap<(String, String), u32>,
    fallback_km: u32,
}

impl DistanceTable {
    pub fn new(fallback_km: u32) -> Self {
        Self {
            lanes: HashMap::new(),
            fallback_km,
        }
    }

    /// Table seeded with the lanes the marketplace launched with.
    pub fn with_default_lanes(fallback_km: u32) -> Self {
        let mut table = Self::new(fallback_km);
        table.insert_lane("Mumbai", "Delhi", 1400);
        table.insert_lane("Mumbai", "Pune", 150);
        table.insert_lane("Delhi", "Jaipur", 280);
        table.insert_lane("Pune", "Nashik", 200);
        table.insert_lane("Mumbai", "Ahmedabad", 530);
        table
    }

    pub fn insert_lane(&mut self, a: &str, b: &str, km: u32) {
        self.lanes.insert(lane_key(a, b), km);
    }

    pub fn distance_km(&self, origin: &str, destination: &str) -> u32 {
        self.lanes
            .get(&lane_key(origin, destination))
            .copied()
            .unwrap_or(self.fallback_km)
    }
}

fn lane_key(a: &str, b: &str) -> (String, String) {
    let a = city_token(a);
    let b = city_token(b);
    if a <= b { (a, b) } else { (b, a) }
}

use std::sync::Arc;
use std::time::Instant;

use axum::extract::{Query, State};
use axum::routing::get;
use axum::Json;
use axum::Router;
use serde::Deserialize;
use uuid::Uuid;

use crate::engine::matching::find_matches;
use crate::engine::scoring::MatchCandidate;
use crate::error::AppError;
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/matches", get(get_matches))
}

#[derive(Deserialize)]
pub struct MatchQuery {
    #[serde(rename = "loadId")]
    pub load_id: Uuid,
}

async fn get_matches(
    State(state): State<Arc<AppState>>,
    Query(query): Query<MatchQuery>,
) -> Result<Json<Vec<MatchCandidate>>, AppError> {
    let start = Instant::now();
    let result = find_matches(&state, query.load_id);

    let outcome = if result.is_ok() { "success" } else { "error" };
    state
        .metrics
        .match_latency_seconds
        .with_label_values(&[outcome])
        .observe(start.elapsed().as_secs_f64());
    state
        .metrics
        .match_requests_total
        .with_label_values(&[outcome])
        .inc();

    let candidates = result?;
    tracing::info!(
        load_id = %query.load_id,
        candidates = candidates.len(),
        "matches served"
    );

    Ok(Json(candidates))
}

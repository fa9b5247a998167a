use axum::Json;
use tracing::debug;

use crate::models::CrowdDataResponse;
use crate::services::generate_crowd_data;

/// Handle `GET /crowd-data/`.
///
/// Recomputes the full mock point set on every request. Nothing is
/// cached or shared between requests; each draws from the thread-local
/// generator, so concurrent requests need no coordination.
pub async fn crowd_data() -> Json<CrowdDataResponse> {
    let mut rng = rand::thread_rng();
    let points = generate_crowd_data(&mut rng);

    debug!("Generated {} mock crowd data points", points.len());

    Json(CrowdDataResponse::new(points))
}

use serde::{Deserialize, Serialize};

use super::point::GeoPoint;

/// Payload for `GET /crowd-data/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrowdDataResponse {
    pub data: Vec<GeoPoint>,
}

impl CrowdDataResponse {
    pub fn new(data: Vec<GeoPoint>) -> Self {
        Self { data }
    }
}

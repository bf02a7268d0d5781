use axum::{extract::State, Extension, Json};
use serde::{Deserialize, Serialize};
use smkt_core::Supermarket;

use crate::middleware::RequestId;

use super::{extract::ApiJson, map_db_error, validate_area, ApiError, AppState};

#[derive(Debug, Deserialize)]
pub(super) struct NearbyRequest {
    latitude: Option<f64>,
    longitude: Option<f64>,
    radius_km: Option<f64>,
}

#[derive(Debug, Serialize)]
pub(super) struct NearbyResponse {
    supermarkets: Vec<Supermarket>,
    count: usize,
}

pub(super) async fn list_nearby_supermarkets(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    ApiJson(body): ApiJson<NearbyRequest>,
) -> Result<Json<NearbyResponse>, ApiError> {
    let (center, radius) = validate_area(body.latitude, body.longitude, body.radius_km)
        .map_err(|e| ApiError::validation(&req_id, &e))?;

    let supermarkets = smkt_db::find_supermarkets_in_radius(&state.pool, center, radius)
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &e))?;

    Ok(Json(NearbyResponse {
        count: supermarkets.len(),
        supermarkets,
    }))
}

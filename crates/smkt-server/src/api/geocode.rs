use axum::{extract::State, Extension, Json};
use serde::Deserialize;
use smkt_core::{validate_address, Location};

use crate::middleware::RequestId;

use super::{extract::ApiJson, map_geocode_error, required, ApiError, AppState};

#[derive(Debug, Deserialize)]
pub(super) struct GeocodeRequest {
    address: Option<String>,
}

pub(super) async fn geocode_address(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    ApiJson(body): ApiJson<GeocodeRequest>,
) -> Result<Json<Location>, ApiError> {
    let address = required(body.address.as_deref(), "address")
        .and_then(validate_address)
        .map_err(|e| ApiError::validation(&req_id, &e))?;

    let location = state
        .geocoder
        .geocode(address)
        .await
        .map_err(|e| map_geocode_error(req_id.0.clone(), &e))?;

    Ok(Json(location))
}

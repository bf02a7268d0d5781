use axum::{extract::State, Extension, Json};
use serde::{Deserialize, Serialize};
use smkt_core::{validate_keyword, Product};

use crate::middleware::RequestId;

use super::{
    extract::{ApiJson, ApiQuery},
    map_db_error, required, validate_area, ApiError, AppState,
};

/// Accepted both as a query string (`GET`) and a JSON body (`POST`).
#[derive(Debug, Deserialize)]
pub(super) struct SearchParams {
    keyword: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    radius_km: Option<f64>,
}

#[derive(Debug, Serialize)]
pub(super) struct SearchResponse {
    keyword: String,
    products: Vec<Product>,
    count: usize,
}

pub(super) async fn search_by_query(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    ApiQuery(params): ApiQuery<SearchParams>,
) -> Result<Json<SearchResponse>, ApiError> {
    run_search(&state, &req_id, params).await
}

pub(super) async fn search_by_body(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    ApiJson(params): ApiJson<SearchParams>,
) -> Result<Json<SearchResponse>, ApiError> {
    run_search(&state, &req_id, params).await
}

async fn run_search(
    state: &AppState,
    req_id: &RequestId,
    params: SearchParams,
) -> Result<Json<SearchResponse>, ApiError> {
    let keyword = required(params.keyword.as_deref(), "keyword")
        .and_then(validate_keyword)
        .map_err(|e| ApiError::validation(req_id, &e))?;
    let (center, radius) = validate_area(params.latitude, params.longitude, params.radius_km)
        .map_err(|e| ApiError::validation(req_id, &e))?;

    let products = smkt_db::search_products_in_radius(&state.pool, keyword, center, radius)
        .await
        .map_err(|e| map_db_error(req_id.0.clone(), &e))?;

    tracing::info!(keyword, radius_km = radius.km(), count = products.len(), "search served");
    Ok(Json(SearchResponse {
        keyword: keyword.to_owned(),
        count: products.len(),
        products,
    }))
}

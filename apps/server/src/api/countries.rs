use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use globefin_market_data::{ComparisonRow, CountryConfig, CountrySnapshot, ExchangeLocation, NamedQuote};
use serde::Deserialize;

use super::split_list;
use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

#[derive(Debug, Deserialize)]
struct CompareQuery {
    countries: Option<String>,
}

async fn list_countries(State(state): State<Arc<AppState>>) -> Json<Vec<CountryConfig>> {
    Json(state.market_service.countries().to_vec())
}

async fn get_country(
    Path(country): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<CountryConfig>> {
    let config = state.market_service.country(&country)?;
    Ok(Json(config.clone()))
}

async fn get_snapshot(
    Path(country): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<CountrySnapshot>> {
    let snapshot = state.market_service.snapshot(&country).await?;
    Ok(Json(snapshot))
}

async fn get_country_indices(
    Path(country): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<NamedQuote>>> {
    let quotes = state.market_service.country_indices(&country).await?;
    Ok(Json(quotes))
}

async fn get_location(
    Path(country): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<ExchangeLocation>> {
    let location = state.market_service.location(&country)?;
    Ok(Json(location))
}

async fn compare_countries(
    Query(query): Query<CompareQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<ComparisonRow>>> {
    let names: Vec<String> = query
        .countries
        .as_deref()
        .map(split_list)
        .unwrap_or_default()
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect();
    if names.is_empty() {
        return Err(ApiError::BadRequest(
            "Query parameter 'countries' must list at least one country".to_string(),
        ));
    }
    let rows = state.market_service.compare(&names).await?;
    Ok(Json(rows))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/countries", get(list_countries))
        .route("/countries/{country}", get(get_country))
        .route("/countries/{country}/snapshot", get(get_snapshot))
        .route("/countries/{country}/indices", get(get_country_indices))
        .route("/countries/{country}/location", get(get_location))
        .route("/compare", get(compare_countries))
}

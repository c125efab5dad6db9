use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use globefin_market_data::{NamedQuote, RateRecord};
use serde::Deserialize;

use super::split_list;
use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
};

#[derive(Debug, Deserialize)]
struct IndicesQuery {
    symbols: Option<String>,
}

/// Quotes for arbitrary symbols; a blank entry in the list is a 400.
async fn get_indices(
    Query(query): Query<IndicesQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<NamedQuote>>> {
    let symbols = match query.symbols.as_deref() {
        Some(raw) if !raw.trim().is_empty() => split_list(raw),
        _ => {
            return Err(ApiError::BadRequest(
                "Query parameter 'symbols' is required".to_string(),
            ))
        }
    };
    let quotes = state.market_service.named_indices(&symbols).await?;
    Ok(Json(quotes))
}

/// Always 200; a failed lookup is reported in the record itself.
async fn get_rates(
    Path(base): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Json<RateRecord> {
    Json(state.market_service.fetch_rates(&base).await)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/indices", get(get_indices))
        .route("/rates/{base}", get(get_rates))
}

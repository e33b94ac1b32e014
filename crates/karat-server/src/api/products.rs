use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};

use karat_core::{CatalogError, EnrichedProduct, ProductFilter};

use crate::middleware::RequestId;

use super::{ApiError, AppState};

/// `GET /products` — the full pipeline: load → quote → enrich → filter.
pub(super) async fn list_products(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(filter): Query<ProductFilter>,
) -> Result<Json<Vec<EnrichedProduct>>, ApiError> {
    if filter.limit.is_some() || filter.offset.is_some() {
        tracing::debug!(
            request_id = %req_id.0,
            "limit/offset accepted but pagination is not applied"
        );
    }
    if !filter.is_empty() {
        tracing::debug!(request_id = %req_id.0, "narrowing catalogue by query bounds");
    }

    let products = enriched_catalog(&state)
        .await
        .map_err(|e| load_failure(&req_id.0, &e, "Failed to fetch products"))?;

    Ok(Json(filter.apply(products)))
}

/// `GET /products/{id}` — runs the same whole-catalogue pipeline, then picks
/// one record by its positional id. Deliberately not optimised: a fresh load
/// and quote fetch answer every single-item lookup, matching list behaviour.
///
/// A segment that is not a positive integer can never name a record, so it
/// answers 404 like any other unknown id.
pub(super) async fn get_product(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(id): Path<String>,
) -> Result<Json<EnrichedProduct>, ApiError> {
    let id: u32 = id
        .parse()
        .map_err(|_| ApiError::not_found("Product not found"))?;

    let products = enriched_catalog(&state)
        .await
        .map_err(|e| load_failure(&req_id.0, &e, "Failed to fetch product"))?;

    products
        .into_iter()
        .find(|p| p.id == id)
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Product not found"))
}

/// Loads the catalogue, fetches one shared quote (fallback-absorbing), and
/// enriches every record. Only the catalogue load can fail.
async fn enriched_catalog(state: &AppState) -> Result<Vec<EnrichedProduct>, CatalogError> {
    let records = karat_core::load_catalog(&state.config.products_path)?;
    let quote = state.gold.price_per_gram_or_fallback().await;
    Ok(karat_core::enrich(records, quote))
}

fn load_failure(request_id: &str, error: &CatalogError, message: &'static str) -> ApiError {
    tracing::error!(request_id, error = %error, "catalogue load failed");
    ApiError::internal(message)
}

use axum::extract::{Query, State};
use axum::Json;
use contracts::dashboards::d100_sales_performance::{
    FilterOptionsResponse, PerformanceRequest, PerformanceResponse,
};
use std::sync::Arc;

use crate::api::AppState;
use crate::dashboards::d100_sales_performance::service;
use crate::shared::error::ApiError;

/// GET /api/d100/performance?year=2024&metric=Sales_USD
pub async fn get_performance(
    State(state): State<Arc<AppState>>,
    Query(request): Query<PerformanceRequest>,
) -> Result<Json<PerformanceResponse>, ApiError> {
    if !(1..=9998).contains(&request.year) {
        return Err(ApiError::BadRequest(format!(
            "year {} is out of range",
            request.year
        )));
    }

    tracing::info!(
        "D100 Dashboard: {} performance for {}",
        request.metric.label(),
        request.year
    );

    let response =
        service::get_performance(state.sales.as_ref(), &state.config.dashboard, request).await?;

    tracing::info!(
        "D100 Dashboard: Returning {} months, {}",
        response.months.len(),
        response.summary.text
    );
    Ok(Json(response))
}

/// GET /api/d100/options
pub async fn get_filter_options(
    State(state): State<Arc<AppState>>,
) -> Result<Json<FilterOptionsResponse>, ApiError> {
    let options = service::get_filter_options(state.sales.as_ref(), &state.config.dashboard).await?;

    tracing::info!(
        "D100 Dashboard: {} years, {} products, {} countries available",
        options.years.len(),
        options.products.len(),
        options.countries.len()
    );
    Ok(Json(options))
}

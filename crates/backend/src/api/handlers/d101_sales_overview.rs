use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use axum::Json;
use contracts::dashboards::d101_sales_overview::{OverviewRequest, OverviewResponse};
use std::sync::Arc;

use crate::api::AppState;
use crate::dashboards::d101_sales_overview::{export, service};
use crate::shared::error::ApiError;

/// POST /api/d101/overview
pub async fn get_overview(
    State(state): State<Arc<AppState>>,
    Json(request): Json<OverviewRequest>,
) -> Result<Json<OverviewResponse>, ApiError> {
    service::validate(&request).map_err(ApiError::BadRequest)?;

    tracing::info!(
        "D101 Dashboard: overview for {} products, {} countries, {:?}..{:?}",
        request.products.len(),
        request.countries.len(),
        request.start_date,
        request.end_date
    );

    let response = service::get_overview(state.sales.as_ref(), &request).await?;

    tracing::info!("D101 Dashboard: {} rows matched", response.record_count);
    Ok(Json(response))
}

/// POST /api/d101/overview/export
pub async fn export_overview(
    State(state): State<Arc<AppState>>,
    Json(request): Json<OverviewRequest>,
) -> Result<impl IntoResponse, ApiError> {
    service::validate(&request).map_err(ApiError::BadRequest)?;

    let records = service::fetch_filtered(state.sales.as_ref(), &request).await?;
    let body = export::daily_totals_csv(&records)?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"sales_overview.csv\"",
            ),
        ],
        body,
    ))
}

use contracts::dashboards::d101_sales_overview::{OverviewRequest, OverviewResponse};
use gloo_net::http::Request;

const API_BASE: &str = "/api/d101";

/// Графики обзора для выбранных фильтров
pub async fn get_overview(request: &OverviewRequest) -> Result<OverviewResponse, String> {
    let url = format!("{}/overview", API_BASE);

    let response = Request::post(&url)
        .json(request)
        .map_err(|e| format!("Failed to build request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// CSV с дневными итогами для тех же фильтров
pub async fn export_overview(request: &OverviewRequest) -> Result<String, String> {
    let url = format!("{}/overview/export", API_BASE);

    let response = Request::post(&url)
        .json(request)
        .map_err(|e| format!("Failed to build request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .text()
        .await
        .map_err(|e| format!("Failed to read response: {}", e))
}

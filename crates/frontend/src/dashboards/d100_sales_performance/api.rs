use contracts::dashboards::d100_sales_performance::{FilterOptionsResponse, PerformanceResponse};
use contracts::enums::Metric;
use gloo_net::http::Request;

const API_BASE: &str = "/api/d100";

/// Годы, метрики и справочники для фильтров
pub async fn get_filter_options() -> Result<FilterOptionsResponse, String> {
    let url = format!("{}/options", API_BASE);

    let response = Request::get(&url)
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

/// Данные дашборда за год по выбранной метрике
pub async fn get_performance(year: i32, metric: Metric) -> Result<PerformanceResponse, String> {
    let url = format!(
        "{}/performance?year={}&metric={}",
        API_BASE,
        year,
        metric.code()
    );

    let response = Request::get(&url)
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

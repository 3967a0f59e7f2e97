use anyhow::Result;
use contracts::dashboards::d101_sales_overview::{OverviewRequest, OverviewResponse};
use contracts::domain::a001_sales::SalesRecord;
use contracts::enums::Metric;

use super::charts;
use crate::domain::a001_sales::{SalesFilter, SalesSource};
use crate::shared::aggregation::{compare_months, group_by_day, ytd_totals};

/// Rejects date ranges whose start lies after their end
pub fn validate(request: &OverviewRequest) -> std::result::Result<(), String> {
    if let (Some(start), Some(end)) = (request.start_date, request.end_date) {
        if start > end {
            return Err(format!("start_date {} is after end_date {}", start, end));
        }
    }
    Ok(())
}

pub async fn fetch_filtered(
    source: &dyn SalesSource,
    request: &OverviewRequest,
) -> Result<Vec<SalesRecord>> {
    source
        .fetch_sales(&SalesFilter::from_overview(request))
        .await
}

/// Five overview charts for the product/country/date filters
pub async fn get_overview(
    source: &dyn SalesSource,
    request: &OverviewRequest,
) -> Result<OverviewResponse> {
    let records = fetch_filtered(source, request).await?;
    let days = group_by_day(&records);

    // Latest year in the selection against the one before it
    let latest_year = records.iter().map(|r| r.year()).max();
    let totals = latest_year
        .map(|year| ytd_totals(&compare_months(&records, year), Metric::Sales))
        .unwrap_or_default();

    Ok(OverviewResponse {
        sales: charts::sales_figure(&days),
        gross_profit_pct: charts::gross_profit_pct_figure(&days),
        quantity: charts::quantity_figure(&days),
        profit: charts::profit_figure(&days),
        ytd_vs_pytd: charts::ytd_vs_pytd_figure(latest_year, totals.ytd, totals.pytd),
        record_count: records.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_sales::testing::{sale_of, InMemorySales};
    use chrono::NaiveDate;

    fn source() -> InMemorySales {
        InMemorySales::new(vec![
            sale_of("Lavender", "France", 2023, 1, 100.0),
            sale_of("Lavender", "Canada", 2023, 2, 50.0),
            sale_of("Hydrangea", "France", 2023, 6, 70.0),
            sale_of("Lavender", "France", 2024, 1, 130.0),
            sale_of("Lavender", "Canada", 2024, 2, 40.0),
        ])
    }

    #[tokio::test]
    async fn test_no_filters_uses_everything() {
        let response = get_overview(&source(), &OverviewRequest::default())
            .await
            .unwrap();
        assert_eq!(response.record_count, 5);
        assert_eq!(response.sales.data[0].y.len(), 5);
        // 2024 has Jan and Feb; PYTD only counts 2023 Jan and Feb
        assert_eq!(response.ytd_vs_pytd.data[0].y, vec![150.0, 170.0]);
    }

    #[tokio::test]
    async fn test_filters_narrow_the_charts() {
        let request = OverviewRequest {
            products: vec!["Lavender".to_string()],
            countries: vec!["France".to_string()],
            start_date: NaiveDate::from_ymd_opt(2023, 1, 1),
            end_date: NaiveDate::from_ymd_opt(2023, 12, 31),
        };
        let response = get_overview(&source(), &request).await.unwrap();
        assert_eq!(response.record_count, 1);
        assert_eq!(response.profit.data[0].y, vec![40.0]);
        assert_eq!(response.quantity.data[0].y, vec![10.0]);
    }

    #[tokio::test]
    async fn test_empty_selection() {
        let request = OverviewRequest {
            countries: vec!["Japan".to_string()],
            ..Default::default()
        };
        let response = get_overview(&source(), &request).await.unwrap();
        assert_eq!(response.record_count, 0);
        assert!(response.sales.is_empty());
        assert!(response.ytd_vs_pytd.is_empty());
    }

    #[test]
    fn test_inverted_range_rejected() {
        let request = OverviewRequest {
            start_date: NaiveDate::from_ymd_opt(2024, 5, 1),
            end_date: NaiveDate::from_ymd_opt(2024, 4, 1),
            ..Default::default()
        };
        assert!(validate(&request).is_err());
        assert!(validate(&OverviewRequest::default()).is_ok());
    }
}

use anyhow::Result;
use chrono::Datelike;
use contracts::dashboards::d100_sales_performance::{
    FilterOptionsResponse, MetricOption, PerformanceRequest, PerformanceResponse, YtdSummary,
};
use contracts::enums::Metric;

use super::charts::{line_stacked_figure, waterfall_figure};
use crate::domain::a001_sales::{SalesFilter, SalesSource};
use crate::shared::aggregation::{compare_months, ytd_totals, YtdTotals};
use crate::shared::config::DashboardConfig;
use crate::shared::format::format_amount;

/// Title, YTD panel and both monthly charts for one year and metric
pub async fn get_performance(
    source: &dyn SalesSource,
    config: &DashboardConfig,
    request: PerformanceRequest,
) -> Result<PerformanceResponse> {
    let year = request.year;
    let metric = request.metric;

    // Selected year plus the one before it for PYTD
    let records = source
        .fetch_sales(&SalesFilter::for_years(year - 1, year))
        .await?;

    let months = compare_months(&records, year);
    let totals = ytd_totals(&months, metric);

    if months.is_empty() {
        tracing::info!("No sales recorded in {}, rendering empty charts", year);
    }

    Ok(PerformanceResponse {
        year,
        metric,
        title: dashboard_title(config, metric, year),
        summary: build_summary(&totals),
        waterfall: waterfall_figure(metric, &months),
        line_stacked: line_stacked_figure(metric, &months),
        months,
    })
}

pub fn dashboard_title(config: &DashboardConfig, metric: Metric, year: i32) -> String {
    format!("{} {} Performance {}", config.title_prefix, metric.label(), year)
}

fn build_summary(totals: &YtdTotals) -> YtdSummary {
    let text = format!(
        "YTD: {}, PYTD: {}, YTD vs PYTD: {} GP%: {:.2}%",
        format_amount(totals.ytd),
        format_amount(totals.pytd),
        format_amount(totals.ytd_vs_pytd),
        totals.gp_percentage
    );

    YtdSummary {
        ytd: totals.ytd,
        pytd: totals.pytd,
        ytd_vs_pytd: totals.ytd_vs_pytd,
        gp_percentage: totals.gp_percentage,
        text,
    }
}

/// Values for the year/metric selectors and the overview filters
pub async fn get_filter_options(
    source: &dyn SalesSource,
    config: &DashboardConfig,
) -> Result<FilterOptionsResponse> {
    let years = if config.years.is_empty() {
        source.sales_years().await?
    } else {
        config.years.clone()
    };

    let default_year = config
        .default_year
        .filter(|y| years.contains(y))
        .or_else(|| years.last().copied())
        .unwrap_or_else(|| chrono::Utc::now().date_naive().year());

    let products: Vec<String> = source
        .fetch_products()
        .await?
        .into_iter()
        .map(|p| p.product_name)
        .collect();

    let mut countries: Vec<String> = source
        .fetch_accounts()
        .await?
        .into_iter()
        .map(|a| a.country)
        .filter(|c| !c.is_empty())
        .collect();
    countries.sort();
    countries.dedup();

    let bounds = source.date_bounds().await?;

    Ok(FilterOptionsResponse {
        years,
        default_year,
        metrics: Metric::all().into_iter().map(MetricOption::from).collect(),
        products,
        countries,
        date_min: bounds.map(|(first, _)| first.format("%Y-%m-%d").to_string()),
        date_max: bounds.map(|(_, last)| last.format("%Y-%m-%d").to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_sales::testing::{sale, sale_of, InMemorySales};
    use contracts::shared::charts::AxisValue;

    fn sample_source() -> InMemorySales {
        InMemorySales::new(vec![
            sale(2023, 1, 100.0),
            sale(2023, 2, 200.0),
            sale(2023, 3, 150.0),
            sale(2024, 1, 120.0),
            sale(2024, 2, 180.0),
        ])
    }

    #[tokio::test]
    async fn test_current_year_comparison() {
        let source = sample_source();
        let config = DashboardConfig::default();
        let response = get_performance(
            &source,
            &config,
            PerformanceRequest {
                year: 2024,
                metric: Metric::Sales,
            },
        )
        .await
        .unwrap();

        assert_eq!(response.title, "Plant Co. Sales Performance 2024");
        assert_eq!(response.summary.ytd, 300.0);
        assert_eq!(response.summary.pytd, 300.0);
        assert_eq!(response.summary.ytd_vs_pytd, 0.0);
        assert_eq!(
            response.summary.text,
            "YTD: 300.00, PYTD: 300.00, YTD vs PYTD: 0.00 GP%: 40.00%"
        );
        assert_eq!(
            response.line_stacked.data[1].x,
            vec![AxisValue::Number(1.0), AxisValue::Number(2.0)]
        );
        assert_eq!(response.months.len(), 2);
    }

    #[tokio::test]
    async fn test_year_without_rows_renders_empty() {
        let source = sample_source();
        let response = get_performance(
            &source,
            &DashboardConfig::default(),
            PerformanceRequest {
                year: 2019,
                metric: Metric::GrossProfit,
            },
        )
        .await
        .unwrap();

        assert!(response.months.is_empty());
        assert!(response.waterfall.is_empty());
        assert!(response.line_stacked.is_empty());
        assert_eq!(response.summary.gp_percentage, 0.0);
        assert_eq!(response.title, "Plant Co. Gross Profit Performance 2019");
    }

    #[tokio::test]
    async fn test_filter_options_from_data() {
        let source = InMemorySales::new(vec![
            sale_of("Lavender", "France", 2023, 4, 10.0),
            sale_of("Hydrangea", "Canada", 2024, 2, 10.0),
            sale_of("Lavender", "Canada", 2024, 3, 10.0),
        ]);
        let options = get_filter_options(&source, &DashboardConfig::default())
            .await
            .unwrap();

        assert_eq!(options.years, vec![2023, 2024]);
        assert_eq!(options.default_year, 2024);
        assert_eq!(options.products, vec!["Hydrangea", "Lavender"]);
        assert_eq!(options.countries, vec!["Canada", "France"]);
        assert_eq!(options.metrics.len(), 3);
        assert_eq!(options.date_min.as_deref(), Some("2023-04-15"));
        assert_eq!(options.date_max.as_deref(), Some("2024-03-15"));
    }

    #[tokio::test]
    async fn test_configured_years_win() {
        let config = DashboardConfig {
            years: vec![2023, 2024],
            default_year: Some(2023),
            ..Default::default()
        };
        let options = get_filter_options(&sample_source(), &config).await.unwrap();
        assert_eq!(options.years, vec![2023, 2024]);
        assert_eq!(options.default_year, 2023);
    }
}

use anyhow::Result;
use async_trait::async_trait;
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use contracts::dashboards::d101_sales_overview::OverviewRequest;
use contracts::domain::a001_sales::{Account, Product, SalesRecord};

/// Row selection pushed down into the sales query
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalesFilter {
    /// Inclusive lower bound
    pub date_from: Option<NaiveDateTime>,
    /// Exclusive upper bound
    pub date_to: Option<NaiveDateTime>,
    pub products: Vec<String>,
    pub countries: Vec<String>,
}

impl SalesFilter {
    /// All rows whose timestamp falls in `first_year..=last_year`
    pub fn for_years(first_year: i32, last_year: i32) -> Self {
        Self {
            date_from: start_of_year(first_year),
            date_to: start_of_year(last_year + 1),
            ..Default::default()
        }
    }

    /// Filters chosen on the overview dashboard; `end_date` is inclusive
    pub fn from_overview(request: &OverviewRequest) -> Self {
        Self {
            date_from: request.start_date.and_then(|d| d.and_hms_opt(0, 0, 0)),
            date_to: request
                .end_date
                .and_then(|d| d.succ_opt())
                .and_then(|d| d.and_hms_opt(0, 0, 0)),
            products: request.products.clone(),
            countries: request.countries.clone(),
        }
    }

    pub fn matches(&self, record: &SalesRecord) -> bool {
        if let Some(from) = self.date_from {
            if record.date_time < from {
                return false;
            }
        }
        if let Some(to) = self.date_to {
            if record.date_time >= to {
                return false;
            }
        }
        if !self.products.is_empty() && !self.products.contains(&record.product_name) {
            return false;
        }
        if !self.countries.is_empty() && !self.countries.contains(&record.country) {
            return false;
        }
        true
    }
}

fn start_of_year(year: i32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, 1, 1).and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Read access to the sales star schema
#[async_trait]
pub trait SalesSource: Send + Sync {
    /// Joined fact rows, ordered by timestamp
    async fn fetch_sales(&self, filter: &SalesFilter) -> Result<Vec<SalesRecord>>;

    async fn fetch_products(&self) -> Result<Vec<Product>>;

    async fn fetch_accounts(&self) -> Result<Vec<Account>>;

    /// Earliest and latest sale date, `None` for an empty fact table
    async fn date_bounds(&self) -> Result<Option<(NaiveDate, NaiveDate)>>;

    /// Calendar years between the first and the last sale
    async fn sales_years(&self) -> Result<Vec<i32>> {
        Ok(match self.date_bounds().await? {
            Some((first, last)) => (first.year()..=last.year()).collect(),
            None => Vec::new(),
        })
    }
}


#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;

    #[test]
    fn test_year_filter_bounds() {
        let filter = SalesFilter::for_years(2023, 2024);
        assert!(filter.matches(&sale(2023, 1, 1.0)));
        assert!(filter.matches(&sale(2024, 12, 1.0)));
        assert!(!filter.matches(&sale(2022, 12, 1.0)));
        assert!(!filter.matches(&sale(2025, 1, 1.0)));
    }

    #[test]
    fn test_overview_end_date_is_inclusive() {
        let request = OverviewRequest {
            start_date: NaiveDate::from_ymd_opt(2024, 3, 15),
            end_date: NaiveDate::from_ymd_opt(2024, 3, 15),
            ..Default::default()
        };
        let filter = SalesFilter::from_overview(&request);
        assert!(filter.matches(&sale(2024, 3, 1.0)));
        assert!(!filter.matches(&sale(2024, 4, 1.0)));
    }

    #[test]
    fn test_dimension_filters() {
        let filter = SalesFilter {
            products: vec!["Lavender".to_string()],
            countries: vec!["Canada".to_string(), "France".to_string()],
            ..Default::default()
        };
        assert!(filter.matches(&sale_of("Lavender", "France", 2024, 1, 1.0)));
        assert!(!filter.matches(&sale_of("Lavender", "Germany", 2024, 1, 1.0)));
        assert!(!filter.matches(&sale_of("Hydrangea", "Canada", 2024, 1, 1.0)));
    }

    #[tokio::test]
    async fn test_sales_years_span_bounds() {
        let source = InMemorySales::new(vec![sale(2021, 5, 1.0), sale(2023, 2, 1.0)]);
        assert_eq!(source.sales_years().await.unwrap(), vec![2021, 2022, 2023]);
        assert!(InMemorySales::default().sales_years().await.unwrap().is_empty());
    }
}

use anyhow::Result;
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use contracts::domain::a001_sales::{Account, Product, SalesRecord};
use sea_orm::{ConnectionTrait, DatabaseConnection, FromQueryResult, Statement, Value};

use super::source::{SalesFilter, SalesSource};

/// Joined fact row as returned by the sales query
#[derive(Debug, Clone, FromQueryResult)]
struct SalesRow {
    product_id: i64,
    sales_usd: f64,
    quantity: f64,
    price_usd: f64,
    cogs_usd: f64,
    date_time: NaiveDateTime,
    account_name: String,
    country: String,
    product_name: String,
    product_type: String,
    gross_profit: f64,
}

impl From<SalesRow> for SalesRecord {
    fn from(r: SalesRow) -> Self {
        SalesRecord {
            product_id: r.product_id,
            sales_usd: r.sales_usd,
            quantity: r.quantity,
            price_usd: r.price_usd,
            cogs_usd: r.cogs_usd,
            date_time: r.date_time,
            account_name: r.account_name,
            country: r.country,
            product_name: r.product_name,
            product_type: r.product_type,
            gross_profit: r.gross_profit,
        }
    }
}

#[derive(Debug, FromQueryResult)]
struct ProductRow {
    product_id: i64,
    product_name: String,
    product_type: String,
}

#[derive(Debug, FromQueryResult)]
struct AccountRow {
    account_id: i64,
    account_name: String,
    country: String,
}

#[derive(Debug, FromQueryResult)]
struct DateBounds {
    first_sale: Option<NaiveDateTime>,
    last_sale: Option<NaiveDateTime>,
}

const SALES_QUERY: &str = r#"
    SELECT fs.product_id, fs.sales_usd, fs.quantity, fs.price_usd, fs.cogs_usd, fs.date_time,
           a.account_name, a.country, p.product_name, p.product_type,
           (fs.sales_usd - fs.cogs_usd) AS gross_profit
    FROM fact_sales fs
    JOIN accounts a ON fs.account_id = a.account_id
    JOIN product p ON fs.product_id = p.product_id
    WHERE 1 = 1
"#;

/// Builds the sales SELECT with the filter appended as bound parameters
fn build_sales_query(filter: &SalesFilter) -> (String, Vec<Value>) {
    let mut sql = String::from(SALES_QUERY);
    let mut params: Vec<Value> = Vec::new();

    if let Some(from) = filter.date_from {
        sql.push_str(" AND fs.date_time >= ?");
        params.push(from.into());
    }
    if let Some(to) = filter.date_to {
        sql.push_str(" AND fs.date_time < ?");
        params.push(to.into());
    }
    if !filter.products.is_empty() {
        let placeholders: Vec<&str> = filter.products.iter().map(|_| "?").collect();
        sql.push_str(&format!(" AND p.product_name IN ({})", placeholders.join(", ")));
        for p in &filter.products {
            params.push(p.clone().into());
        }
    }
    if !filter.countries.is_empty() {
        let placeholders: Vec<&str> = filter.countries.iter().map(|_| "?").collect();
        sql.push_str(&format!(" AND a.country IN ({})", placeholders.join(", ")));
        for c in &filter.countries {
            params.push(c.clone().into());
        }
    }

    sql.push_str(" ORDER BY fs.date_time, fs.id");
    (sql, params)
}

/// `SalesSource` backed by the relational store
#[derive(Debug, Clone)]
pub struct DbSalesSource {
    db: DatabaseConnection,
}

impl DbSalesSource {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SalesSource for DbSalesSource {
    async fn fetch_sales(&self, filter: &SalesFilter) -> Result<Vec<SalesRecord>> {
        let (sql, params) = build_sales_query(filter);
        let stmt = Statement::from_sql_and_values(self.db.get_database_backend(), &sql, params);

        let rows = SalesRow::find_by_statement(stmt).all(&self.db).await?;
        tracing::debug!("Fetched {} sales rows for {:?}", rows.len(), filter);

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn fetch_products(&self) -> Result<Vec<Product>> {
        let stmt = Statement::from_string(
            self.db.get_database_backend(),
            "SELECT product_id, product_name, product_type FROM product ORDER BY product_name"
                .to_string(),
        );
        let rows = ProductRow::find_by_statement(stmt).all(&self.db).await?;

        Ok(rows
            .into_iter()
            .map(|r| Product {
                product_id: r.product_id,
                product_name: r.product_name,
                product_type: r.product_type,
            })
            .collect())
    }

    async fn fetch_accounts(&self) -> Result<Vec<Account>> {
        let stmt = Statement::from_string(
            self.db.get_database_backend(),
            "SELECT account_id, account_name, country FROM accounts ORDER BY account_name"
                .to_string(),
        );
        let rows = AccountRow::find_by_statement(stmt).all(&self.db).await?;

        Ok(rows
            .into_iter()
            .map(|r| Account {
                account_id: r.account_id,
                account_name: r.account_name,
                country: r.country,
            })
            .collect())
    }

    async fn date_bounds(&self) -> Result<Option<(NaiveDate, NaiveDate)>> {
        let stmt = Statement::from_string(
            self.db.get_database_backend(),
            "SELECT MIN(date_time) AS first_sale, MAX(date_time) AS last_sale FROM fact_sales"
                .to_string(),
        );
        let bounds = DateBounds::find_by_statement(stmt).one(&self.db).await?;

        Ok(bounds.and_then(|b| match (b.first_sale, b.last_sale) {
            (Some(first), Some(last)) => Some((first.date(), last.date())),
            _ => None,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::memory_database;
    use crate::shared::data::seed::seed_demo_data;
    use chrono::Datelike;

    async fn seeded_source() -> DbSalesSource {
        let conn = memory_database().await;
        seed_demo_data(&conn).await.unwrap();
        DbSalesSource::new(conn)
    }

    #[test]
    fn test_query_placeholders_match_params() {
        let filter = SalesFilter {
            date_from: NaiveDate::from_ymd_opt(2024, 1, 1).and_then(|d| d.and_hms_opt(0, 0, 0)),
            date_to: None,
            products: vec!["Lavender".to_string(), "Hydrangea".to_string()],
            countries: vec!["France".to_string()],
        };
        let (sql, params) = build_sales_query(&filter);
        assert_eq!(sql.matches('?').count(), params.len());
        assert!(sql.contains("p.product_name IN (?, ?)"));
        assert!(sql.contains("a.country IN (?)"));
    }

    #[tokio::test]
    async fn test_fetch_sales_computes_gross_profit() {
        let source = seeded_source().await;
        let rows = source.fetch_sales(&SalesFilter::default()).await.unwrap();
        assert!(!rows.is_empty());
        for r in &rows {
            assert!((r.gross_profit - r.computed_gross_profit()).abs() < 1e-9);
        }
        assert!(rows.windows(2).all(|w| w[0].date_time <= w[1].date_time));
    }

    #[tokio::test]
    async fn test_fetch_sales_applies_filters() {
        let source = seeded_source().await;
        let filter = SalesFilter {
            countries: vec!["Germany".to_string()],
            products: vec!["Lavender".to_string()],
            ..SalesFilter::for_years(2024, 2024)
        };
        let rows = source.fetch_sales(&filter).await.unwrap();
        assert!(!rows.is_empty());
        assert!(rows.iter().all(|r| r.country == "Germany"
            && r.product_name == "Lavender"
            && r.date_time.year() == 2024));
    }

    #[tokio::test]
    async fn test_dimensions_and_bounds() {
        let source = seeded_source().await;
        assert_eq!(source.fetch_products().await.unwrap().len(), 6);
        assert_eq!(source.fetch_accounts().await.unwrap().len(), 8);

        let (first, last) = source.date_bounds().await.unwrap().unwrap();
        assert_eq!(first.year(), 2023);
        assert_eq!(last.year(), 2024);
        assert_eq!(source.sales_years().await.unwrap(), vec![2023, 2024]);
    }

    #[tokio::test]
    async fn test_performance_over_database_matches_row_sums() {
        use crate::dashboards::d100_sales_performance::service::get_performance;
        use crate::shared::config::DashboardConfig;
        use contracts::dashboards::d100_sales_performance::PerformanceRequest;
        use contracts::enums::Metric;

        let source = seeded_source().await;
        let rows = source.fetch_sales(&SalesFilter::default()).await.unwrap();
        let ytd: f64 = rows
            .iter()
            .filter(|r| r.date_time.year() == 2024)
            .map(|r| r.quantity)
            .sum();
        let pytd: f64 = rows
            .iter()
            .filter(|r| r.date_time.year() == 2023 && r.date_time.month() <= 8)
            .map(|r| r.quantity)
            .sum();

        let response = get_performance(
            &source,
            &DashboardConfig::default(),
            PerformanceRequest {
                year: 2024,
                metric: Metric::Quantity,
            },
        )
        .await
        .unwrap();
        assert_eq!(response.months.len(), 8);
        assert!((response.summary.ytd - ytd).abs() < 1e-6);
        assert!((response.summary.pytd - pytd).abs() < 1e-6);
    }

    #[tokio::test]
    async fn test_single_day_range_is_inclusive() {
        use contracts::dashboards::d101_sales_overview::OverviewRequest;

        let source = seeded_source().await;
        let all = source.fetch_sales(&SalesFilter::default()).await.unwrap();
        let day = all[0].date_time.date();

        let request = OverviewRequest {
            start_date: Some(day),
            end_date: Some(day),
            ..Default::default()
        };
        let rows = source
            .fetch_sales(&SalesFilter::from_overview(&request))
            .await
            .unwrap();
        assert!(!rows.is_empty());
        assert!(rows.iter().all(|r| r.date_time.date() == day));
    }

    #[tokio::test]
    async fn test_empty_table_has_no_bounds() {
        let source = DbSalesSource::new(memory_database().await);
        assert!(source.date_bounds().await.unwrap().is_none());
        assert!(source
            .fetch_sales(&SalesFilter::default())
            .await
            .unwrap()
            .is_empty());
    }
}

use chrono::{NaiveDate, NaiveDateTime};
use sea_orm::{
    ConnectionTrait, DatabaseConnection, DatabaseTransaction, DbBackend, FromQueryResult,
    Statement, TransactionTrait, Value,
};

/// (id, name, type, unit price)
const PRODUCTS: [(i64, &str, &str, f64); 6] = [
    (1, "Boston Fern", "Indoor", 18.5),
    (2, "Snake Plant", "Indoor", 24.0),
    (3, "Japanese Maple", "Outdoor", 89.0),
    (4, "Lavender", "Outdoor", 9.75),
    (5, "Hydrangea", "Landscape", 32.0),
    (6, "Boxwood Hedge", "Landscape", 45.5),
];

/// (id, name, country)
const ACCOUNTS: [(i64, &str, &str); 8] = [
    (1, "Green Thumb Nursery", "United States"),
    (2, "Maple Leaf Gardens", "Canada"),
    (3, "Kew Garden Supplies", "United Kingdom"),
    (4, "Blumenhaus Berlin", "Germany"),
    (5, "Jardin de Provence", "France"),
    (6, "Outback Botanicals", "Australia"),
    (7, "Pacific Plant Co-op", "United States"),
    (8, "Nordic Greenery", "Germany"),
];

/// Full prior year plus the first eight months of the current one
const SEED_PERIODS: [(i32, u32); 2] = [(2023, 12), (2024, 8)];

#[derive(Debug, FromQueryResult)]
struct RowCount {
    cnt: i64,
}

/// Insert the demo dataset when `fact_sales` is empty.
///
/// Dimension rows whose key is already taken are left as they are.
/// Returns the number of inserted fact rows (0 when data already exists).
pub async fn seed_demo_data(conn: &DatabaseConnection) -> anyhow::Result<usize> {
    let backend = conn.get_database_backend();
    let existing = RowCount::find_by_statement(Statement::from_string(
        backend,
        "SELECT COUNT(*) AS cnt FROM fact_sales".to_string(),
    ))
    .one(conn)
    .await?
    .map(|r| r.cnt)
    .unwrap_or(0);

    if existing > 0 {
        tracing::info!("fact_sales already holds {} rows, skipping demo data", existing);
        return Ok(0);
    }

    let txn = conn.begin().await?;

    for (id, name, product_type, _) in PRODUCTS {
        if key_exists(&txn, backend, "product", "product_id", id).await? {
            continue;
        }
        txn.execute(Statement::from_sql_and_values(
            backend,
            "INSERT INTO product (product_id, product_name, product_type) VALUES (?, ?, ?)",
            [id.into(), name.into(), product_type.into()],
        ))
        .await?;
    }

    for (id, name, country) in ACCOUNTS {
        if key_exists(&txn, backend, "accounts", "account_id", id).await? {
            continue;
        }
        txn.execute(Statement::from_sql_and_values(
            backend,
            "INSERT INTO accounts (account_id, account_name, country) VALUES (?, ?, ?)",
            [id.into(), name.into(), country.into()],
        ))
        .await?;
    }

    let rows = demo_sales_rows();
    for row in &rows {
        txn.execute(Statement::from_sql_and_values(
            backend,
            r#"
                INSERT INTO fact_sales
                    (id, product_id, account_id, sales_usd, quantity, price_usd, cogs_usd, date_time)
                VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
            row.values(),
        ))
        .await?;
    }

    txn.commit().await?;
    tracing::info!("Inserted demo dataset: {} sales rows", rows.len());
    Ok(rows.len())
}

async fn key_exists(
    txn: &DatabaseTransaction,
    backend: DbBackend,
    table: &str,
    key_column: &str,
    id: i64,
) -> anyhow::Result<bool> {
    let count = RowCount::find_by_statement(Statement::from_sql_and_values(
        backend,
        &format!("SELECT COUNT(*) AS cnt FROM {} WHERE {} = ?", table, key_column),
        [id.into()],
    ))
    .one(txn)
    .await?
    .map(|r| r.cnt)
    .unwrap_or(0);
    Ok(count > 0)
}

#[derive(Debug, Clone)]
struct DemoSale {
    id: i64,
    product_id: i64,
    account_id: i64,
    sales_usd: f64,
    quantity: f64,
    price_usd: f64,
    cogs_usd: f64,
    date_time: NaiveDateTime,
}

impl DemoSale {
    fn values(&self) -> Vec<Value> {
        vec![
            self.id.into(),
            self.product_id.into(),
            self.account_id.into(),
            self.sales_usd.into(),
            self.quantity.into(),
            self.price_usd.into(),
            self.cogs_usd.into(),
            self.date_time.into(),
        ]
    }
}

/// Deterministic pseudo-random sales; every product sells to a rotating
/// subset of accounts each month.
fn demo_sales_rows() -> Vec<DemoSale> {
    let mut rows = Vec::new();
    let mut id = 1;

    for (year, last_month) in SEED_PERIODS {
        let growth = if year == 2024 { 1.08 } else { 1.0 };
        for month in 1..=last_month {
            for (product_id, _, _, price) in PRODUCTS {
                for (account_id, _, _) in ACCOUNTS {
                    let mix = product_id * 7 + account_id * 3 + month as i64 * 5 + year as i64;
                    if mix % 3 == 0 {
                        continue;
                    }
                    let quantity = ((mix % 17) + 2) as f64;
                    let price_usd = round2(price * growth);
                    let sales_usd = round2(quantity * price_usd);
                    let cost_share = 0.52 + (product_id % 3) as f64 * 0.06;
                    let cogs_usd = round2(sales_usd * cost_share);
                    let day = (1 + (mix % 28)) as u32;

                    let Some(date_time) = NaiveDate::from_ymd_opt(year, month, day)
                        .and_then(|d| d.and_hms_opt(9 + (mix % 8) as u32, 0, 0))
                    else {
                        continue;
                    };

                    rows.push(DemoSale {
                        id,
                        product_id,
                        account_id,
                        sales_usd,
                        quantity,
                        price_usd,
                        cogs_usd,
                        date_time,
                    });
                    id += 1;
                }
            }
        }
    }

    rows
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::memory_database;
    use chrono::Datelike;

    #[test]
    fn test_demo_rows_cover_expected_months() {
        let rows = demo_sales_rows();
        assert!(!rows.is_empty());
        assert!(rows
            .iter()
            .all(|r| r.date_time.year() == 2023 || r.date_time.month() <= 8));
        for month in 1..=12 {
            assert!(rows
                .iter()
                .any(|r| r.date_time.year() == 2023 && r.date_time.month() == month));
        }
        assert!(rows.iter().all(|r| r.cogs_usd < r.sales_usd));
    }

    #[tokio::test]
    async fn test_seed_runs_once() {
        let conn = memory_database().await;
        let inserted = seed_demo_data(&conn).await.unwrap();
        assert_eq!(inserted, demo_sales_rows().len());

        let again = seed_demo_data(&conn).await.unwrap();
        assert_eq!(again, 0);
    }

    #[tokio::test]
    async fn test_seed_keeps_existing_dimension_rows() {
        let conn = memory_database().await;
        let backend = conn.get_database_backend();
        conn.execute(Statement::from_string(
            backend,
            "INSERT INTO product (product_id, product_name, product_type) VALUES (1, 'Fern', 'Indoor')"
                .to_string(),
        ))
        .await
        .unwrap();
        conn.execute(Statement::from_string(
            backend,
            "INSERT INTO accounts (account_id, account_name, country) VALUES (2, 'Local', 'Canada')"
                .to_string(),
        ))
        .await
        .unwrap();

        let inserted = seed_demo_data(&conn).await.unwrap();
        assert_eq!(inserted, demo_sales_rows().len());

        let products = RowCount::find_by_statement(Statement::from_string(
            backend,
            "SELECT COUNT(*) AS cnt FROM product".to_string(),
        ))
        .one(&conn)
        .await
        .unwrap()
        .unwrap();
        assert_eq!(products.cnt, PRODUCTS.len() as i64);

        let kept = RowCount::find_by_statement(Statement::from_string(
            backend,
            "SELECT COUNT(*) AS cnt FROM product WHERE product_name = 'Fern'".to_string(),
        ))
        .one(&conn)
        .await
        .unwrap()
        .unwrap();
        assert_eq!(kept.cnt, 1);
    }
}

use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};

use crate::shared::config::{get_database_url, Config};

/// Схема звезды: факт продаж и два справочника
const SCHEMA: [&str; 3] = [
    r#"
        CREATE TABLE IF NOT EXISTS accounts (
            account_id INTEGER PRIMARY KEY NOT NULL,
            account_name VARCHAR(255) NOT NULL,
            country VARCHAR(100) NOT NULL DEFAULT ''
        );
    "#,
    r#"
        CREATE TABLE IF NOT EXISTS product (
            product_id INTEGER PRIMARY KEY NOT NULL,
            product_name VARCHAR(255) NOT NULL,
            product_type VARCHAR(100) NOT NULL DEFAULT ''
        );
    "#,
    r#"
        CREATE TABLE IF NOT EXISTS fact_sales (
            id INTEGER PRIMARY KEY NOT NULL,
            product_id INTEGER NOT NULL REFERENCES product(product_id),
            account_id INTEGER NOT NULL REFERENCES accounts(account_id),
            sales_usd DOUBLE NOT NULL,
            quantity DOUBLE NOT NULL,
            price_usd DOUBLE NOT NULL,
            cogs_usd DOUBLE NOT NULL,
            date_time DATETIME NOT NULL
        );
    "#,
];

/// Connect using the configured URL and make sure the tables exist
pub async fn initialize_database(config: &Config) -> anyhow::Result<DatabaseConnection> {
    let db_url = get_database_url(config)?;
    let conn = connect(&db_url).await?;
    bootstrap_schema(&conn).await?;
    Ok(conn)
}

pub async fn connect(db_url: &str) -> anyhow::Result<DatabaseConnection> {
    let mut options = ConnectOptions::new(db_url.to_string());
    // Keep SQL statement logging quiet, the env filter handles the rest
    options.sqlx_logging(false);
    if db_url.starts_with("sqlite::memory:") {
        // every pooled connection would otherwise see its own empty database
        options.max_connections(1);
    }

    let conn = Database::connect(options).await?;
    tracing::info!("Connected to {:?} database", conn.get_database_backend());
    Ok(conn)
}

pub async fn bootstrap_schema(conn: &DatabaseConnection) -> anyhow::Result<()> {
    let backend = conn.get_database_backend();
    for sql in SCHEMA {
        conn.execute(Statement::from_string(backend, sql.to_string()))
            .await?;
    }
    Ok(())
}

#[cfg(test)]
pub async fn memory_database() -> DatabaseConnection {
    let conn = connect("sqlite::memory:").await.unwrap();
    bootstrap_schema(&conn).await.unwrap();
    conn
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bootstrap_is_idempotent() {
        let conn = memory_database().await;
        bootstrap_schema(&conn).await.unwrap();

        let rows = conn
            .query_all(Statement::from_string(
                conn.get_database_backend(),
                "SELECT name FROM sqlite_master WHERE type='table' ORDER BY name".to_string(),
            ))
            .await
            .unwrap();
        let names: Vec<String> = rows
            .iter()
            .map(|r| r.try_get::<String>("", "name").unwrap())
            .collect();
        assert_eq!(names, vec!["accounts", "fact_sales", "product"]);
    }
}

use chrono::{Datelike, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::enums::Metric;

// ============================================================================
// Fact row
// ============================================================================

/// One row of `fact_sales` joined with its account and product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub product_id: i64,
    pub sales_usd: f64,
    pub quantity: f64,
    pub price_usd: f64,
    pub cogs_usd: f64,
    pub date_time: NaiveDateTime,
    pub account_name: String,
    pub country: String,
    pub product_name: String,
    pub product_type: String,
    /// Computed by the query as `sales_usd - cogs_usd`
    pub gross_profit: f64,
}

impl SalesRecord {
    /// Gross profit recomputed from the raw columns
    pub fn computed_gross_profit(&self) -> f64 {
        self.sales_usd - self.cogs_usd
    }

    pub fn year(&self) -> i32 {
        self.date_time.year()
    }

    pub fn month(&self) -> u32 {
        self.date_time.month()
    }

    /// Value of the selected metric for this row
    pub fn metric(&self, metric: Metric) -> f64 {
        metric.pick(self.sales_usd, self.quantity, self.gross_profit)
    }
}

// ============================================================================
// Dimensions
// ============================================================================

/// Товар (справочник `product`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: i64,
    pub product_name: String,
    pub product_type: String,
}

/// Клиент (справочник `accounts`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub account_id: i64,
    pub account_name: String,
    pub country: String,
}

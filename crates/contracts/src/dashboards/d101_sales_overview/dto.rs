use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::charts::Figure;

/// Filters of the sales overview dashboard.
///
/// Empty lists mean "no filter" for that dimension.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverviewRequest {
    #[serde(default)]
    pub products: Vec<String>,
    #[serde(default)]
    pub countries: Vec<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

/// Five charts of the sales overview dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverviewResponse {
    pub sales: Figure,
    pub gross_profit_pct: Figure,
    pub quantity: Figure,
    pub profit: Figure,
    pub ytd_vs_pytd: Figure,
    /// Fact rows matched by the filters
    pub record_count: usize,
}

use serde::{Deserialize, Serialize};

use crate::enums::Metric;
use crate::shared::charts::Figure;
use crate::shared::period::PeriodTotals;

/// Request for the sales performance dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceRequest {
    pub year: i32,
    #[serde(default)]
    pub metric: Metric,
}

/// Response for the sales performance dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceResponse {
    pub year: i32,
    pub metric: Metric,
    /// e.g. "Plant Co. Sales Performance 2024"
    pub title: String,
    pub summary: YtdSummary,
    /// Months of the selected year that have data, with the prior-year values
    pub months: Vec<MonthComparison>,
    pub waterfall: Figure,
    pub line_stacked: Figure,
}

/// YTD / PYTD / GP% panel
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct YtdSummary {
    pub ytd: f64,
    pub pytd: f64,
    pub ytd_vs_pytd: f64,
    /// Percent of sales, 0 when there were no sales
    pub gp_percentage: f64,
    /// Preformatted text for the summary panel
    pub text: String,
}

/// One month of the selected year against the same month a year earlier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthComparison {
    pub month: u32,
    pub ytd: PeriodTotals,
    /// Zero-filled when the prior year has no rows for this month
    pub pytd: PeriodTotals,
}

impl MonthComparison {
    pub fn delta(&self, metric: Metric) -> f64 {
        self.ytd.metric(metric) - self.pytd.metric(metric)
    }
}

/// Selectable values for the dashboard controls
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterOptionsResponse {
    pub years: Vec<i32>,
    pub default_year: i32,
    pub metrics: Vec<MetricOption>,
    pub products: Vec<String>,
    pub countries: Vec<String>,
    /// Earliest sale date, "YYYY-MM-DD"
    pub date_min: Option<String>,
    /// Latest sale date, "YYYY-MM-DD"
    pub date_max: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricOption {
    pub code: String,
    pub label: String,
}

impl From<Metric> for MetricOption {
    fn from(m: Metric) -> Self {
        MetricOption {
            code: m.code().to_string(),
            label: m.label().to_string(),
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::domain::a001_sales::SalesRecord;
use crate::enums::Metric;

/// Summed values for one aggregation bucket (a month, a day, a year)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PeriodTotals {
    pub sales_usd: f64,
    pub quantity: f64,
    pub gross_profit: f64,
    pub cogs_usd: f64,
    /// Number of fact rows that fell into the bucket
    pub records: usize,
}

impl PeriodTotals {
    pub fn add(&mut self, record: &SalesRecord) {
        self.sales_usd += record.sales_usd;
        self.quantity += record.quantity;
        self.gross_profit += record.gross_profit;
        self.cogs_usd += record.cogs_usd;
        self.records += 1;
    }

    pub fn merge(&mut self, other: &PeriodTotals) {
        self.sales_usd += other.sales_usd;
        self.quantity += other.quantity;
        self.gross_profit += other.gross_profit;
        self.cogs_usd += other.cogs_usd;
        self.records += other.records;
    }

    pub fn metric(&self, metric: Metric) -> f64 {
        metric.pick(self.sales_usd, self.quantity, self.gross_profit)
    }

    pub fn is_empty(&self) -> bool {
        self.records == 0
    }
}

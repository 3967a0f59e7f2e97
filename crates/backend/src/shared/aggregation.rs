//! Grouped sums over sales records.
//!
//! Buckets only exist for periods that have at least one row; callers decide
//! how to treat absent periods (the comparison helpers zero-fill them).

use chrono::NaiveDate;
use contracts::dashboards::d100_sales_performance::MonthComparison;
use contracts::domain::a001_sales::SalesRecord;
use contracts::enums::Metric;
use contracts::shared::period::PeriodTotals;
use std::collections::BTreeMap;

/// Month -> totals for the given calendar year
pub fn group_by_month(records: &[SalesRecord], year: i32) -> BTreeMap<u32, PeriodTotals> {
    let mut months: BTreeMap<u32, PeriodTotals> = BTreeMap::new();
    for r in records.iter().filter(|r| r.year() == year) {
        months.entry(r.month()).or_default().add(r);
    }
    months
}

pub fn group_by_day(records: &[SalesRecord]) -> BTreeMap<NaiveDate, PeriodTotals> {
    let mut days: BTreeMap<NaiveDate, PeriodTotals> = BTreeMap::new();
    for r in records {
        days.entry(r.date_time.date()).or_default().add(r);
    }
    days
}

pub fn group_by_year(records: &[SalesRecord]) -> BTreeMap<i32, PeriodTotals> {
    let mut years: BTreeMap<i32, PeriodTotals> = BTreeMap::new();
    for r in records {
        years.entry(r.year()).or_default().add(r);
    }
    years
}

pub fn year_totals(records: &[SalesRecord], year: i32) -> PeriodTotals {
    let mut totals = PeriodTotals::default();
    for r in records.iter().filter(|r| r.year() == year) {
        totals.add(r);
    }
    totals
}

/// Months of `year` that have data, each paired with the same month of the
/// previous year. Prior-year months without rows come back as zero totals;
/// months missing from `year` are dropped, so an incomplete current year
/// never shows empty future months.
pub fn compare_months(records: &[SalesRecord], year: i32) -> Vec<MonthComparison> {
    let current = group_by_month(records, year);
    let previous = group_by_month(records, year - 1);

    current
        .into_iter()
        .map(|(month, ytd)| MonthComparison {
            month,
            ytd,
            pytd: previous.get(&month).copied().unwrap_or_default(),
        })
        .collect()
}

/// Year-to-date figures for one metric
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct YtdTotals {
    pub ytd: f64,
    pub pytd: f64,
    pub ytd_vs_pytd: f64,
    pub gp_percentage: f64,
}

/// Sums a month comparison into YTD, PYTD (same months only) and GP% of the
/// selected year.
pub fn ytd_totals(comparisons: &[MonthComparison], metric: Metric) -> YtdTotals {
    let mut ytd = PeriodTotals::default();
    let mut pytd = PeriodTotals::default();
    for c in comparisons {
        ytd.merge(&c.ytd);
        pytd.merge(&c.pytd);
    }

    let ytd_value = ytd.metric(metric);
    let pytd_value = pytd.metric(metric);

    YtdTotals {
        ytd: ytd_value,
        pytd: pytd_value,
        ytd_vs_pytd: ytd_value - pytd_value,
        gp_percentage: gross_profit_percentage(ytd.gross_profit, ytd.sales_usd),
    }
}

/// GP% = 100 * gross profit / sales, 0 when there were no sales
pub fn gross_profit_percentage(gross_profit: f64, sales_usd: f64) -> f64 {
    if sales_usd > 0.0 {
        gross_profit / sales_usd * 100.0
    } else {
        0.0
    }
}

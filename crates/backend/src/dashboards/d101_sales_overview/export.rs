use anyhow::Result;
use contracts::domain::a001_sales::SalesRecord;

use crate::shared::aggregation::{group_by_day, gross_profit_percentage};

const HEADERS: [&str; 7] = [
    "date",
    "sales_usd",
    "quantity",
    "gross_profit",
    "cogs_usd",
    "gp_percentage",
    "records",
];

/// Daily totals of the filtered rows as CSV
pub fn daily_totals_csv(records: &[SalesRecord]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(HEADERS)?;

    for (day, totals) in group_by_day(records) {
        writer.write_record([
            day.format("%Y-%m-%d").to_string(),
            format!("{:.2}", totals.sales_usd),
            format!("{}", totals.quantity),
            format!("{:.2}", totals.gross_profit),
            format!("{:.2}", totals.cogs_usd),
            format!(
                "{:.2}",
                gross_profit_percentage(totals.gross_profit, totals.sales_usd)
            ),
            totals.records.to_string(),
        ])?;
    }

    let bytes = writer.into_inner().map_err(|e| anyhow::anyhow!("{}", e))?;
    Ok(String::from_utf8(bytes)?)
}

use chrono::NaiveDate;
use contracts::shared::charts::{Axis, AxisValue, Figure, Layout, Trace, TraceKind};
use contracts::shared::period::PeriodTotals;
use std::collections::BTreeMap;

use crate::shared::aggregation::gross_profit_percentage;

fn date_axis(days: &BTreeMap<NaiveDate, PeriodTotals>) -> Vec<AxisValue> {
    days.keys()
        .map(|d| AxisValue::from(d.format("%Y-%m-%d").to_string()))
        .collect()
}

/// One series over time, one point per day with sales
fn time_series(
    days: &BTreeMap<NaiveDate, PeriodTotals>,
    kind: TraceKind,
    name: &str,
    title: &str,
    value: impl Fn(&PeriodTotals) -> f64,
) -> Figure {
    let mut trace = Trace::new(kind, name)
        .with_points(date_axis(days), days.values().map(value).collect());
    if kind == TraceKind::Scatter {
        trace = trace.with_mode("lines");
    }

    Figure {
        data: vec![trace],
        layout: Layout {
            title: title.into(),
            xaxis: Axis::titled("Date"),
            yaxis: Axis::titled(name),
            yaxis2: None,
        },
    }
}

pub fn sales_figure(days: &BTreeMap<NaiveDate, PeriodTotals>) -> Figure {
    time_series(days, TraceKind::Bar, "Sales", "Sales Over Time", |t| t.sales_usd)
}

pub fn gross_profit_pct_figure(days: &BTreeMap<NaiveDate, PeriodTotals>) -> Figure {
    time_series(
        days,
        TraceKind::Scatter,
        "GP%",
        "Gross Profit Percentage",
        |t| gross_profit_percentage(t.gross_profit, t.sales_usd),
    )
}

pub fn quantity_figure(days: &BTreeMap<NaiveDate, PeriodTotals>) -> Figure {
    time_series(days, TraceKind::Bar, "Quantity", "Quantity Sold", |t| t.quantity)
}

pub fn profit_figure(days: &BTreeMap<NaiveDate, PeriodTotals>) -> Figure {
    time_series(days, TraceKind::Bar, "Profit", "Profit Over Time", |t| {
        t.gross_profit
    })
}

/// Two bars: prior year (same months) and the latest year in the selection
pub fn ytd_vs_pytd_figure(year: Option<i32>, ytd: f64, pytd: f64) -> Figure {
    let (x, y) = match year {
        Some(year) => (
            vec![AxisValue::from(year - 1), AxisValue::from(year)],
            vec![pytd, ytd],
        ),
        None => (Vec::new(), Vec::new()),
    };

    Figure {
        data: vec![Trace::new(TraceKind::Bar, "YTD vs PYTD").with_points(x, y)],
        layout: Layout {
            title: "YTD vs PYTD Sales".into(),
            xaxis: Axis::titled("Year"),
            yaxis: Axis::titled("Sales"),
            yaxis2: None,
        },
    }
}

use contracts::dashboards::d100_sales_performance::MonthComparison;
use contracts::enums::Metric;
use contracts::shared::charts::{Axis, AxisValue, Figure, Layout, Trace, TraceKind};

use crate::shared::format::format_amount;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// X axis with all twelve months labelled by name
pub fn month_axis() -> Axis {
    Axis::titled("Month").with_ticks(
        (1..=12u32).map(AxisValue::from).collect(),
        MONTH_NAMES.iter().map(|m| m.to_string()).collect(),
    )
}

fn month_values(rows: &[MonthComparison]) -> Vec<AxisValue> {
    rows.iter().map(|r| AxisValue::from(r.month)).collect()
}

/// Per-month change against the previous year
pub fn waterfall_figure(metric: Metric, rows: &[MonthComparison]) -> Figure {
    let label = metric.label();
    let deltas: Vec<f64> = rows.iter().map(|r| r.delta(metric)).collect();
    let text: Vec<String> = deltas.iter().map(|v| format_amount(*v)).collect();

    let trace = Trace::new(TraceKind::Waterfall, format!("{} YTD vs PYTD", label))
        .with_points(month_values(rows), deltas)
        .with_text(text, "outside");

    Figure {
        data: vec![trace],
        layout: Layout {
            title: format!("{} YTD vs PYTD | Month", label).into(),
            xaxis: month_axis(),
            yaxis: Axis::titled(format!("{} YTD vs PYTD", label)),
            yaxis2: None,
        },
    }
}

/// Prior year as a line on the secondary axis over the current year's bars
pub fn line_stacked_figure(metric: Metric, rows: &[MonthComparison]) -> Figure {
    let label = metric.label();
    let pytd_label = format!("PYTD {}", label);

    let pytd: Vec<f64> = rows.iter().map(|r| r.pytd.metric(metric)).collect();
    let ytd: Vec<f64> = rows.iter().map(|r| r.ytd.metric(metric)).collect();
    let ytd_text: Vec<String> = ytd.iter().map(|v| format_amount(*v)).collect();

    let line = Trace::new(TraceKind::Scatter, pytd_label.clone())
        .with_points(month_values(rows), pytd)
        .with_mode("lines+markers")
        .on_axis("y2");

    let bars = Trace::new(TraceKind::Bar, label)
        .with_points(month_values(rows), ytd)
        .with_color("blue")
        .with_text(ytd_text, "outside");

    Figure {
        data: vec![line, bars],
        layout: Layout {
            title: format!("{} & {} | Month", label, pytd_label).into(),
            xaxis: month_axis(),
            yaxis: Axis::titled(label).on_side("left"),
            yaxis2: Some(Axis::titled(pytd_label).overlaying("y").on_side("right")),
        },
    }
}

//! Chart descriptors.
//!
//! The structures serialize to the `{"data": [...], "layout": {...}}` shape that
//! `Plotly.react` accepts, so the frontend passes them through untouched.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Values
// ---------------------------------------------------------------------------

/// A single x-axis (or tick) value: month number, year, or formatted date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AxisValue {
    Number(f64),
    Text(String),
}

impl From<u32> for AxisValue {
    fn from(v: u32) -> Self {
        AxisValue::Number(v as f64)
    }
}

impl From<i32> for AxisValue {
    fn from(v: i32) -> Self {
        AxisValue::Number(v as f64)
    }
}

impl From<&str> for AxisValue {
    fn from(v: &str) -> Self {
        AxisValue::Text(v.to_string())
    }
}

impl From<String> for AxisValue {
    fn from(v: String) -> Self {
        AxisValue::Text(v)
    }
}

/// Plotly trace type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceKind {
    Bar,
    Scatter,
    Waterfall,
}

// ---------------------------------------------------------------------------
// Series
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub color: String,
}

/// One data series of a figure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    pub x: Vec<AxisValue>,
    pub y: Vec<f64>,
    #[serde(rename = "type")]
    pub kind: TraceKind,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub textposition: Option<String>,
    /// Axis binding, e.g. `"y2"` for the secondary axis
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
}

impl Trace {
    pub fn new(kind: TraceKind, name: impl Into<String>) -> Self {
        Self {
            x: Vec::new(),
            y: Vec::new(),
            kind,
            name: name.into(),
            mode: None,
            text: None,
            textposition: None,
            yaxis: None,
            marker: None,
        }
    }

    pub fn with_points(mut self, x: Vec<AxisValue>, y: Vec<f64>) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Labels drawn next to each point
    pub fn with_text(mut self, text: Vec<String>, position: &str) -> Self {
        self.text = Some(text);
        self.textposition = Some(position.to_string());
        self
    }

    pub fn with_mode(mut self, mode: &str) -> Self {
        self.mode = Some(mode.to_string());
        self
    }

    pub fn on_axis(mut self, axis: &str) -> Self {
        self.yaxis = Some(axis.to_string());
        self
    }

    pub fn with_color(mut self, color: &str) -> Self {
        self.marker = Some(Marker {
            color: color.to_string(),
        });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Layout
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Title {
    pub text: String,
}

impl From<&str> for Title {
    fn from(v: &str) -> Self {
        Title {
            text: v.to_string(),
        }
    }
}

impl From<String> for Title {
    fn from(text: String) -> Self {
        Title { text }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tickvals: Option<Vec<AxisValue>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticktext: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub side: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overlaying: Option<String>,
}

impl Axis {
    pub fn titled(title: impl Into<Title>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub fn with_ticks(mut self, values: Vec<AxisValue>, text: Vec<String>) -> Self {
        self.tickvals = Some(values);
        self.ticktext = Some(text);
        self
    }

    pub fn on_side(mut self, side: &str) -> Self {
        self.side = Some(side.to_string());
        self
    }

    pub fn overlaying(mut self, axis: &str) -> Self {
        self.overlaying = Some(axis.to_string());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub title: Title,
    pub xaxis: Axis,
    pub yaxis: Axis,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yaxis2: Option<Axis>,
}

/// A complete chart: series plus layout
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl Figure {
    /// True when no trace carries any points
    pub fn is_empty(&self) -> bool {
        self.data.iter().all(Trace::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_trace_serializes_plotly_shape() {
        let trace = Trace::new(TraceKind::Scatter, "PYTD Sales")
            .with_points(vec![1u32.into(), 2u32.into()], vec![10.0, 20.0])
            .with_mode("lines+markers")
            .on_axis("y2");

        let value = serde_json::to_value(&trace).unwrap();
        assert_eq!(
            value,
            json!({
                "x": [1.0, 2.0],
                "y": [10.0, 20.0],
                "type": "scatter",
                "name": "PYTD Sales",
                "mode": "lines+markers",
                "yaxis": "y2"
            })
        );
    }

    #[test]
    fn test_axis_skips_unset_fields() {
        let axis = Axis::titled("Month").on_side("left");
        let value = serde_json::to_value(&axis).unwrap();
        assert_eq!(value, json!({"title": {"text": "Month"}, "side": "left"}));
    }

    #[test]
    fn test_text_axis_values() {
        let v: AxisValue = "2024-01-05".into();
        assert_eq!(serde_json::to_value(&v).unwrap(), json!("2024-01-05"));
    }

    #[test]
    fn test_empty_figure() {
        let figure = Figure {
            data: vec![Trace::new(TraceKind::Bar, "Sales")],
            layout: Layout::default(),
        };
        assert!(figure.is_empty());
    }
}

//! Figure object model
//!
//! Serializable description of a plot in the JSON shape plotly.js consumes
//! directly: `{ data: [trace, ...], layout: {...} }`. Equality is structural,
//! so two invocations of the update handler with the same selection produce
//! equal figures.

use serde::Serialize;

/// A complete chart figure: traces plus layout
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Figure {
    /// One trace per plotted series
    pub data: Vec<Trace>,
    /// Axes, titles, and presentation settings
    pub layout: Layout,
}

impl Figure {
    /// Create a figure with the given traces and layout
    pub fn new(data: Vec<Trace>, layout: Layout) -> Self {
        Self { data, layout }
    }

    /// Number of series in the figure
    pub fn trace_count(&self) -> usize {
        self.data.len()
    }

    /// Serialize to a plotly-compatible JSON value
    pub fn to_value(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

/// A single line series
///
/// `x` and `y` are parallel vectors; a `None` in `y` serializes as JSON
/// `null`, which the charting library renders as a gap in the line.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Trace {
    /// Plotly trace type, always "scatter" for line charts
    #[serde(rename = "type")]
    pub trace_type: String,
    /// Drawing mode, always "lines"
    pub mode: String,
    /// Series label shown in the legend
    pub name: String,
    /// Years, ascending
    pub x: Vec<i32>,
    /// Metric values, aligned with `x`
    pub y: Vec<Option<f64>>,
}

impl Trace {
    /// Create an empty line trace with the given series label
    pub fn line(name: impl Into<String>) -> Self {
        Self {
            trace_type: "scatter".to_string(),
            mode: "lines".to_string(),
            name: name.into(),
            x: Vec::new(),
            y: Vec::new(),
        }
    }

    /// Builder method: append one (year, value) point
    pub fn point(mut self, year: i32, value: Option<f64>) -> Self {
        self.x.push(year);
        self.y.push(value);
        self
    }

    /// Number of points in the series
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// True if the series has no points
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Figure layout: titles and axes
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Layout {
    /// Figure title, omitted when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    /// Horizontal axis
    pub xaxis: Axis,
    /// Vertical axis
    pub yaxis: Axis,
}

impl Layout {
    /// Create a layout with the given axis titles
    pub fn new(x_title: impl Into<String>, y_title: impl Into<String>) -> Self {
        Self {
            title: None,
            xaxis: Axis::titled(x_title),
            yaxis: Axis::titled(y_title),
        }
    }

    /// Builder method: set the figure title
    pub fn title(mut self, text: impl Into<String>) -> Self {
        self.title = Some(Title { text: text.into() });
        self
    }
}

/// A single axis
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Axis {
    /// Axis title
    pub title: Title,
}

impl Axis {
    /// Create an axis with the given title text
    pub fn titled(text: impl Into<String>) -> Self {
        Self {
            title: Title { text: text.into() },
        }
    }
}

/// Title wrapper in the `{ "text": ... }` shape plotly expects
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Title {
    pub text: String,
}

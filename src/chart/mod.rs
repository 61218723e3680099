//! Chart Figures
//!
//! This module owns the dashboard's single chart:
//!
//! - **figure**: Plotly-compatible figure object model (Figure, Trace, Layout)
//! - **line**: The reactive update handler: selection in, line chart out
//!
//! The server never renders pixels. It produces a [`Figure`], an in-memory
//! description of the plot (traces, axes, titles) that the browser-side
//! charting library renders without further computation.

pub mod figure;
pub mod line;

// Re-export commonly used types
pub use figure::{Axis, Figure, Layout, Title, Trace};
pub use line::coal_production_figure;

//! Chart-side data model for the xyplot plotting region.
//!
//! This crate owns everything the renderer consumes: axes with automatic
//! tick spacing, the ordered trace buffer, line/symbol styling, shape and
//! label primitives, and the world-to-screen transform. It contains no
//! rendering code; traces carry world-space coordinates only.

pub mod axis;
pub mod chart;
pub mod label;
pub mod shape;
pub mod style;
pub mod trace;
pub mod transform;

pub use axis::{Axis, AxisError, AxisLimits};
pub use chart::Chart;
pub use label::TextLabel;
pub use shape::{Shape, ShapeKind};
pub use style::{
    color_from_argb, color_from_name, default_line_color, DashStyle, LineStyle, PlotMethod,
    SymbolKind, SymbolStyle, DEFAULT_LINE_COLORS,
};
pub use trace::{Segment, Trace, TraceData};
pub use transform::{world_to_screen, PlotRect};

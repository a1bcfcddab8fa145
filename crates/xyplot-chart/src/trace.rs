//! Trace slots: one ordered data buffer per plotted expression.

use glam::DVec2;

use crate::label::TextLabel;
use crate::shape::Shape;
use crate::style::{LineStyle, PlotMethod, SymbolStyle};

/// One independent contour piece in world space. Segments are never
/// chained into polylines; the renderer draws them individually.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub p1: DVec2,
    pub p2: DVec2,
}

impl Segment {
    pub fn new(p1: DVec2, p2: DVec2) -> Self {
        Self { p1, p2 }
    }

    /// Degenerate interpolation can produce NaN or infinite endpoints;
    /// those segments are dropped at draw time, never reported as errors.
    pub fn is_finite(&self) -> bool {
        self.p1.x.is_finite()
            && self.p1.y.is_finite()
            && self.p2.x.is_finite()
            && self.p2.y.is_finite()
    }
}

/// The data payload of one trace slot.
#[derive(Debug, Clone, PartialEq)]
pub enum TraceData {
    /// Sampled or replicated (x, y) points, drawn connected.
    Points(Vec<DVec2>),
    /// Several independent polylines from one matrix expression.
    Polylines(Vec<Vec<DVec2>>),
    /// Independent line segments from contour extraction.
    Segments(Vec<Segment>),
    Labels(Vec<TextLabel>),
    Shapes(Vec<Shape>),
}

impl TraceData {
    /// The plot method matching this payload when no slot style exists yet.
    pub fn natural_plot_method(&self) -> PlotMethod {
        match self {
            TraceData::Points(_) | TraceData::Polylines(_) | TraceData::Segments(_) => {
                PlotMethod::Lines
            }
            TraceData::Labels(_) => PlotMethod::Labels,
            TraceData::Shapes(_) => PlotMethod::Shapes,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            TraceData::Points(items) => items.len(),
            TraceData::Polylines(items) => items.len(),
            TraceData::Segments(items) => items.len(),
            TraceData::Labels(items) => items.len(),
            TraceData::Shapes(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Same variant, no data.
    pub fn cleared(&self) -> TraceData {
        match self {
            TraceData::Points(_) => TraceData::Points(Vec::new()),
            TraceData::Polylines(_) => TraceData::Polylines(Vec::new()),
            TraceData::Segments(_) => TraceData::Segments(Vec::new()),
            TraceData::Labels(_) => TraceData::Labels(Vec::new()),
            TraceData::Shapes(_) => TraceData::Shapes(Vec::new()),
        }
    }
}

/// One trace slot. Data is replaced wholesale every evaluation pass while
/// the visual style of the slot survives.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    pub data: TraceData,
    pub line_style: LineStyle,
    pub symbol: SymbolStyle,
    pub name: Option<String>,
    pub on_y2: bool,
}

impl Trace {
    pub fn new(data: TraceData) -> Self {
        let line_style = LineStyle {
            plot_method: data.natural_plot_method(),
            ..LineStyle::default()
        };
        Self {
            data,
            line_style,
            symbol: SymbolStyle::default(),
            name: None,
            on_y2: false,
        }
    }

    /// Empties the data buffer but keeps the slot and its style.
    pub fn clear(&mut self) {
        self.data = self.data.cleared();
    }
}

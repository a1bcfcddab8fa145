//! The chart: axes, resolution setting and the ordered trace buffer.

use crate::axis::Axis;
use crate::style::{default_line_color, PlotMethod};
use crate::trace::{Trace, TraceData};

/// Chart state shared between evaluation passes and the renderer.
///
/// Axes and the resolution setting are session-scoped; the trace buffer is
/// replaced wholesale by every evaluation pass, preserving per-slot styles.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub y2_axis: Axis,
    /// Sample count for function traces; the implicit grid uses
    /// `points - 1` cells per axis.
    pub points: usize,
    traces: Vec<Trace>,
}

impl Default for Chart {
    fn default() -> Self {
        Self::new()
    }
}

impl Chart {
    pub fn new() -> Self {
        Self {
            x_axis: Axis::default(),
            y_axis: Axis::default(),
            y2_axis: Axis::default(),
            points: 100,
            traces: Vec::new(),
        }
    }

    pub fn traces(&self) -> &[Trace] {
        &self.traces
    }

    pub fn trace_mut(&mut self, index: usize) -> Option<&mut Trace> {
        self.traces.get_mut(index)
    }

    /// Fills trace slot `index` with fresh data.
    ///
    /// A new slot gets the default palette color for its index; an existing
    /// slot keeps its line style, symbol style, name and y2 binding, with
    /// the plot method forced to match the incoming data kind (label and
    /// shape payloads render only one way, and point-like payloads fall
    /// back to `Lines` unless the slot already draws lines or splines).
    pub fn put_trace(&mut self, index: usize, data: TraceData) {
        if index >= self.traces.len() {
            let mut trace = Trace::new(data);
            trace.line_style.color = default_line_color(index);
            self.traces.push(trace);
            return;
        }

        let previous = &self.traces[index];
        let mut trace = Trace::new(data);
        trace.line_style = previous.line_style.clone();
        trace.symbol = previous.symbol.clone();
        trace.name = previous.name.clone();
        trace.on_y2 = previous.on_y2;

        trace.line_style.plot_method = match &trace.data {
            TraceData::Segments(_) => PlotMethod::Lines,
            TraceData::Labels(_) => PlotMethod::Labels,
            TraceData::Shapes(_) => PlotMethod::Shapes,
            TraceData::Points(_) | TraceData::Polylines(_) => match trace.line_style.plot_method {
                PlotMethod::Lines | PlotMethod::Splines => trace.line_style.plot_method,
                _ => PlotMethod::Lines,
            },
        };

        self.traces[index] = trace;
    }

    /// Drops trace slots beyond `count` after an evaluation pass.
    pub fn truncate_traces(&mut self, count: usize) {
        self.traces.truncate(count);
    }

    /// Empties (but keeps) every slot from `start` on, for failed passes.
    pub fn clear_traces_from(&mut self, start: usize) {
        for trace in self.traces.iter_mut().skip(start) {
            trace.clear();
        }
    }
}

//! The plotting region: expression classification and the evaluation pass.

use glam::DVec2;
use log::warn;
use thiserror::Error;
use xyplot_chart::{Chart, TraceData};
use xyplot_values::{Bindings, Evaluator, Expr, Matrix, Value};

use crate::matrix_data;
use crate::{contour, sampler};

/// User-visible, non-fatal problem collected during an evaluation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub message: String,
    /// Source text of the expression the problem belongs to.
    pub source: Option<String>,
}

impl Diagnostic {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(message: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }
}

/// Policy violations that stop one expression from producing a trace.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegionError {
    #[error("too many unknowns")]
    TooManyUnknowns,
    #[error("pair ({0}, {1}) must have an explicit form")]
    ImplicitPairUnnamed(String, String),
    #[error("2-5 cols allowed")]
    MatrixShape,
}

/// One plotting region: a chart plus the machinery of the evaluation pass.
///
/// Every pass classifies the root expression by its free variables, fills
/// trace slots in order and finally prunes slots beyond the new count.
/// Passes are single-shot and deterministic; there is no retry and no
/// state shared between passes beyond the chart itself.
#[derive(Default)]
pub struct PlotRegion {
    pub chart: Chart,
    diagnostics: Vec<Diagnostic>,
    traces_count: usize,
}

impl PlotRegion {
    pub fn new() -> Self {
        Self {
            chart: Chart::new(),
            diagnostics: Vec::new(),
            traces_count: 0,
        }
    }

    /// Problems collected by the most recent evaluation pass.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Runs one evaluation pass for the region's root expression.
    pub fn evaluate(&mut self, oracle: &mut dyn Evaluator, expr: &Expr) {
        self.diagnostics.clear();
        self.traces_count = 0;

        match self.dispatch(oracle, expr) {
            Ok(()) => {
                let count = self.traces_count;
                self.chart.truncate_traces(count);
            }
            Err(err) => {
                let start = self.traces_count;
                self.chart.clear_traces_from(start);
                self.diagnostics
                    .push(Diagnostic::with_source(err.to_string(), expr.source()));
            }
        }
    }

    /// Classifies an expression by its free-variable count and routes it to
    /// the matching production path.
    fn dispatch(&mut self, oracle: &mut dyn Evaluator, expr: &Expr) -> Result<(), RegionError> {
        let free = expr.free_symbols(oracle);

        match free.len() {
            0 => self.add_constant(oracle, expr),
            1 => {
                self.add_function_trace(oracle, expr, &free[0]);
                Ok(())
            }
            2 => self.add_implicit_trace(oracle, expr, &free),
            _ => Err(RegionError::TooManyUnknowns),
        }
    }

    /// Fully bound expression: evaluate once and dispatch on the result
    /// kind.
    fn add_constant(&mut self, oracle: &mut dyn Evaluator, expr: &Expr) -> Result<(), RegionError> {
        match oracle.eval(expr, &Bindings::new()) {
            Ok(Value::System(subs)) => {
                self.add_system(oracle, &subs);
                Ok(())
            }
            Ok(Value::Matrix(mat)) => self.add_matrix_data(&mat, expr),
            Ok(Value::Num(value)) => {
                self.add_flat_line(value);
                Ok(())
            }
            // Text plots as nothing, but the slot is still claimed.
            Ok(Value::Str(_)) => {
                self.push_trace(TraceData::Points(Vec::new()));
                Ok(())
            }
            Ok(other) => {
                self.diag(format!("the type of result is {}", other.kind_name()), expr);
                self.push_trace(TraceData::Points(Vec::new()));
                Ok(())
            }
            Err(err) => {
                warn!("constant expression `{expr}` failed to evaluate: {err}");
                self.push_trace(TraceData::Points(Vec::new()));
                Ok(())
            }
        }
    }

    /// A scalar constant plots as a flat line sampled at the function
    /// resolution.
    fn add_flat_line(&mut self, value: f64) {
        let n = self.chart.points;
        let x_min = self.chart.x_axis.min as f64;
        let x_max = self.chart.x_axis.max as f64;
        let x_scale = (x_max - x_min) / (n - 1) as f64;

        let points = (0..n)
            .map(|i| DVec2::new(i as f64 * x_scale + x_min, value))
            .collect();
        self.push_trace(TraceData::Points(points));
    }

    /// Single free variable: sample at `points` evenly spaced positions
    /// across the x axis, both endpoints included. Failures and non-scalar
    /// results yield NaN points; the first non-scalar result raises one
    /// diagnostic for the expression.
    fn add_function_trace(&mut self, oracle: &mut dyn Evaluator, expr: &Expr, var: &str) {
        let n = self.chart.points;
        let x_min = self.chart.x_axis.min as f64;
        let x_max = self.chart.x_axis.max as f64;
        let x_scale = (x_max - x_min) / (n - 1) as f64;

        let mut reported = false;
        let mut points = Vec::with_capacity(n);

        for i in 0..n {
            let x = i as f64 * x_scale + x_min;
            let y = match oracle.eval(expr, &Bindings::single(var, x)) {
                Ok(Value::Num(v)) => v,
                Ok(Value::Str(_)) => f64::NAN,
                Ok(other) => {
                    if !reported {
                        self.diag(format!("the type of result is {}", other.kind_name()), expr);
                        reported = true;
                    }
                    f64::NAN
                }
                Err(_) => f64::NAN,
            };
            points.push(DVec2::new(x, y));
        }

        self.push_trace(TraceData::Points(points));
    }

    /// Two free variables: legal only when one is literally named `t` or
    /// `x` (`t` wins); that variable spans the x axis, the other the y
    /// axis, and the pair routes through grid sampling plus contour
    /// extraction at level 0.
    fn add_implicit_trace(
        &mut self,
        oracle: &mut dyn Evaluator,
        expr: &Expr,
        free: &[String],
    ) -> Result<(), RegionError> {
        let x_var = if free.iter().any(|v| v == "t") {
            "t"
        } else if free.iter().any(|v| v == "x") {
            "x"
        } else {
            return Err(RegionError::ImplicitPairUnnamed(
                free[0].clone(),
                free[1].clone(),
            ));
        };
        let y_var = free
            .iter()
            .find(|v| *v != x_var)
            .expect("two distinct free variables")
            .clone();

        let cells = self.chart.points - 1;
        let x_range = (self.chart.x_axis.min as f64, self.chart.x_axis.max as f64);
        let y_range = (self.chart.y_axis.min as f64, self.chart.y_axis.max as f64);

        let grid = sampler::sample_grid(
            oracle,
            expr,
            x_var,
            &y_var,
            x_range,
            y_range,
            cells,
            cells,
            &mut self.diagnostics,
        );

        let segments = contour::extract_segments(&grid, 0.0);
        self.push_trace(TraceData::Segments(segments));
        Ok(())
    }

    /// A system plots every sub-expression as its own trace; one failing
    /// sub-expression never aborts the others.
    fn add_system(&mut self, oracle: &mut dyn Evaluator, subs: &[Expr]) {
        for sub in subs {
            if let Err(err) = self.dispatch(oracle, sub) {
                self.diagnostics
                    .push(Diagnostic::with_source(err.to_string(), sub.source()));
            }
        }
    }

    /// Matrix results dispatch on their column count.
    fn add_matrix_data(&mut self, mat: &Matrix, expr: &Expr) -> Result<(), RegionError> {
        match mat.cols() {
            1 => {
                if let Some(Value::Matrix(inner)) = mat.get(0, 0) {
                    if inner.cols() == 1 {
                        let shapes = matrix_data::shapes(mat);
                        self.push_trace(TraceData::Shapes(shapes));
                    } else if inner.cols() == 2 {
                        let polylines = matrix_data::nested_polylines(mat);
                        self.push_trace(TraceData::Polylines(polylines));
                    }
                }
                Ok(())
            }
            2 => {
                let (points, complex_seen) = matrix_data::single_polyline(mat);
                if complex_seen {
                    self.diag("complex numbers not allowed", expr);
                }
                self.push_trace(TraceData::Polylines(vec![points]));
                Ok(())
            }
            3..=5 => {
                let labels = matrix_data::labels(mat);
                self.push_trace(TraceData::Labels(labels));
                Ok(())
            }
            _ => Err(RegionError::MatrixShape),
        }
    }

    /// Claims the next trace slot for this pass.
    fn push_trace(&mut self, data: TraceData) {
        let index = self.traces_count;
        self.traces_count += 1;
        self.chart.put_trace(index, data);
    }

    fn diag(&mut self, message: impl Into<String>, expr: &Expr) {
        self.diagnostics
            .push(Diagnostic::with_source(message, expr.source()));
    }
}

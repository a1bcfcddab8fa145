//! Plotting-region core: turns worksheet expressions into chart traces.
//!
//! One evaluation pass classifies an expression by its free variables,
//! samples or evaluates it through the host oracle, and fills the chart's
//! ordered trace buffer. Implicit two-variable expressions go through grid
//! sampling plus marching-squares contour extraction.

pub mod contour;
pub mod grid;
mod matrix_data;
pub mod region;
pub mod registry;
pub mod sampler;

pub use contour::extract_segments;
pub use grid::Grid;
pub use region::{Diagnostic, PlotRegion, RegionError};
pub use registry::{RegionId, RegionRegistry};
pub use sampler::sample_grid;

#[cfg(test)]
pub(crate) mod test_support {
    use std::collections::{HashMap, HashSet};

    use xyplot_values::{Bindings, EvalError, Evaluator, Expr, Value};

    type EvalFn = Box<dyn Fn(&Bindings) -> Result<Value, EvalError>>;

    /// Scriptable oracle: evaluation rules keyed by expression source.
    #[derive(Default)]
    pub struct TableOracle {
        defined: HashSet<String>,
        rules: HashMap<String, EvalFn>,
    }

    impl TableOracle {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn define(&mut self, symbol: &str) {
            self.defined.insert(symbol.to_string());
        }

        pub fn rule<F>(&mut self, source: &str, rule: F)
        where
            F: Fn(&Bindings) -> Result<Value, EvalError> + 'static,
        {
            self.rules.insert(source.to_string(), Box::new(rule));
        }
    }

    impl Evaluator for TableOracle {
        fn is_defined(&self, symbol: &str) -> bool {
            self.defined.contains(symbol)
        }

        fn eval(&mut self, expr: &Expr, bindings: &Bindings) -> Result<Value, EvalError> {
            match self.rules.get(expr.source()) {
                Some(rule) => rule(bindings),
                None => Err(EvalError::Failed(format!("no rule for `{expr}`"))),
            }
        }
    }
}

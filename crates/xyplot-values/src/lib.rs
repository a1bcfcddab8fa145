//! Typed values crossing the evaluation-oracle boundary.
//!
//! The worksheet's math engine is an external collaborator: the plotting
//! region hands it an expression plus variable bindings and receives a
//! tagged [`Value`] back. Everything the region needs is the
//! scalar/non-scalar discrimination and a numeric conversion; no exception
//! driven type branching happens on this side of the boundary.

use std::fmt;

use thiserror::Error;

mod matrix;

pub use matrix::Matrix;

/// A symbolic expression as handed over by the host worksheet.
///
/// The region never interprets the source text itself; it only inspects the
/// distinct symbols so the classifier can compute the free-variable set,
/// and passes the expression back to the oracle for evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expr {
    source: String,
    symbols: Vec<String>,
}

impl Expr {
    pub fn new<S, I, T>(source: S, symbols: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut seen = Vec::new();
        for symbol in symbols {
            let symbol = symbol.into();
            if !seen.contains(&symbol) {
                seen.push(symbol);
            }
        }
        Self {
            source: source.into(),
            symbols: seen,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Distinct symbols in order of first appearance.
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    /// Symbols the evaluation context has no definition for.
    pub fn free_symbols(&self, context: &dyn Evaluator) -> Vec<String> {
        self.symbols
            .iter()
            .filter(|symbol| !context.is_defined(symbol))
            .cloned()
            .collect()
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Tagged result of one oracle evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Real scalar.
    Num(f64),
    /// Text scalar.
    Str(String),
    /// Complex scalar; never plottable.
    Complex { re: f64, im: f64 },
    /// Rectangular cell matrix. Cells are values themselves so matrices can
    /// nest (shape lists, label columns).
    Matrix(Matrix),
    /// Aggregate of sub-expressions, each plotted as its own trace.
    System(Vec<Expr>),
}

impl Value {
    /// Numeric conversion for cells and scalars. Only real scalars convert.
    pub fn as_num(&self) -> Option<f64> {
        match self {
            Value::Num(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_matrix(&self) -> Option<&Matrix> {
        match self {
            Value::Matrix(m) => Some(m),
            _ => None,
        }
    }

    /// Human-readable tag used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Num(_) => "number",
            Value::Str(_) => "text",
            Value::Complex { .. } => "complex",
            Value::Matrix(_) => "matrix",
            Value::System(_) => "system",
        }
    }
}

/// Failure reported by the oracle for a single evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("symbol `{0}` is undefined")]
    Undefined(String),
    #[error("{0}")]
    Failed(String),
}

/// Shape violation while building a [`Matrix`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    #[error("matrix data length {len} doesn't match dimensions {rows}x{cols}")]
    MatrixShape {
        len: usize,
        rows: usize,
        cols: usize,
    },
}

/// Variable bindings for one evaluation call.
///
/// The region binds at most two variables per call, so a linear scan over a
/// small vector beats a map here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bindings {
    vars: Vec<(String, f64)>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(name: impl Into<String>, value: f64) -> Self {
        let mut bindings = Self::new();
        bindings.set(name, value);
        bindings
    }

    /// Replaces an existing binding for the same name.
    pub fn set(&mut self, name: impl Into<String>, value: f64) {
        let name = name.into();
        if let Some(slot) = self.vars.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = value;
        } else {
            self.vars.push((name, value));
        }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.vars
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| *v)
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

/// The host math engine, seen from the plotting region.
pub trait Evaluator {
    /// Whether the evaluation context defines `symbol` (variable or
    /// function). Symbols without a definition are the plot's free
    /// variables.
    fn is_defined(&self, symbol: &str) -> bool;

    /// Evaluate `expr` with the given bindings layered on top of the
    /// context.
    fn eval(&mut self, expr: &Expr, bindings: &Bindings) -> Result<Value, EvalError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NoDefs;

    impl Evaluator for NoDefs {
        fn is_defined(&self, _symbol: &str) -> bool {
            false
        }

        fn eval(&mut self, expr: &Expr, _bindings: &Bindings) -> Result<Value, EvalError> {
            Err(EvalError::Failed(format!("cannot evaluate {expr}")))
        }
    }

    #[test]
    fn expr_symbols_are_deduplicated_in_order() {
        let expr = Expr::new("x^2+x*y", ["x", "x", "y"]);
        assert_eq!(expr.symbols(), ["x".to_string(), "y".to_string()]);
    }

    #[test]
    fn free_symbols_exclude_defined_names() {
        struct OnlyA;
        impl Evaluator for OnlyA {
            fn is_defined(&self, symbol: &str) -> bool {
                symbol == "a"
            }
            fn eval(&mut self, _: &Expr, _: &Bindings) -> Result<Value, EvalError> {
                Ok(Value::Num(0.0))
            }
        }

        let expr = Expr::new("a*x+b", ["a", "x", "b"]);
        assert_eq!(expr.free_symbols(&OnlyA), ["x".to_string(), "b".to_string()]);
        assert_eq!(expr.free_symbols(&NoDefs).len(), 3);
    }

    #[test]
    fn only_real_scalars_convert_to_num() {
        assert_eq!(Value::Num(2.5).as_num(), Some(2.5));
        assert_eq!(Value::Str("2.5".into()).as_num(), None);
        assert_eq!(Value::Complex { re: 1.0, im: 2.0 }.as_num(), None);
    }

    #[test]
    fn bindings_overwrite_by_name() {
        let mut bindings = Bindings::single("x", 1.0);
        bindings.set("x", 3.0);
        bindings.set("y", 4.0);
        assert_eq!(bindings.get("x"), Some(3.0));
        assert_eq!(bindings.get("y"), Some(4.0));
        assert_eq!(bindings.get("z"), None);
    }
}

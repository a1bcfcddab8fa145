//! Grid sampling through the evaluation oracle.

use log::warn;
use xyplot_values::{Bindings, Evaluator, Expr, Value};

use crate::grid::Grid;
use crate::region::Diagnostic;

/// Evaluates a two-variable expression on a regular `(nx + 1) x (ny + 1)`
/// node grid, one oracle call per node. This is the dominant cost of an
/// implicit plot; nothing is cached across passes.
///
/// A node whose result is non-real or whose evaluation fails becomes NaN
/// and the pass continues. The first offending node raises one visible
/// diagnostic for the whole expression; the rest are only counted.
pub fn sample_grid(
    oracle: &mut dyn Evaluator,
    expr: &Expr,
    x_var: &str,
    y_var: &str,
    x_range: (f64, f64),
    y_range: (f64, f64),
    nx: usize,
    ny: usize,
    diagnostics: &mut Vec<Diagnostic>,
) -> Grid {
    let mut first_problem: Option<String> = None;
    let mut bad_nodes = 0usize;
    let mut bindings = Bindings::new();

    let grid = Grid::from_fn(x_range, y_range, nx, ny, |x, y| {
        bindings.set(x_var, x);
        bindings.set(y_var, y);

        match oracle.eval(expr, &bindings) {
            Ok(Value::Num(v)) => v,
            Ok(other) => {
                bad_nodes += 1;
                first_problem
                    .get_or_insert_with(|| format!("the type of result is {}", other.kind_name()));
                f64::NAN
            }
            Err(err) => {
                bad_nodes += 1;
                first_problem.get_or_insert_with(|| err.to_string());
                f64::NAN
            }
        }
    });

    if let Some(message) = first_problem {
        diagnostics.push(Diagnostic::with_source(message, expr.source()));
    }
    if bad_nodes > 0 {
        warn!(
            "{bad_nodes} of {} grid nodes for `{expr}` are undefined",
            (nx + 1) * (ny + 1)
        );
    }

    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::TableOracle;
    use xyplot_values::EvalError;

    fn expr() -> Expr {
        Expr::new("g(x,y)", ["x", "y"])
    }

    #[test]
    fn nodes_get_their_bound_coordinates() {
        let mut oracle = TableOracle::new();
        oracle.rule("g(x,y)", |b| {
            Ok(Value::Num(b.get("x").unwrap() + 10.0 * b.get("y").unwrap()))
        });

        let mut diagnostics = Vec::new();
        let grid = sample_grid(
            &mut oracle,
            &expr(),
            "x",
            "y",
            (0.0, 2.0),
            (0.0, 2.0),
            2,
            2,
            &mut diagnostics,
        );

        assert!(diagnostics.is_empty());
        assert_eq!(grid.value(1, 2), 21.0);
        assert_eq!(grid.value(2, 0), 2.0);
    }

    #[test]
    fn failing_nodes_become_nan_without_aborting() {
        let mut oracle = TableOracle::new();
        oracle.rule("g(x,y)", |b| {
            let x = b.get("x").unwrap();
            if x < 0.0 {
                Err(EvalError::Failed("left half plane".into()))
            } else {
                Ok(Value::Num(x))
            }
        });

        let mut diagnostics = Vec::new();
        let grid = sample_grid(
            &mut oracle,
            &expr(),
            "x",
            "y",
            (-1.0, 1.0),
            (0.0, 1.0),
            2,
            1,
            &mut diagnostics,
        );

        assert!(grid.value(0, 0).is_nan());
        assert_eq!(grid.value(1, 0), 0.0);
        assert_eq!(grid.value(2, 1), 1.0);
    }

    #[test]
    fn one_diagnostic_per_expression_not_per_node() {
        let mut oracle = TableOracle::new();
        oracle.rule("g(x,y)", |_| Ok(Value::Complex { re: 0.0, im: 1.0 }));

        let mut diagnostics = Vec::new();
        sample_grid(
            &mut oracle,
            &expr(),
            "x",
            "y",
            (0.0, 1.0),
            (0.0, 1.0),
            3,
            3,
            &mut diagnostics,
        );

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("complex"));
        assert_eq!(diagnostics[0].source.as_deref(), Some("g(x,y)"));
    }
}

//! Decoding of matrix results into trace payloads.
//!
//! Matrix expressions carry their plot kind structurally: plain numeric
//! columns become polylines, text columns make labels, nested one-column
//! matrices hold shape descriptions. Malformed rows and shape entries are
//! skipped, never fatal.

use glam::{DVec2, Vec4};
use xyplot_chart::{color_from_argb, color_from_name, DashStyle, Shape, ShapeKind, TextLabel};
use xyplot_values::{Matrix, Value};

/// Worksheet text cells may keep their quote delimiters.
fn trim_quotes(text: &str) -> &str {
    text.trim_matches('"')
}

/// Numeric view of a coordinate cell; non-real cells plot as NaN and get
/// filtered at draw time.
fn coord(mat: &Matrix, row: usize, col: usize) -> f64 {
    mat.num_at(row, col).unwrap_or(f64::NAN)
}

/// A color cell is either a name or a packed ARGB number.
fn color_cell(value: &Value) -> Option<Vec4> {
    match value {
        Value::Str(name) => color_from_name(trim_quotes(name)),
        Value::Num(bits) => Some(color_from_argb(*bits as i64 as u32)),
        _ => None,
    }
}

/// A 2-column matrix: one polyline, one row per point. Reports whether any
/// coordinate cell was complex so the caller can raise a diagnostic.
pub(crate) fn single_polyline(mat: &Matrix) -> (Vec<DVec2>, bool) {
    let mut points = Vec::with_capacity(mat.rows());
    let mut complex_seen = false;

    for row in 0..mat.rows() {
        for col in [0, 1] {
            if matches!(mat.get(row, col), Some(Value::Complex { .. })) {
                complex_seen = true;
            }
        }
        points.push(DVec2::new(coord(mat, row, 0), coord(mat, row, 1)));
    }

    (points, complex_seen)
}

/// A column of nested 2-column matrices: one polyline each. Cells that are
/// not matrices, and nested matrices of the wrong width, are skipped.
pub(crate) fn nested_polylines(mat: &Matrix) -> Vec<Vec<DVec2>> {
    let mut polylines = Vec::new();

    for row in 0..mat.rows() {
        let Some(Value::Matrix(inner)) = mat.get(row, 0) else {
            continue;
        };
        if inner.cols() != 2 {
            continue;
        }
        let points = (0..inner.rows())
            .map(|k| DVec2::new(coord(inner, k, 0), coord(inner, k, 1)))
            .collect();
        polylines.push(points);
    }

    polylines
}

/// Rows of (x, y, text[, size[, color]]). Rows with unreadable cells are
/// skipped, including an unknown color name.
pub(crate) fn labels(mat: &Matrix) -> Vec<TextLabel> {
    let mut labels = Vec::new();

    for row in 0..mat.rows() {
        let (Some(x), Some(y)) = (mat.num_at(row, 0), mat.num_at(row, 1)) else {
            continue;
        };
        let Some(Value::Str(text)) = mat.get(row, 2) else {
            continue;
        };
        let text = trim_quotes(text);
        if text.is_empty() {
            continue;
        }

        let mut label = TextLabel::new(text, DVec2::new(x, y));

        if mat.cols() > 3 {
            let Some(size) = mat.num_at(row, 3) else {
                continue;
            };
            label.size = size as f32;
            label.size_manual = true;

            if mat.cols() > 4 {
                let Some(color) = mat.get(row, 4).and_then(color_cell) else {
                    continue;
                };
                label.color = color;
                label.color_manual = true;
            }
        }

        labels.push(label);
    }

    labels
}

/// A column of nested shape-list matrices; every well-formed shape matrix
/// inside contributes one shape.
pub(crate) fn shapes(mat: &Matrix) -> Vec<Shape> {
    let mut shapes = Vec::new();

    for row in 0..mat.rows() {
        let Some(Value::Matrix(list)) = mat.get(row, 0) else {
            continue;
        };
        for k in 0..list.rows() {
            let Some(Value::Matrix(entry)) = list.get(k, 0) else {
                continue;
            };
            if let Some(shape) = build_shape(entry) {
                shapes.push(shape);
            }
        }
    }

    shapes
}

/// One shape matrix: kind name, geometry, then optional line color, dash
/// style, line width and fill color rows. Any malformed required cell
/// drops the whole shape.
fn build_shape(mat: &Matrix) -> Option<Shape> {
    if mat.rows() < 2 {
        return None;
    }

    let Some(Value::Str(name)) = mat.get(0, 0) else {
        return None;
    };
    let kind = ShapeKind::from_name(trim_quotes(name))?;

    let Some(Value::Matrix(data)) = mat.get(1, 0) else {
        return None;
    };

    let mut shape = Shape::new(kind, data.clone());

    if mat.rows() > 2 {
        let cell = mat.get(2, 0)?;
        if matches!(cell, Value::Matrix(_) | Value::System(_)) {
            return None;
        }
        // Unknown color names leave the color unset but still count as a
        // manual override.
        shape.line_color = color_cell(cell).unwrap_or(Vec4::ZERO);
        shape.line_color_manual = true;

        if mat.rows() > 3 {
            shape.line_dash = match mat.get(3, 0)? {
                Value::Str(text) => DashStyle::from_name(trim_quotes(text)).unwrap_or_default(),
                Value::Num(_) => DashStyle::Solid,
                _ => return None,
            };

            if mat.rows() > 4 {
                shape.line_width = mat.num_at(4, 0)? as f32;
                shape.line_width_manual = true;

                if mat.rows() > 5 {
                    let cell = mat.get(5, 0)?;
                    if matches!(cell, Value::Matrix(_) | Value::System(_)) {
                        return None;
                    }
                    shape.fill_color = color_cell(cell).unwrap_or(Vec4::ZERO);
                    shape.fill_color_manual = true;
                }
            }
        }
    }

    Some(shape)
}

//! Matrix-encoded drawing shapes.

use glam::Vec4;
use xyplot_values::Matrix;

use crate::style::DashStyle;

/// The closed set of shape kinds a shape matrix can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Line,
    Rectangle,
    RoundedRectangle,
    Circle,
    Ellipse,
    Arc,
    Polygon,
    Pie,
    Polyline,
    Spline,
    Bezier,
}

impl ShapeKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "line" => Some(Self::Line),
            "rect" => Some(Self::Rectangle),
            "roundrect" => Some(Self::RoundedRectangle),
            "circle" => Some(Self::Circle),
            "ellipse" => Some(Self::Ellipse),
            "arc" => Some(Self::Arc),
            "polygon" => Some(Self::Polygon),
            "pie" => Some(Self::Pie),
            "polyline" => Some(Self::Polyline),
            "spline" => Some(Self::Spline),
            "bezier" => Some(Self::Bezier),
            _ => None,
        }
    }
}

/// One drawable shape. The geometry matrix is interpreted per kind by the
/// renderer; the region only validates the envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub kind: ShapeKind,
    pub data: Matrix,
    pub line_dash: DashStyle,
    pub line_width: f32,
    pub line_color: Vec4,
    pub fill_color: Vec4,
    pub line_color_manual: bool,
    pub line_width_manual: bool,
    pub fill_color_manual: bool,
}

impl Shape {
    pub fn new(kind: ShapeKind, data: Matrix) -> Self {
        Self {
            kind,
            data,
            line_dash: DashStyle::Solid,
            line_width: 1.0,
            line_color: Vec4::new(0.0, 0.0, 0.0, 1.0),
            fill_color: Vec4::ZERO,
            line_color_manual: false,
            line_width_manual: false,
            fill_color_manual: false,
        }
    }
}

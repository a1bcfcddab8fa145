//! World-to-screen coordinate mapping.

use glam::{DVec2, Vec2};

use crate::axis::Axis;

/// The plot area in screen pixels. Screen y grows downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl PlotRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// Maps a world-space point into the plot rectangle, inverting y.
///
/// Out-of-range points map outside the rectangle; clipping is the
/// renderer's decision.
pub fn world_to_screen(point: DVec2, rect: &PlotRect, x_axis: &Axis, y_axis: &Axis) -> Vec2 {
    let x_span = x_axis.max as f64 - x_axis.min as f64;
    let y_span = y_axis.max as f64 - y_axis.min as f64;

    let sx = rect.left as f64 + (point.x - x_axis.min as f64) * rect.width as f64 / x_span;
    let sy = rect.bottom() as f64 - (point.y - y_axis.min as f64) * rect.height as f64 / y_span;

    Vec2::new(sx as f32, sy as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn axis(min: f32, max: f32) -> Axis {
        Axis {
            min,
            max,
            ..Axis::default()
        }
    }

    #[test]
    fn world_corners_map_to_rect_corners() {
        let rect = PlotRect::new(10.0, 20.0, 200.0, 100.0);
        let xa = axis(-1.0, 3.0);
        let ya = axis(0.0, 2.0);

        let bottom_left = world_to_screen(DVec2::new(-1.0, 0.0), &rect, &xa, &ya);
        assert_eq!(bottom_left, Vec2::new(10.0, 120.0));

        let top_right = world_to_screen(DVec2::new(3.0, 2.0), &rect, &xa, &ya);
        assert_eq!(top_right, Vec2::new(210.0, 20.0));
    }

    #[test]
    fn y_axis_is_inverted() {
        let rect = PlotRect::new(0.0, 0.0, 100.0, 100.0);
        let xa = axis(0.0, 1.0);
        let ya = axis(0.0, 1.0);

        let low = world_to_screen(DVec2::new(0.5, 0.25), &rect, &xa, &ya);
        let high = world_to_screen(DVec2::new(0.5, 0.75), &rect, &xa, &ya);
        assert!(high.y < low.y);
    }
}

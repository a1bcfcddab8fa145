//! Marching-squares contour extraction with centroid disambiguation.
//!
//! Cells are classified by a 4-bit corner code against the iso-level; the
//! two diagonal "saddle" codes are resolved with a fifth sample at the
//! cell centroid. Output is independent line segments in traversal order;
//! no polyline chaining happens here.

use glam::DVec2;
use xyplot_chart::Segment;

use crate::grid::Grid;

/// Per-configuration crossing flags; zero means the cell has no crossing.
const EDGE_TABLE: [u8; 16] = [0, 9, 3, 10, 6, 15, 5, 12, 12, 5, 15, 6, 10, 3, 9, 0];

/// Pairs of interpolated edge points forming segments, read downwards in
/// pairs per configuration column until -1.
const TRI_TABLE: [[i8; 16]; 5] = [
    [-1, 0, 0, 1, 1, 0, 0, 2, 2, 0, 0, 1, 1, 0, 0, 0],
    [-1, 3, 1, 3, 2, 3, 2, 3, 3, 2, 1, 2, 3, 1, 3, -1],
    [-1, -1, -1, -1, -1, 1, -1, -1, -1, -1, 2, -1, -1, -1, -1, -1],
    [-1, -1, -1, -1, -1, 2, -1, -1, -1, -1, 3, -1, -1, -1, -1, -1],
    [-1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1, -1],
];

/// Cell sample offsets in cell units: top-left, top-right, bottom-right,
/// bottom-left, centroid.
const SAMPLE_OFFSETS: [(f64, f64); 5] = [
    (0.0, 1.0),
    (1.0, 1.0),
    (1.0, 0.0),
    (0.0, 0.0),
    (0.5, 0.5),
];

/// Extracts the iso-line `f(x, y) = level` from a sampled grid as
/// independent world-space segments, cells visited x index outer, y index
/// inner, 0 to 2 segments per cell.
///
/// Degenerate interpolation (equal corner values, NaN corners) may produce
/// non-finite endpoints; those are filtered by the consumer via
/// [`Segment::is_finite`], never reported as errors here.
pub fn extract_segments(grid: &Grid, level: f64) -> Vec<Segment> {
    let mut segments = Vec::new();

    for n in 0..grid.nx() {
        for m in 0..grid.ny() {
            let values = cell_values(grid, n, m);
            let index = configuration_index(&values, level);

            if EDGE_TABLE[index] == 0 {
                continue;
            }

            let corners = cell_corners(grid, n, m);
            let crossings = edge_intersections(level, &corners, &values);

            let mut i = 0;
            while TRI_TABLE[i][index] >= 0 {
                let a = TRI_TABLE[i][index] as usize;
                let b = TRI_TABLE[i + 1][index] as usize;
                segments.push(Segment::new(crossings[a], crossings[b]));
                i += 2;
            }
        }
    }

    segments
}

/// The 4 corner samples of cell `(n, m)` in winding order plus their mean
/// as the centroid sample.
fn cell_values(grid: &Grid, n: usize, m: usize) -> [f64; 5] {
    let v0 = grid.value(n, m + 1);
    let v1 = grid.value(n + 1, m + 1);
    let v2 = grid.value(n + 1, m);
    let v3 = grid.value(n, m);
    [v0, v1, v2, v3, (v0 + v1 + v2 + v3) / 4.0]
}

fn cell_corners(grid: &Grid, n: usize, m: usize) -> [DVec2; 5] {
    let origin = DVec2::new(
        grid.dx() * n as f64 + grid.x_min(),
        grid.dy() * m as f64 + grid.y_min(),
    );
    SAMPLE_OFFSETS.map(|(cx, cy)| DVec2::new(origin.x + cx * grid.dx(), origin.y + cy * grid.dy()))
}

/// 4-bit corner code, bit k set iff `corner[k] < level`. The saddle codes
/// 5 and 10 are resolved by the centroid; the checks are ordered so that a
/// centroid exactly on the level fires neither branch and the corner-only
/// code stands.
fn configuration_index(values: &[f64; 5], level: f64) -> usize {
    let mut index = 0usize;
    for (k, value) in values[..4].iter().enumerate() {
        if *value < level {
            index |= 1 << k;
        }
    }

    if index == 10 {
        if values[4] < level {
            index = 5;
        }
    } else if index == 5 && values[4] < level {
        index = 10;
    }

    index
}

/// Linear interpolation along one cell edge. The denominator is left
/// alone: equal corner values yield non-finite output by design.
fn interpolate(level: f64, p1: DVec2, p2: DVec2, v1: f64, v2: f64) -> DVec2 {
    let t = (level - v1) / (v2 - v1);
    p1 + (p2 - p1) * t
}

/// Candidate crossing points on the four cell edges, in edge order
/// top, right, bottom, left.
fn edge_intersections(level: f64, corners: &[DVec2; 5], values: &[f64; 5]) -> [DVec2; 4] {
    [
        interpolate(level, corners[0], corners[1], values[0], values[1]),
        interpolate(level, corners[1], corners[2], values[1], values[2]),
        interpolate(level, corners[2], corners[3], values[2], values[3]),
        interpolate(level, corners[3], corners[0], values[3], values[0]),
    ]
}

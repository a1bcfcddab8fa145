//! Axis state and automatic tick spacing.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// If the tick step isn't specified, a suitable value of the form
/// `m * 10^e` is calculated automatically, with `m` from this set.
pub const MANTISSAS: [f64; 3] = [1.0, 2.0, 5.0];

/// Minimum physical spacing between large ticks, in pixels.
const MIN_PHYSICAL_LARGE_TICK_STEP: f64 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AxisError {
    #[error("world extent of axis not set")]
    ExtentUnset,
}

/// One chart axis. Session-scoped: mutated by drag/zoom interaction or
/// dialog edits and persisted across saves as the [`AxisLimits`] triple.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub visible: bool,
    pub min: f32,
    pub max: f32,
    pub tick: f32,
    pub decimal_places: u32,
}

impl Default for Axis {
    fn default() -> Self {
        Self {
            visible: true,
            min: -1.0,
            max: 1.0,
            tick: 0.5,
            decimal_places: 3,
        }
    }
}

impl Axis {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn limits(&self) -> AxisLimits {
        AxisLimits {
            min: self.min,
            max: self.max,
            tick: self.tick,
        }
    }

    pub fn apply_limits(&mut self, limits: AxisLimits) {
        self.min = limits.min;
        self.max = limits.max;
        self.tick = limits.tick;
    }

    /// Calculates the world spacing between large ticks from the physical
    /// axis length, the world range, the mantissa set and the minimum
    /// physical tick spacing.
    ///
    /// The returned flag is true when the spacing had to be shrunk below
    /// the physical minimum to fit at least two large ticks; callers
    /// should then draw only the outermost ticks.
    pub fn determine_large_tick_step(
        &self,
        physical_length: f32,
    ) -> Result<(f32, bool), AxisError> {
        if self.min.is_nan() || self.max.is_nan() {
            return Err(AxisError::ExtentUnset);
        }

        let physical_length = physical_length as f64;
        let range = (self.max as f64 - self.min as f64).abs();

        // Zero-length world axis: any step works, pick one.
        if range < f64::EPSILON * 1000.0 {
            return Ok((1.0, false));
        }

        let approx_step = MIN_PHYSICAL_LARGE_TICK_STEP / physical_length * range;

        let mut exponent = approx_step.log10().floor();
        let mantissa = 10f64.powf(approx_step.log10() - exponent);

        // Next whole mantissa below the approximate one.
        let mut mantissa_index = MANTISSAS.len() - 1;
        for i in 1..MANTISSAS.len() {
            if mantissa < MANTISSAS[i] {
                mantissa_index = i - 1;
                break;
            }
        }

        // Then the next largest spacing.
        mantissa_index += 1;
        if mantissa_index == MANTISSAS.len() {
            mantissa_index = 0;
            exponent += 1.0;
        }

        // Shrink until at least two large ticks fit on the axis.
        let mut tick_step = 10f64.powf(exponent) * MANTISSAS[mantissa_index];
        let mut physical_step = tick_step / range * physical_length;
        let mut cull_middle = false;

        while physical_step > physical_length / 2.0 {
            cull_middle = true;

            if mantissa_index == 0 {
                mantissa_index = MANTISSAS.len() - 1;
                exponent -= 1.0;
            } else {
                mantissa_index -= 1;
            }

            tick_step = 10f64.powf(exponent) * MANTISSAS[mantissa_index];
            physical_step = tick_step / range * physical_length;
        }

        Ok((tick_step as f32, cull_middle))
    }
}

/// The persisted slice of an axis: everything else is cosmetic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisLimits {
    pub min: f32,
    pub max: f32,
    pub tick: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_a_fresh_chart_axis() {
        let axis = Axis::default();
        assert!(axis.visible);
        assert_eq!(axis.min, -1.0);
        assert_eq!(axis.max, 1.0);
        assert_eq!(axis.tick, 0.5);
    }

    #[test]
    fn zero_range_returns_unit_step() {
        let axis = Axis {
            min: 2.0,
            max: 2.0,
            ..Axis::default()
        };
        let (step, cull) = axis.determine_large_tick_step(400.0).unwrap();
        assert_eq!(step, 1.0);
        assert!(!cull);
    }

    #[test]
    fn nan_extent_is_an_error() {
        let axis = Axis {
            min: f32::NAN,
            ..Axis::default()
        };
        assert_eq!(
            axis.determine_large_tick_step(400.0),
            Err(AxisError::ExtentUnset)
        );
    }

    fn assert_nice_mantissa(step: f64) {
        let exponent = step.log10().floor();
        let mantissa = step / 10f64.powf(exponent);
        let nice = MANTISSAS
            .iter()
            .any(|&m| (mantissa - m).abs() < 1e-6 * m);
        assert!(nice, "step {step} has mantissa {mantissa}, expected 1, 2 or 5");
    }

    #[test]
    fn step_is_always_a_nice_mantissa_and_fits_twice() {
        let lengths = [80.0f32, 150.0, 300.0, 641.0, 1920.0];
        let ranges = [
            (-1.0f32, 1.0f32),
            (0.0, 0.001),
            (-250.0, 775.0),
            (1e-6, 3.3e-6),
            (-4.0e7, 2.9e8),
        ];

        for &physical in &lengths {
            for &(min, max) in &ranges {
                let axis = Axis {
                    min,
                    max,
                    ..Axis::default()
                };
                let (step, _) = axis.determine_large_tick_step(physical).unwrap();
                assert!(step > 0.0);
                assert_nice_mantissa(step as f64);

                let range = (max as f64 - min as f64).abs();
                let physical_step = step as f64 / range * physical as f64;
                assert!(
                    physical_step <= physical as f64 / 2.0 * (1.0 + 1e-6),
                    "physical step {physical_step} exceeds half of {physical}"
                );
            }
        }
    }

    #[test]
    fn narrow_panels_set_the_cull_flag() {
        // 70 px can never fit two 60 px spaced ticks without shrinking.
        let axis = Axis {
            min: 0.0,
            max: 10.0,
            ..Axis::default()
        };
        let (step, cull) = axis.determine_large_tick_step(70.0).unwrap();
        assert!(cull);
        let physical_step = step as f64 / 10.0 * 70.0;
        assert!(physical_step <= 35.0 + 1e-6);
    }

    #[test]
    fn wide_panels_keep_all_ticks() {
        let axis = Axis {
            min: 0.0,
            max: 10.0,
            ..Axis::default()
        };
        let (_, cull) = axis.determine_large_tick_step(800.0).unwrap();
        assert!(!cull);
    }

    #[test]
    fn limits_round_trip_through_json() {
        let axis = Axis {
            min: -2.5,
            max: 7.25,
            tick: 0.25,
            ..Axis::default()
        };
        let json = serde_json::to_string(&axis.limits()).unwrap();
        let restored: AxisLimits = serde_json::from_str(&json).unwrap();

        let mut other = Axis::default();
        other.apply_limits(restored);
        assert_eq!(other.min, -2.5);
        assert_eq!(other.max, 7.25);
        assert_eq!(other.tick, 0.25);
    }
}

use std::ops::Range;

use crate::SurfaceError;

/// Upper bound on the number of values of a single axis.
pub const MAX_AXIS_VALUES: usize = 100_000;

/// Evenly spaced values within the half-open interval `[start, end[`.
///
/// Values are generated as `start + i * step`, and the number of values is
/// `ceil((end - start) / step)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Axis {
    start: f64,
    end  : f64,
    step : f64,
}

impl Axis {
    /// # Errors
    /// - `InvalidStep` if `step` is non-finite, zero or negative.
    /// - `EmptyAxis` if `[start, end[` does not contain a single value.
    /// - `TooManyValues` if `[start, end[` holds more than [`MAX_AXIS_VALUES`] values.
    pub fn new(start: f64, end: f64, step: f64) -> Result<Self, SurfaceError> {
        if !(step.is_finite() && step > 0.0) {
            return Err(SurfaceError::InvalidStep(step))
        }

        if !(start.is_finite() && end.is_finite() && start < end) {
            return Err(SurfaceError::EmptyAxis{start, end})
        }

        let count = ((end - start) / step).ceil();
        if count > MAX_AXIS_VALUES as f64 {
            return Err(SurfaceError::TooManyValues{start, end, step, count, max: MAX_AXIS_VALUES})
        }
        Ok(Self{start, end, step})
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn len(&self) -> usize {
        ((self.end - self.start) / self.step).ceil() as usize
    }

    /// Always false: construction guarantees at least one value.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len()).map(|i| self.start + i as f64 * self.step)
    }

    /// Bounds of this axis, as displayed on a chart.
    pub fn range(&self) -> Range<f64> {
        self.start..self.end
    }
}

use std::ops::Range;

use indicatif::ProgressBar;
use log::trace;

use crate::{Axis, SurfaceError};

/// Upper bound on the number of values held by a single grid.
pub const MAX_GRID_VALUES: usize = 1 << 24;

/// Values of a scalar function `f(x, y)`, sampled over every `(x, y)` pair of two axes.
///
/// Values are stored row-major: one row per `y` value.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceGrid {
    x     : Axis,
    y     : Axis,
    values: Vec<f64>,
}

impl SurfaceGrid {
    /// Evaluate `f` element-wise over `x` and `y`. `progress` is incremented once per row.
    ///
    /// # Errors
    /// `GridTooLarge` if `x` and `y` span more than [`MAX_GRID_VALUES`] pairs.
    pub fn evaluate<F>(x: Axis, y: Axis, f: F, progress: &ProgressBar) -> Result<Self, SurfaceError>
    where
        F: Fn(f64, f64) -> f64,
    {
        let (x_len, y_len) = (x.len(), y.len());
        let size = x_len.checked_mul(y_len)
            .filter(|size| *size <= MAX_GRID_VALUES)
            .ok_or(SurfaceError::GridTooLarge{x_len, y_len, max: MAX_GRID_VALUES})?;

        trace!("Evaluating a {x_len}x{y_len} grid");
        let mut values = Vec::with_capacity(size);
        for yval in y.values() {
            values.extend(x.values().map(|xval| f(xval, yval)));
            progress.inc(1);
        }
        Ok(Self{x, y, values})
    }

    pub fn x(&self) -> &Axis {
        &self.x
    }

    pub fn y(&self) -> &Axis {
        &self.y
    }

    /// Value at the `i`-th x value and `j`-th y value.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i >= self.x.len() {
            return None
        }
        self.values.get(j * self.x.len() + i).copied()
    }

    /// Lowest and highest finite values of this grid. `None` if every value is NaN or infinite.
    pub fn finite_range(&self) -> Option<Range<f64>> {
        self.values.iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None                    => Some(v..v),
                Some(Range{start, end}) => Some(start.min(v)..end.max(v)),
            })
    }

    /// Iterate over every grid cell, as its four corners `(x, y, value)`, in drawing order.
    pub fn cells(&self) -> impl Iterator<Item = [(f64, f64, f64); 4]> + '_ {
        let xs: Vec<f64> = self.x.values().collect();
        let ys: Vec<f64> = self.y.values().collect();
        let (nx, ny) = (xs.len(), ys.len());

        (0..ny.saturating_sub(1)).flat_map(move |j| (0..nx.saturating_sub(1)).map(move |i| (i, j)))
            .map(move |(i, j)| {
                let corner = |i: usize, j: usize| (xs[i], ys[j], self.values[j * nx + i]);
                [corner(i, j), corner(i + 1, j), corner(i + 1, j + 1), corner(i, j + 1)]
            })
    }
}

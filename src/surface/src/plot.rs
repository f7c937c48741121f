use std::{ops::Range, path::Path};

use anyhow::{Context, Result};
use log::{debug, info};
use plotters::prelude::*;

use crate::{ColorMap, SurfaceError, SurfaceGrid};

const DEFAULT_SIZE: (u32, u32) = (1280, 960);
const Z_LABELS    : usize      = 10;

/// One surface of a 3D plot, shaded with its own colormap.
#[derive(Debug, Clone)]
pub struct SurfaceLayer {
    pub label   : String,
    pub grid    : SurfaceGrid,
    pub colormap: ColorMap,
}

/// A set of probability surfaces sharing the same axes.
///
/// - `x_desc` and `y_desc` describe the two grid axes, which are drawn on the horizontal plane.
/// - `z_desc` describes the evaluated values, which are drawn vertically.
/// - `z_limits`: fixed vertical bounds. When `None`, bounds are fitted to the data.
#[derive(Debug, Clone)]
pub struct SurfacePlot {
    pub title   : String,
    pub x_desc  : String,
    pub y_desc  : String,
    pub z_desc  : String,
    pub z_limits: Option<Range<f64>>,
    pub size    : (u32, u32),
    layers      : Vec<SurfaceLayer>,
}

impl SurfacePlot {
    pub fn new(title: &str, x_desc: &str, y_desc: &str, z_desc: &str) -> Self {
        Self {
            title   : title.to_string(),
            x_desc  : x_desc.to_string(),
            y_desc  : y_desc.to_string(),
            z_desc  : z_desc.to_string(),
            z_limits: None,
            size    : DEFAULT_SIZE,
            layers  : Vec::new(),
        }
    }

    #[must_use]
    pub fn z_limits(mut self, limits: Range<f64>) -> Self {
        self.z_limits = Some(limits);
        self
    }

    pub fn push_layer(&mut self, layer: SurfaceLayer) {
        self.layers.push(layer);
    }

    pub fn layers(&self) -> &[SurfaceLayer] {
        &self.layers
    }

    /// Vertical bounds of this plot: `self.z_limits` if set, or the finite range of every layer.
    ///
    /// # Errors
    /// - `NoLayer` if this plot is empty.
    /// - `NoFiniteValue` if none of the layers contain a single finite value.
    pub fn z_range(&self) -> Result<Range<f64>, SurfaceError> {
        if self.layers.is_empty() {
            return Err(SurfaceError::NoLayer(self.title.clone()))
        }

        if let Some(limits) = &self.z_limits {
            return Ok(limits.clone())
        }

        let Range{start, end} = self.layers.iter()
            .filter_map(|layer| layer.grid.finite_range())
            .reduce(|acc, range| acc.start.min(range.start)..acc.end.max(range.end))
            .ok_or_else(|| SurfaceError::NoFiniteValue(self.title.clone()))?;

        // Flat surface: widen the range to keep a drawable vertical axis.
        match end > start {
            true  => Ok(start..end),
            false => Ok(start - 0.5..end + 0.5),
        }
    }

    /// Horizontal bounds spanning every layer, along the x and y axes.
    fn xy_ranges(&self) -> (Range<f64>, Range<f64>) {
        let union = |a: Range<f64>, b: Range<f64>| a.start.min(b.start)..a.end.max(b.end);
        let mut layers = self.layers.iter();
        let first = layers.next().map(|l| (l.grid.x().range(), l.grid.y().range())).unwrap_or((0.0..1.0, 0.0..1.0));
        layers.fold(first, |(x, y), layer| (union(x, layer.grid.x().range()), union(y, layer.grid.y().range())))
    }

    /// Render every layer of this plot into an `.svg` file.
    ///
    /// # Errors
    /// - if this plot is empty or does not contain any finite value (see [`Self::z_range`])
    /// - if any drawing operation fails, or if `path` cannot be written.
    pub fn render_svg(&self, path: &Path) -> Result<()> {
        let z_range = self.z_range()?;
        let (x_range, y_range) = self.xy_ranges();
        debug!("Rendering '{}' - x: {x_range:?} y: {y_range:?} z: {z_range:?}", self.title);

        let root = SVGBackend::new(path, self.size).into_drawing_area();
        root.fill(&WHITE)?;

        // Grid axes lie on the horizontal plane (x, z). Values are drawn along the vertical (y) axis.
        let mut chart = ChartBuilder::on(&root)
            .caption(&self.title, ("sans-serif", 28))
            .margin(30)
            .build_cartesian_3d(x_range, z_range.clone(), y_range)?;

        chart.with_projection(|mut pb| {
            pb.pitch = 0.6;
            pb.yaw   = 0.7;
            pb.scale = 0.8;
            pb.into_matrix()
        });

        let z_formatter = |v: &f64| format!("{v:.3}");
        chart.configure_axes()
            .light_grid_style(BLACK.mix(0.1))
            .max_light_lines(3)
            .y_labels(Z_LABELS)
            .y_formatter(&z_formatter)
            .draw()?;

        for layer in &self.layers {
            let SurfaceLayer{label, grid, colormap} = layer;
            let (lo, hi) = (z_range.start, z_range.end);
            let polygons = grid.cells()
                .filter(|cell| cell.iter().all(|(_, _, v)| v.is_finite()))
                .map(|cell| {
                    let mean = cell.iter().map(|(_, _, v)| v).sum::<f64>() / 4.0;
                    let points = cell.iter().map(|&(x, y, v)| (x, v, y)).collect::<Vec<_>>();
                    Polygon::new(points, colormap.color(mean, lo, hi).filled())
                });

            let swatch = colormap.swatch();
            chart.draw_series(polygons)?
                .label(label.as_str())
                .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], swatch.filled()));
        }

        chart.configure_series_labels()
            .border_style(BLACK)
            .background_style(WHITE.mix(0.8))
            .draw()?;

        let (_, height) = self.size;
        let axes = format!("x: {}  |  y: {}  |  z: {}", self.x_desc, self.y_desc, self.z_desc);
        root.draw(&Text::new(axes, (30, height as i32 - 40), ("sans-serif", 18).into_font()))?;

        root.present()
            .with_context(|| format!("Failed to write surface plot into {}", path.display()))?;
        info!("Surface plot written into {}", path.display());
        Ok(())
    }
}

//! Predefined attainment-probability figures.

use indicatif::ProgressBar;
use inheritance::{Genders, InheritanceModel};
use log::info;

use crate::{Axis, ColorMap, SurfaceError, SurfaceGrid, SurfaceLayer, SurfacePlot};

// ---- Grid bounds, following the half-open [start, end[ convention of `Axis`.
const IQ_RANGE         : (f64, f64) = (100.0, 180.0);
const RARITY_IQ_RANGE  : (f64, f64) = (70.0, 180.0);
const KIDS_RANGE       : (f64, f64) = (0.0, 10.0);
const KID_LAYERS       : std::ops::RangeInclusive<u32> = 1..=5;
const FIXED_TARGET_IQ  : f64 = 145.0;

const PROBABILITY: &str = "Attainment probability";

/// Surface figures of a given model, sampled every `iq_step` IQ points and every `kids_step`
/// children.
#[derive(Debug, Clone, Copy)]
pub struct Figures {
    model    : InheritanceModel,
    iq_step  : f64,
    kids_step: f64,
}

impl Figures {
    pub fn new(model: InheritanceModel, iq_step: f64, kids_step: f64) -> Self {
        Self{model, iq_step, kids_step}
    }

    /// Number of grid rows evaluated by each figure. Used to size progress bars.
    ///
    /// # Errors
    /// if any of the figure axes is invalid.
    pub fn rows(&self) -> Result<[u64; 3], SurfaceError> {
        let target_rows = self.iq_axis(IQ_RANGE)?.len() * KID_LAYERS.count();
        let kids_rows   = self.kids_axis()?.len();
        Ok([target_rows as u64, kids_rows as u64, kids_rows as u64])
    }

    fn iq_axis(&self, (start, end): (f64, f64)) -> Result<Axis, SurfaceError> {
        Axis::new(start, end, self.iq_step)
    }

    fn kids_axis(&self) -> Result<Axis, SurfaceError> {
        Axis::new(KIDS_RANGE.0, KIDS_RANGE.1, self.kids_step)
    }

    /// Counterparty IQ x Target IQ, with one surface per number of kids (1 to 5). Both genders.
    ///
    /// # Errors
    /// if `self.iq_step` is invalid.
    pub fn attainment_by_target(&self, progress: &ProgressBar) -> Result<SurfacePlot, SurfaceError> {
        let title = format!(
            "Attainment probability planes for {} kids",
            KID_LAYERS.map(|n| n.to_string()).collect::<Vec<_>>().join(", ")
        );
        let mut plot = SurfacePlot::new(&title, "Counterparty IQ", "Target IQ", PROBABILITY).z_limits(0.0..1.0);

        let axis = self.iq_axis(IQ_RANGE)?;
        for (layer, kids) in KID_LAYERS.enumerate() {
            info!("Evaluating attainment probabilities for {kids} kid(s)...");
            let grid = SurfaceGrid::evaluate(axis, axis, |counterparty, target| {
                self.model.family_success_probability(counterparty, kids, target, Genders::Both)
            }, progress)?;
            plot.push_layer(SurfaceLayer{label: format!("{kids} kid(s)"), grid, colormap: ColorMap::nth(layer)});
        }
        Ok(plot)
    }

    /// Counterparty IQ x (continuous) number of kids, for a target IQ of 145. Both genders.
    ///
    /// # Errors
    /// if `self.iq_step` or `self.kids_step` is invalid.
    pub fn attainment_by_kids(&self, progress: &ProgressBar) -> Result<SurfacePlot, SurfaceError> {
        let title = format!("Attainment probability plane for IQ {FIXED_TARGET_IQ}");
        let mut plot = SurfacePlot::new(&title, "Given Counterparty IQ", "Child Count", PROBABILITY).z_limits(0.0..1.0);

        info!("Evaluating attainment probabilities for a target IQ of {FIXED_TARGET_IQ}...");
        let grid = SurfaceGrid::evaluate(self.iq_axis(IQ_RANGE)?, self.kids_axis()?, |counterparty, kids| {
            self.model.family_success_probability(counterparty, kids, FIXED_TARGET_IQ, Genders::Both)
        }, progress)?;
        plot.push_layer(SurfaceLayer{label: format!("IQ {FIXED_TARGET_IQ}"), grid, colormap: ColorMap::Blues});
        Ok(plot)
    }

    /// Counterparty IQ x (continuous) number of kids, weighted by the rarity of the pairing.
    /// The vertical axis is fitted to the data, since weighted values are not bounded by 1.
    ///
    /// # Errors
    /// if `self.iq_step` or `self.kids_step` is invalid.
    pub fn attainment_with_rarity(&self, progress: &ProgressBar) -> Result<SurfacePlot, SurfaceError> {
        let title = format!("Rarity-weighted attainment plane for IQ {FIXED_TARGET_IQ}");
        let mut plot = SurfacePlot::new(&title, "Targeted Counterparty IQ", "Targeted Child Count", "Rarity-weighted attainment");

        info!("Evaluating rarity-weighted attainment for a target IQ of {FIXED_TARGET_IQ}...");
        let grid = SurfaceGrid::evaluate(self.iq_axis(RARITY_IQ_RANGE)?, self.kids_axis()?, |counterparty, kids| {
            self.model.rarity_weighted_probability(counterparty, kids, FIXED_TARGET_IQ)
        }, progress)?;
        plot.push_layer(SurfaceLayer{label: format!("IQ {FIXED_TARGET_IQ}"), grid, colormap: ColorMap::Blues});
        Ok(plot)
    }
}

use serde::{Serialize, Deserialize};

use crate::ModelError;

// ---- Default population constants.
const MEAN_KIDS_PER_FAMILY   : f64 = 2.4;
const STD_DEV_KIDS_PER_FAMILY: f64 = 0.9;
const BASE_PARENT_IQ         : f64 = 160.0;
const POPULATION_STD_DEV     : f64 = 15.0;
const POPULATION_MEAN_IQ     : f64 = 105.0; // Educational cohort, not the general population.
const MEAN_REGRESSION        : f64 = 0.3;

/// Population-wide constants of the inheritance model.
///
/// # Fields
/// - `mean_kids_per_family`   : mean family size. Only used when weighting by rarity.
/// - `std_dev_kids_per_family`: standard deviation of the family size.
/// - `base_parent_iq`         : IQ of the fixed, reference parent.
/// - `population_std_dev`     : standard deviation of IQ within the population. Also used as the
///                              standard deviation of the offspring IQ distribution.
/// - `population_mean_iq`     : mean IQ of the reference cohort.
/// - `mean_regression`        : weight in [0, 1] pulling the expected offspring IQ toward `population_mean_iq`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PopulationParams {
    pub mean_kids_per_family   : f64,
    pub std_dev_kids_per_family: f64,
    pub base_parent_iq         : f64,
    pub population_std_dev     : f64,
    pub population_mean_iq     : f64,
    pub mean_regression        : f64,
}

impl Default for PopulationParams {
    fn default() -> Self {
        Self {
            mean_kids_per_family   : MEAN_KIDS_PER_FAMILY,
            std_dev_kids_per_family: STD_DEV_KIDS_PER_FAMILY,
            base_parent_iq         : BASE_PARENT_IQ,
            population_std_dev     : POPULATION_STD_DEV,
            population_mean_iq     : POPULATION_MEAN_IQ,
            mean_regression        : MEAN_REGRESSION,
        }
    }
}

impl PopulationParams {
    /// Ensure these parameters describe a usable model.
    ///
    /// # Errors
    /// - `InvalidRegression` if `mean_regression` is not within [0, 1]. (The expected offspring IQ
    ///   would no longer be a convex combination.)
    /// - `InvalidStdDev` if any standard deviation is non-finite, zero or negative.
    /// - `NonFiniteParam` if any mean is NaN or infinite.
    pub fn validate(&self) -> Result<(), ModelError> {
        use ModelError::{InvalidRegression, InvalidStdDev, NonFiniteParam};

        if !(0.0..=1.0).contains(&self.mean_regression) {
            return Err(InvalidRegression(self.mean_regression))
        }

        let std_devs = [
            ("population standard deviation", self.population_std_dev),
            ("family size standard deviation", self.std_dev_kids_per_family),
        ];
        if let Some((name, value)) = std_devs.into_iter().find(|(_, sd)| !(sd.is_finite() && *sd > 0.0)) {
            return Err(InvalidStdDev{name, value})
        }

        let means = [
            ("mean family size", self.mean_kids_per_family),
            ("base parent IQ", self.base_parent_iq),
            ("population mean IQ", self.population_mean_iq),
        ];
        if let Some((name, value)) = means.into_iter().find(|(_, mean)| !mean.is_finite()) {
            return Err(NonFiniteParam{name, value})
        }
        Ok(())
    }
}

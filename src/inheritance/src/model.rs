use crate::{Genders, ModelError, Pairing, PopulationParams, normal_cdf, normal_sf};

/// Additive floor of the rarity modifier.
pub const RARITY_FLOOR: f64 = 0.06;

/// Inheritance probability model, bound to a fixed set of population constants.
///
/// Every operation is a pure function of its arguments and of `self.params`.
///
/// # Non-contract
/// Inputs are not validated. Non-finite IQs propagate NaN, and a negative number of kids
/// yields `1 - p^k` with `k < 0`, which may be negative. The surface plots rely on fractional
/// kid counts, hence `kids: impl Into<f64>`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InheritanceModel {
    params: PopulationParams,
}

impl InheritanceModel {
    /// # Errors
    /// if `params` fail validation. See [`PopulationParams::validate`]
    pub fn new(params: PopulationParams) -> Result<Self, ModelError> {
        params.validate()?;
        Ok(Self{params})
    }

    pub fn params(&self) -> &PopulationParams {
        &self.params
    }

    /// Expected IQ of an offspring between the base parent and `counterparty_iq`:
    /// the parental average, regressed toward the population mean.
    pub fn expected_offspring_iq(&self, counterparty_iq: f64) -> f64 {
        let PopulationParams{base_parent_iq, population_mean_iq, mean_regression, ..} = self.params;
        let parent_expected = (counterparty_iq + base_parent_iq) / 2.0;
        population_mean_iq * mean_regression + parent_expected * (1.0 - mean_regression)
    }

    /// Probability that a single child fails to reach `target_iq`.
    ///
    /// `p = P(offspring IQ <= target_iq)`. When restricting to a single gender, the returned
    /// value is `0.5 + 0.5 * p`.
    pub fn per_child_failure_probability(&self, counterparty_iq: f64, target_iq: f64, genders: Genders) -> f64 {
        let expected = self.expected_offspring_iq(counterparty_iq);
        let p = normal_cdf(target_iq, expected, self.params.population_std_dev);
        match genders {
            Genders::Single => 0.5 + 0.5 * p,
            Genders::Both   => p,
        }
    }

    /// Probability that at least one out of `kids` independent children reaches `target_iq`.
    ///
    /// Zero kids always yields exactly `0.0`.
    pub fn family_success_probability<K>(&self, counterparty_iq: f64, kids: K, target_iq: f64, genders: Genders) -> f64
    where
        K: Into<f64>,
    {
        let failure = self.per_child_failure_probability(counterparty_iq, target_iq, genders);
        1.0 - failure.powf(kids.into())
    }

    /// Same as [`Self::family_success_probability`], as a percentage rounded to one decimal.
    /// e.g. `"16.6%"`
    pub fn formatted_success_probability<K>(&self, counterparty_iq: f64, kids: K, target_iq: f64, genders: Genders) -> String
    where
        K: Into<f64>,
    {
        let probability = self.family_success_probability(counterparty_iq, kids, target_iq, genders);
        format!("{:.1}%", probability * 100.0)
    }

    /// Odds of finding a partner at least as intelligent as `counterparty_iq` in the population.
    pub fn counterparty_rarity(&self, counterparty_iq: f64) -> f64 {
        normal_sf(counterparty_iq, self.params.population_mean_iq, self.params.population_std_dev)
    }

    /// Odds of a family having at least `kids` children.
    pub fn kid_count_rarity<K: Into<f64>>(&self, kids: K) -> f64 {
        normal_sf(kids.into(), self.params.mean_kids_per_family, self.params.std_dev_kids_per_family)
    }

    /// Joint rarity of the counterparty and of the family size, offset by [`RARITY_FLOOR`].
    pub fn rarity_modifier<K: Into<f64>>(&self, counterparty_iq: f64, kids: K) -> f64 {
        self.counterparty_rarity(counterparty_iq) * self.kid_count_rarity(kids) + RARITY_FLOOR
    }

    /// Family success probability (both genders), discounted by how rare the pairing itself is.
    ///
    /// This is an exploratory metric, and not a probability: it is never clamped. It may exceed 1,
    /// or go negative along with `family_success_probability` for negative kid counts.
    pub fn rarity_weighted_probability<K>(&self, counterparty_iq: f64, kids: K, target_iq: f64) -> f64
    where
        K: Into<f64> + Copy,
    {
        self.rarity_modifier(counterparty_iq, kids)
            * self.family_success_probability(counterparty_iq, kids, target_iq, Genders::Both)
    }

    pub fn evaluate(&self, pairing: &Pairing) -> f64 {
        let Pairing{counterparty_iq, kids, target_iq, genders} = *pairing;
        self.family_success_probability(counterparty_iq, kids, target_iq, genders)
    }

    pub fn format(&self, pairing: &Pairing) -> String {
        let Pairing{counterparty_iq, kids, target_iq, genders} = *pairing;
        self.formatted_success_probability(counterparty_iq, kids, target_iq, genders)
    }
}

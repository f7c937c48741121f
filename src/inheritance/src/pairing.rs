use serde::{Serialize, Deserialize};

use crate::Genders;

/// Named parameters of a single evaluation of the model: who the counterparty is, how many
/// children, and what counts as a success.
///
/// `target_iq` defaults to [`Pairing::DEFAULT_TARGET_IQ`], and `genders` to `Genders::Single`.
///
/// # Example
/// ```
/// use inheritance::{Genders, Pairing};
/// let pairing = Pairing::new(140.0, 3).target_iq(145.0).genders(Genders::Both);
/// assert_eq!(pairing.kids, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pairing {
    pub counterparty_iq: f64,
    pub kids           : u32,
    pub target_iq      : f64,
    pub genders        : Genders,
}

impl Pairing {
    pub const DEFAULT_TARGET_IQ: f64 = 150.0;

    pub fn new(counterparty_iq: f64, kids: u32) -> Self {
        Self {counterparty_iq, kids, target_iq: Self::DEFAULT_TARGET_IQ, genders: Genders::default()}
    }

    #[must_use]
    pub fn target_iq(mut self, target_iq: f64) -> Self {
        self.target_iq = target_iq;
        self
    }

    #[must_use]
    pub fn genders(mut self, genders: Genders) -> Self {
        self.genders = genders;
        self
    }
}

//! Inheritance probability model.
//!
//! Expected offspring IQ is a blend of the parental average and the population mean
//! (regression to the mean). Offspring IQ is then assumed to be normally distributed
//! around that expectation, which gives the odds that at least one of `n` independent
//! children reaches a target IQ.

mod error;
pub use error::ModelError;

mod genders;
pub use genders::Genders;

mod normal;
pub use normal::{normal_cdf, normal_sf};

mod population;
pub use population::PopulationParams;

mod pairing;
pub use pairing::Pairing;

mod model;
pub use model::{InheritanceModel, RARITY_FLOOR};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("Invalid gender count: {0}. Expected either 1 (single gender) or 2 (both genders)")]
    InvalidGenderCount(i64),

    #[error("Mean regression factor must lie within [0, 1]. Got {0}")]
    InvalidRegression(f64),

    #[error("{name} must be a finite, strictly positive value. Got {value}")]
    InvalidStdDev{name: &'static str, value: f64},

    #[error("{name} must be a finite value. Got {value}")]
    NonFiniteParam{name: &'static str, value: f64},
}

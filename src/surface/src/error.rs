use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum SurfaceError {
    #[error("Invalid axis step: {0}. Steps must be finite and strictly positive")]
    InvalidStep(f64),

    #[error("Empty axis: [{start}, {end}[ does not contain any value")]
    EmptyAxis{start: f64, end: f64},

    #[error("Axis [{start}, {end}[ with step {step} would hold {count} values. At most {max} are allowed")]
    TooManyValues{start: f64, end: f64, step: f64, count: f64, max: usize},

    #[error("A {x_len}x{y_len} grid exceeds the maximum of {max} values")]
    GridTooLarge{x_len: usize, y_len: usize, max: usize},

    #[error("Surface plot '{0}' does not contain any finite value")]
    NoFiniteValue(String),

    #[error("Cannot render '{0}': plot does not contain any surface layer")]
    NoLayer(String),
}

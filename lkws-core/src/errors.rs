use crate::parameter::ParameterError;
use thiserror::Error;

/// Error type for improperly defined states and convergence problems.
#[derive(Error, Debug)]
pub enum EosError {
    #[error("`{0}` did not converge within the maximum number of iterations (last iterate {1}, residual {2}).")]
    NotConverged(String, f64, f64),
    #[error("`{0}` encountered illegal values during the iteration (iterate {1}, residual {2}).")]
    IterationFailed(String, f64, f64),
    #[error("Invalid state in {0}: {1} = {2}.")]
    InvalidState(String, String, f64),
    #[error(transparent)]
    ParameterError(#[from] ParameterError),
}

/// Convenience type for `Result<T, EosError>`.
pub type EosResult<T> = Result<T, EosError>;

/// Reject reduced properties that are not strictly positive and finite.
///
/// The coefficient functions divide by powers of the reduced variables,
/// so anything else would silently turn into `inf` or `NaN`.
pub fn validate_positive(context: &str, variable: &str, value: f64) -> EosResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(EosError::InvalidState(
            context.to_owned(),
            variable.to_owned(),
            value,
        ))
    }
}

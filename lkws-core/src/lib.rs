#![warn(clippy::all)]
#![allow(clippy::many_single_char_names)]

#[doc(hidden)]
pub use tracing;

/// Log messages with level `Verbosity::Iter` or higher.
#[macro_export]
macro_rules! log_iter {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::Verbosity::Iter {
            $crate::tracing::debug!($($arg)*);
        }
    }
}

/// Log messages with level `Verbosity::Result` or higher.
#[macro_export]
macro_rules! log_result {
    ($verbosity:expr, $($arg:tt)*) => {
        if $verbosity >= $crate::Verbosity::Result {
            $crate::tracing::info!($($arg)*);
        }
    }
}

mod errors;
pub mod parameter;
mod root_finding;
mod solver;

pub use errors::{validate_positive, EosError, EosResult};
pub use root_finding::{Newton, Root, RootFinder, ScalarResidual};
pub use solver::{SolverOptions, Verbosity};

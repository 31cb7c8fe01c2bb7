//! Scalar root finding for implicit equations of state.
//!
//! The models only provide a [ScalarResidual]; how the root is found is
//! decided by the [RootFinder] that is passed in by the caller. The finder
//! never decides which root it converges to: that is determined by the
//! initial value alone.
use crate::errors::{EosError, EosResult};
use crate::SolverOptions;
use num_dual::{Dual64, DualNum};

const MAX_ITER_NEWTON: usize = 100;
const TOL_NEWTON: f64 = 1e-10;
const MAX_STEP_HALVINGS: usize = 30;

/// A scalar function whose root is sought.
///
/// The residual is generic over dual numbers so that a finder can obtain
/// exact derivatives. Implementations return an [EosError::InvalidState] if
/// `x` lies outside of the domain of the function.
pub trait ScalarResidual {
    fn residual<D: DualNum<f64> + Copy>(&self, x: D) -> EosResult<D>;
}

/// A converged root together with the residual at the root.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Root {
    pub value: f64,
    pub residual: f64,
    pub iterations: usize,
}

/// Capability to solve a scalar residual starting from an initial value.
pub trait RootFinder {
    fn solve<R: ScalarResidual>(
        &self,
        residual: &R,
        x0: f64,
        options: SolverOptions,
    ) -> EosResult<Root>;
}

/// Damped Newton-Raphson iteration.
///
/// Derivatives are calculated with forward mode automatic differentiation.
/// A full Newton step is halved until the absolute residual decreases; steps
/// that leave the domain of the residual are halved as well.
///
/// If no step reduces the residual, the iteration stops with
/// [EosError::NotConverged] holding the last iterate and its residual.
#[derive(Clone, Copy, Debug)]
pub struct Newton {
    pub max_step_halvings: usize,
}

impl Default for Newton {
    fn default() -> Self {
        Self {
            max_step_halvings: MAX_STEP_HALVINGS,
        }
    }
}

impl Newton {
    pub fn new() -> Self {
        Self::default()
    }

    fn line_search<R: ScalarResidual>(
        &self,
        residual: &R,
        x: f64,
        f: f64,
        step: f64,
    ) -> EosResult<f64> {
        let mut lambda = 1.0;
        for _ in 0..self.max_step_halvings {
            let x_new = x + lambda * step;
            match residual.residual(x_new) {
                Ok(f_new) if f_new.is_finite() && f_new.abs() < f.abs() => return Ok(x_new),
                Ok(_) | Err(EosError::InvalidState(..)) => lambda *= 0.5,
                Err(e) => return Err(e),
            }
        }
        Err(EosError::NotConverged(String::from("Newton line search"), x, f))
    }
}

impl RootFinder for Newton {
    fn solve<R: ScalarResidual>(
        &self,
        residual: &R,
        x0: f64,
        options: SolverOptions,
    ) -> EosResult<Root> {
        let (max_iter, tol, verbosity) = options.unwrap_or(MAX_ITER_NEWTON, TOL_NEWTON);
        if !x0.is_finite() {
            return Err(EosError::InvalidState(
                String::from("Newton"),
                String::from("x0"),
                x0,
            ));
        }

        log_iter!(verbosity, " iter |    residual    |        x         |    derivative");
        log_iter!(verbosity, "{:-<62}", "");

        let mut x = x0;
        for iter in 0..max_iter {
            let res = residual.residual(Dual64::from(x).derivative())?;
            let (f, df) = (res.re, res.eps);
            if !f.is_finite() {
                return Err(EosError::IterationFailed(String::from("Newton"), x, f));
            }
            log_iter!(
                verbosity,
                " {:4} | {:14.8e} | {:16.10} | {:14.8e}",
                iter,
                f.abs(),
                x,
                df
            );
            if f.abs() < tol {
                log_result!(
                    verbosity,
                    "Newton: calculation converged in {} step(s)",
                    iter
                );
                return Ok(Root {
                    value: x,
                    residual: f,
                    iterations: iter,
                });
            }
            if !df.is_finite() {
                return Err(EosError::IterationFailed(String::from("Newton"), x, f));
            }
            if df == 0.0 {
                return Err(EosError::NotConverged(String::from("Newton"), x, f));
            }
            x = self.line_search(residual, x, f, -f / df)?;
        }

        let f = residual.residual(x)?;
        if f.abs() < tol {
            log_result!(
                verbosity,
                "Newton: calculation converged in {} step(s)",
                max_iter
            );
            return Ok(Root {
                value: x,
                residual: f,
                iterations: max_iter,
            });
        }
        log_result!(
            verbosity,
            "Newton: no convergence after {} iterations (x = {}, residual = {:e})",
            max_iter,
            x,
            f
        );
        Err(EosError::NotConverged(String::from("Newton"), x, f))
    }
}

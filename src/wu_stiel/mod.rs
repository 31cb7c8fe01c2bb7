//! Wu-Stiel correction of the Lee-Kesler equation of state for polar fluids.
//!
//! [Wu and Stiel (1985)](https://doi.org/10.1002/aic.690311006)
//!
//! Water is used as polar reference fluid and described by the equation of
//! state of Keenan et al. The correction returns the compressibility factor
//! of water together with its enthalpy and entropy departures at the same
//! reduced temperature and pressure.
use lkws_core::{log_result, validate_positive, EosError, EosResult, RootFinder, SolverOptions};
use std::fmt;

mod keenan;
pub use keenan::{
    KeenanParameters, KeenanResidual, KEENAN, WATER_CRITICAL_PRESSURE,
    WATER_CRITICAL_TEMPERATURE,
};

/// Trial compressibility factors up to this value are treated as liquid.
const LIQUID_COMPRESSIBILITY_LIMIT: f64 = 0.1;
const LIQUID_COMPRESSIBILITY: f64 = 0.001;
const VAPOR_COMPRESSIBILITY: f64 = 1.1;

/// Initial value of the compressibility factor of water.
///
/// As for the Lee-Kesler fluids, the initial value alone determines whether
/// the liquid-like or vapor-like root of the Keenan equation of state is found.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CompressibilityInitialization {
    /// Start from a liquid-like compressibility factor of 0.001.
    Liquid,
    /// Start from a vapor-like compressibility factor of 1.1.
    Vapor,
    /// Use the given compressibility factor as initial value.
    InitialCompressibility(f64),
}

impl CompressibilityInitialization {
    /// Select the branch from a trial compressibility factor, e.g. the
    /// Lee-Kesler result of the fluid that is corrected.
    ///
    /// Any finite trial value up to 0.1, including non-positive ones, selects
    /// the liquid branch.
    pub fn from_trial(z: f64) -> EosResult<Self> {
        if !z.is_finite() {
            return Err(EosError::InvalidState(
                String::from("Wu-Stiel correction"),
                String::from("trial Z"),
                z,
            ));
        }
        if z <= LIQUID_COMPRESSIBILITY_LIMIT {
            Ok(Self::Liquid)
        } else {
            Ok(Self::Vapor)
        }
    }

    pub fn initial_compressibility(&self) -> EosResult<f64> {
        match *self {
            Self::Liquid => Ok(LIQUID_COMPRESSIBILITY),
            Self::Vapor => Ok(VAPOR_COMPRESSIBILITY),
            Self::InitialCompressibility(z) => validate_positive("Wu-Stiel correction", "Z0", z),
        }
    }
}

/// Result of a single Wu-Stiel evaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WuStielCorrection {
    /// Compressibility factor of water.
    pub compressibility: f64,
    /// Density of water in g/cm^3.
    pub density: f64,
    /// Departure integral of the Keenan equation of state.
    pub q: f64,
    /// Derivative of the departure integral with respect to 1000/T.
    pub dq_dtau: f64,
    /// Enthalpy departure (h* - h)/(R Tc).
    pub enthalpy_departure: f64,
    /// Entropy departure (s* - s)/R.
    pub entropy_departure: f64,
}

impl fmt::Display for WuStielCorrection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Z_w = {:.6}, rho_w = {:.6} g/cm^3, H_w = {:.6}, S_w = {:.6}",
            self.compressibility, self.density, self.enthalpy_departure, self.entropy_departure
        )
    }
}

/// Wu-Stiel correction based on the Keenan equation of state for water.
#[derive(Clone, Copy, Debug, Default)]
pub struct WuStiel {
    parameters: KeenanParameters,
}

impl WuStiel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parameters(parameters: KeenanParameters) -> Self {
        Self { parameters }
    }

    pub fn parameters(&self) -> &KeenanParameters {
        &self.parameters
    }

    /// Evaluate the water reference fluid at the given reduced temperature
    /// and pressure.
    pub fn correction<F: RootFinder>(
        &self,
        tr: f64,
        pr: f64,
        initialization: CompressibilityInitialization,
        finder: &F,
        options: SolverOptions,
    ) -> EosResult<WuStielCorrection> {
        let residual = KeenanResidual::new(&self.parameters, tr, pr)?;
        let z0 = initialization.initial_compressibility()?;
        let root = finder.solve(&residual, z0, options)?;
        let z = validate_positive("Wu-Stiel correction", "Zw", root.value)?;

        let rho = residual.density(z);
        let tau = residual.tau;
        let s = residual.series(z);
        let correction = WuStielCorrection {
            compressibility: z,
            density: rho,
            q: s.q,
            dq_dtau: s.dq_dtau,
            enthalpy_departure: -z + 1.0 - rho * tau * s.dq_dtau,
            entropy_departure: -z.ln() + rho * s.q - rho * tau * s.dq_dtau,
        };
        log_result!(
            options.verbosity,
            "Wu-Stiel correction: tr = {}, pr = {}, Z0 = {} -> {} ({} iterations)",
            tr,
            pr,
            z0,
            correction,
            root.iterations
        );
        Ok(correction)
    }

    /// Evaluate the water reference fluid with the branch selected from a
    /// trial compressibility factor (liquid for `z <= 0.1`, vapor otherwise).
    pub fn correct<F: RootFinder>(
        &self,
        z: f64,
        tr: f64,
        pr: f64,
        finder: &F,
        options: SolverOptions,
    ) -> EosResult<WuStielCorrection> {
        let initialization = CompressibilityInitialization::from_trial(z)?;
        self.correction(tr, pr, initialization, finder, options)
    }
}

use super::eos::LeeKesler;
use super::state::LeeKeslerState;
use lkws_core::{
    log_result, validate_positive, EosResult, RootFinder, ScalarResidual, SolverOptions,
};
use num_dual::DualNum;
#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Reduced volume used to seed a liquid-like root.
const LIQUID_REDUCED_VOLUME: f64 = 0.01;

/// Initial value of the reduced volume iteration.
///
/// The Lee-Kesler equation of state has up to three roots for a given
/// temperature and pressure below the critical point. The iteration converges
/// to the root closest to the initial value, so the initialization alone decides
/// whether a liquid-like or a vapor-like volume is found. No attempt is made to
/// determine the stable phase.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum VolumeInitialization {
    /// Start from a dense, liquid-like reduced volume.
    Liquid,
    /// Start from the ideal gas reduced volume `tr/pr`.
    Vapor,
    /// Use the given reduced volume as initial value.
    InitialVolume(f64),
}

impl VolumeInitialization {
    /// Initial reduced volume for the given state.
    pub fn initial_volume(&self, tr: f64, pr: f64) -> EosResult<f64> {
        match *self {
            Self::Liquid => Ok(LIQUID_REDUCED_VOLUME),
            Self::Vapor => Ok(tr / pr),
            Self::InitialVolume(vr) => validate_positive("reduced volume iteration", "vr0", vr),
        }
    }
}

/// Residual `Z(tr, vr) - pr vr/tr` of the Lee-Kesler equation of state.
pub struct ReducedVolumeResidual<'a> {
    eos: &'a LeeKesler,
    tr: f64,
    pr: f64,
}

impl<'a> ReducedVolumeResidual<'a> {
    pub fn new(eos: &'a LeeKesler, tr: f64, pr: f64) -> EosResult<Self> {
        let tr = validate_positive("reduced volume iteration", "tr", tr)?;
        let pr = validate_positive("reduced volume iteration", "pr", pr)?;
        Ok(Self { eos, tr, pr })
    }
}

impl ScalarResidual for ReducedVolumeResidual<'_> {
    fn residual<D: DualNum<f64> + Copy>(&self, vr: D) -> EosResult<D> {
        Ok(self.eos.compressibility_dual(self.tr, vr)? - vr * (self.pr / self.tr))
    }
}

impl LeeKesler {
    /// Solve the equation of state for the reduced volume at given reduced
    /// temperature and pressure.
    pub fn reduced_volume<F: RootFinder>(
        &self,
        tr: f64,
        pr: f64,
        initialization: VolumeInitialization,
        finder: &F,
        options: SolverOptions,
    ) -> EosResult<f64> {
        let residual = ReducedVolumeResidual::new(self, tr, pr)?;
        let vr0 = initialization.initial_volume(tr, pr)?;
        let root = finder.solve(&residual, vr0, options)?;
        log_result!(
            options.verbosity,
            "Reduced volume iteration: tr = {}, pr = {}, vr0 = {} -> vr = {} ({} iterations)",
            tr,
            pr,
            vr0,
            root.value,
            root.iterations
        );
        validate_positive("reduced volume iteration", "vr", root.value)
    }

    /// Solve for the reduced volume and return the resulting state.
    pub fn state<F: RootFinder>(
        &self,
        tr: f64,
        pr: f64,
        initialization: VolumeInitialization,
        finder: &F,
        options: SolverOptions,
    ) -> EosResult<LeeKeslerState> {
        let vr = self.reduced_volume(tr, pr, initialization, finder, options)?;
        Ok(LeeKeslerState::new(*self, tr, pr, vr))
    }

    /// Solve for the reduced volumes of a list of `(tr, pr)` states in parallel.
    ///
    /// Every state is solved independently, so a failure is reported only for
    /// the state that caused it.
    #[cfg(feature = "rayon")]
    pub fn reduced_volumes<F: RootFinder + Sync>(
        &self,
        states: &[(f64, f64)],
        initialization: VolumeInitialization,
        finder: &F,
        options: SolverOptions,
    ) -> Vec<EosResult<f64>> {
        states
            .par_iter()
            .map(|&(tr, pr)| self.reduced_volume(tr, pr, initialization, finder, options))
            .collect()
    }
}

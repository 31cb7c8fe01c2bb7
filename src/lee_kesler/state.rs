use super::eos::LeeKesler;
use std::fmt;

/// A converged state of a Lee-Kesler reference fluid in reduced variables.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LeeKeslerState {
    eos: LeeKesler,
    /// reduced temperature
    pub tr: f64,
    /// reduced pressure
    pub pr: f64,
    /// ideal reduced volume
    pub vr: f64,
}

impl LeeKeslerState {
    pub(super) fn new(eos: LeeKesler, tr: f64, pr: f64, vr: f64) -> Self {
        Self { eos, tr, pr, vr }
    }

    pub fn eos(&self) -> &LeeKesler {
        &self.eos
    }

    /// Compressibility factor evaluated from the equation of state.
    pub fn compressibility(&self) -> f64 {
        self.eos.compressibility_unchecked(self.tr, self.vr)
    }

    /// Enthalpy departure (h* - h)/(R Tc).
    pub fn enthalpy_departure(&self) -> f64 {
        self.eos.enthalpy_departure_unchecked(self.tr, self.vr)
    }

    /// Entropy departure (s* - s)/R.
    pub fn entropy_departure(&self) -> f64 {
        self.eos.entropy_departure_unchecked(self.tr, self.vr)
    }

    /// Logarithm of the fugacity coefficient.
    pub fn ln_phi(&self) -> f64 {
        self.eos.ln_phi_unchecked(self.tr, self.vr)
    }
}

impl fmt::Display for LeeKeslerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "T_r = {:.5}, p_r = {:.5}, v_r = {:.5}, Z = {:.5}",
            self.tr,
            self.pr,
            self.vr,
            self.compressibility()
        )
    }
}

use super::parameters::{LeeKeslerRecord, ReferenceFluid};
use lkws_core::{validate_positive, EosResult};
use num_dual::DualNum;
use std::fmt;

/// The Lee-Kesler equation of state of a single reference fluid.
///
/// All quantities are reduced: `tr = T/Tc` and the ideal reduced volume
/// `vr = pc v/(R Tc)`, so that `Z = pr vr/tr`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeeKesler {
    record: LeeKeslerRecord,
}

impl LeeKesler {
    /// Create the equation of state of one of the two reference fluids.
    pub fn new(fluid: ReferenceFluid) -> Self {
        Self::from_record(*fluid.record())
    }

    /// Create an equation of state from an arbitrary set of constants.
    pub fn from_record(record: LeeKeslerRecord) -> Self {
        Self { record }
    }

    pub fn record(&self) -> &LeeKeslerRecord {
        &self.record
    }

    /// Second virial-like coefficient B(Tr).
    pub fn b(&self, tr: f64) -> EosResult<f64> {
        let tr = validate_positive("virial coefficient B", "tr", tr)?;
        Ok(self.b_unchecked(tr))
    }

    /// Third virial-like coefficient C(Tr).
    pub fn c(&self, tr: f64) -> EosResult<f64> {
        let tr = validate_positive("virial coefficient C", "tr", tr)?;
        Ok(self.c_unchecked(tr))
    }

    /// Sixth virial-like coefficient D(Tr).
    pub fn d(&self, tr: f64) -> EosResult<f64> {
        let tr = validate_positive("virial coefficient D", "tr", tr)?;
        Ok(self.d_unchecked(tr))
    }

    /// Compressibility factor Z(Tr, vr).
    pub fn compressibility(&self, tr: f64, vr: f64) -> EosResult<f64> {
        self.compressibility_dual(tr, vr)
    }

    /// Compressibility factor for a (hyper) dual reduced volume.
    pub fn compressibility_dual<D: DualNum<f64> + Copy>(&self, tr: f64, vr: D) -> EosResult<D> {
        let tr = validate_positive("compressibility factor", "tr", tr)?;
        validate_positive("compressibility factor", "vr", vr.re())?;
        Ok(self.compressibility_unchecked(tr, vr))
    }

    /// Enthalpy departure (h* - h)/(R Tc) of the real fluid from the ideal gas.
    pub fn enthalpy_departure(&self, tr: f64, vr: f64) -> EosResult<f64> {
        let (tr, vr) = validate("enthalpy departure", tr, vr)?;
        Ok(self.enthalpy_departure_unchecked(tr, vr))
    }

    /// Entropy departure (s* - s)/R from the ideal gas at the same temperature and pressure.
    pub fn entropy_departure(&self, tr: f64, vr: f64) -> EosResult<f64> {
        let (tr, vr) = self.validate_logarithm("entropy departure", tr, vr)?;
        Ok(self.entropy_departure_unchecked(tr, vr))
    }

    /// Logarithm of the fugacity coefficient ln(f/p).
    pub fn ln_phi(&self, tr: f64, vr: f64) -> EosResult<f64> {
        let (tr, vr) = self.validate_logarithm("fugacity coefficient", tr, vr)?;
        Ok(self.ln_phi_unchecked(tr, vr))
    }

    /// The logarithmic terms are only defined for a positive compressibility factor.
    fn validate_logarithm(&self, context: &str, tr: f64, vr: f64) -> EosResult<(f64, f64)> {
        let (tr, vr) = validate(context, tr, vr)?;
        validate_positive(context, "Z", self.compressibility_unchecked(tr, vr))?;
        Ok((tr, vr))
    }

    fn b_unchecked(&self, tr: f64) -> f64 {
        let r = &self.record;
        r.b1 - r.b2 / tr - r.b3 / tr.powi(2) - r.b4 / tr.powi(3)
    }

    fn c_unchecked(&self, tr: f64) -> f64 {
        let r = &self.record;
        r.c1 - r.c2 / tr + r.c3 / tr.powi(3)
    }

    fn d_unchecked(&self, tr: f64) -> f64 {
        let r = &self.record;
        r.d1 + r.d2 / tr
    }

    pub(super) fn compressibility_unchecked<D: DualNum<f64> + Copy>(&self, tr: f64, vr: D) -> D {
        let r = &self.record;
        let vri = vr.recip();
        let vri2 = vri * vri;
        let gv = vri2 * r.gamma;
        vri * self.b_unchecked(tr)
            + vri2 * self.c_unchecked(tr)
            + vri2 * vri2 * vri * self.d_unchecked(tr)
            + vri2 * (gv + r.beta) * (-gv).exp() * (r.c4 / tr.powi(3))
            + 1.0
    }

    /// Integral of the exponential term of the equation of state.
    fn exponential_integral(&self, tr: f64, vr: f64) -> f64 {
        let r = &self.record;
        let gv = r.gamma / vr.powi(2);
        r.c4 / (2.0 * tr.powi(3) * r.gamma) * (r.beta + 1.0 - (r.beta + 1.0 + gv) * (-gv).exp())
    }

    pub(super) fn enthalpy_departure_unchecked(&self, tr: f64, vr: f64) -> f64 {
        let r = &self.record;
        let z = self.compressibility_unchecked(tr, vr);
        let e = self.exponential_integral(tr, vr);
        -tr * (z
            - 1.0
            - (r.b2 + 2.0 * r.b3 / tr + 3.0 * r.b4 / tr.powi(2)) / (tr * vr)
            - (r.c2 - 3.0 * r.c3 / tr.powi(2)) / (2.0 * tr * vr.powi(2))
            + r.d2 / (5.0 * tr * vr.powi(5))
            + 3.0 * e)
    }

    pub(super) fn entropy_departure_unchecked(&self, tr: f64, vr: f64) -> f64 {
        let r = &self.record;
        let z = self.compressibility_unchecked(tr, vr);
        let e = self.exponential_integral(tr, vr);
        -(z.ln()
            - (r.b1 + r.b3 / tr.powi(2) + 2.0 * r.b4 / tr.powi(3)) / vr
            - (r.c1 - 2.0 * r.c3 / tr.powi(3)) / (2.0 * vr.powi(2))
            - r.d1 / (5.0 * vr.powi(5))
            + 2.0 * e)
    }

    pub(super) fn ln_phi_unchecked(&self, tr: f64, vr: f64) -> f64 {
        let z = self.compressibility_unchecked(tr, vr);
        z - 1.0 - z.ln()
            + self.b_unchecked(tr) / vr
            + self.c_unchecked(tr) / (2.0 * vr.powi(2))
            + self.d_unchecked(tr) / (5.0 * vr.powi(5))
            + self.exponential_integral(tr, vr)
    }
}

fn validate(context: &str, tr: f64, vr: f64) -> EosResult<(f64, f64)> {
    Ok((
        validate_positive(context, "tr", tr)?,
        validate_positive(context, "vr", vr)?,
    ))
}

impl From<ReferenceFluid> for LeeKesler {
    fn from(fluid: ReferenceFluid) -> Self {
        Self::new(fluid)
    }
}

impl fmt::Display for LeeKesler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Lee-Kesler {}", self.record)
    }
}

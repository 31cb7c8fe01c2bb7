use lkws_core::{validate_positive, EosResult, ScalarResidual};
use num_dual::DualNum;

/// Critical temperature of water in Kelvin.
pub const WATER_CRITICAL_TEMPERATURE: f64 = 647.29;
/// Critical pressure of water in MPa.
pub const WATER_CRITICAL_PRESSURE: f64 = 22.088;
/// Gas constant of water in MPa cm^3/(g K), relates pressure to density.
const DENSITY_FACTOR: f64 = 0.41615;
/// Decay constant of the exponential density term.
const EXPONENTIAL_DECAY: f64 = 4.8;

/// Coefficients of the Keenan equation of state for water.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeenanParameters {
    /// Rows 0..8 are polynomial coefficients in density, rows 8 and 9 weight the exponential term.
    pub a: [[f64; 7]; 10],
    /// Reference inverse temperatures in 1000/K.
    pub tau_a: [f64; 7],
    /// Reference densities in g/cm^3.
    pub rho_a: [f64; 7],
}

pub const KEENAN: KeenanParameters = KeenanParameters {
    a: [
        [29.492937, -5.198586, 6.833535, -0.1564104, -6.397241, -3.966140, -0.6904855],
        [-132.13917, 7.777918, -26.149751, -0.7254611, 26.409282, 15.453061, 2.7407416],
        [274.64632, -33.301902, 65.326396, -9.2734289, -47.740374, -29.14247, -5.1028070],
        [-360.93828, -16.254622, -26.181978, 4.3125840, 56.323130, 29.568796, 3.9636085],
        [342.18431, -177.31074, 0.0, 0.0, 0.0, 0.0, 0.0],
        [-244.50042, 127.48742, 0.0, 0.0, 0.0, 0.0, 0.0],
        [155.18535, 137.46153, 0.0, 0.0, 0.0, 0.0, 0.0],
        [5.972849, 155.97836, 0.0, 0.0, 0.0, 0.0, 0.0],
        [-410.30848, 337.31180, -137.46618, 6.7874983, 136.87317, 79.847970, 13.041253],
        [-416.05860, -209.88866, -733.96848, 10.401717, 645.81880, 399.17570, 71.531353],
    ],
    tau_a: [1.544912, 2.5, 2.5, 2.5, 2.5, 2.5, 2.5],
    rho_a: [0.634, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0],
};

impl Default for KeenanParameters {
    fn default() -> Self {
        KEENAN
    }
}

/// The departure integral Q and its partial derivatives.
#[derive(Debug, Clone, Copy)]
pub(super) struct KeenanSeries<D> {
    pub q: D,
    /// derivative with respect to density
    pub dq_drho: D,
    /// derivative with respect to inverse temperature
    pub dq_dtau: D,
}

impl KeenanParameters {
    /// Evaluate the double sum over the seven temperature terms and the eight
    /// density terms at density `rho` and inverse temperature `tau`.
    ///
    /// The temperature weights `(tau - tau_a[j])^(j-1) (tau - tau_a[0])` are
    /// simplified analytically for `j < 2`, so the series stays finite at
    /// `tau = tau_a[j]`.
    pub(super) fn series<D: DualNum<f64> + Copy>(&self, rho: D, tau: f64) -> KeenanSeries<D> {
        let exp = (-rho * EXPONENTIAL_DECAY).exp();
        let dtau0 = tau - self.tau_a[0];

        let mut q = D::zero();
        let mut dq_drho = D::zero();
        let mut dq_dtau = D::zero();
        for j in 0..7 {
            let a = |i: usize| self.a[i][j];
            let ex = exp * (rho * a(9) + a(8));
            let dex = exp * (-(rho * a(9) + a(8)) * EXPONENTIAL_DECAY + a(9));

            let x = rho - self.rho_a[j];
            let mut xi = D::one();
            let mut qs = D::zero();
            let mut dqs = D::zero();
            for i in 0..8 {
                qs += xi * a(i);
                if i < 7 {
                    dqs += xi * (a(i + 1) * (i + 1) as f64);
                }
                xi *= x;
            }

            let dtau = tau - self.tau_a[j];
            let (weight, dweight) = match j {
                0 => (1.0, 0.0),
                1 => (dtau0, 1.0),
                _ => {
                    let n = j as i32 - 1;
                    (
                        dtau.powi(n) * dtau0,
                        dtau.powi(n) + n as f64 * dtau.powi(n - 1) * dtau0,
                    )
                }
            };
            q += (qs + ex) * weight;
            dq_drho += (dqs + dex) * weight;
            dq_dtau += (qs + ex) * dweight;
        }
        KeenanSeries {
            q,
            dq_drho,
            dq_dtau,
        }
    }
}

/// Residual `Zw - (1 + rho Q + rho^2 dQ/drho)` of the Keenan equation of state.
///
/// The density follows from the compressibility factor at fixed temperature
/// and pressure, `rho = p/(0.41615 Zw T)`.
pub struct KeenanResidual<'a> {
    parameters: &'a KeenanParameters,
    /// temperature in Kelvin
    pub temperature: f64,
    /// pressure in MPa
    pub pressure: f64,
    /// inverse temperature 1000/T
    pub tau: f64,
}

impl<'a> KeenanResidual<'a> {
    pub fn new(parameters: &'a KeenanParameters, tr: f64, pr: f64) -> EosResult<Self> {
        let tr = validate_positive("Wu-Stiel correction", "tr", tr)?;
        let pr = validate_positive("Wu-Stiel correction", "pr", pr)?;
        let temperature = WATER_CRITICAL_TEMPERATURE * tr;
        Ok(Self {
            parameters,
            temperature,
            pressure: WATER_CRITICAL_PRESSURE * pr,
            tau: 1000.0 / temperature,
        })
    }

    /// Density of water in g/cm^3 at the given compressibility factor.
    pub fn density<D: DualNum<f64> + Copy>(&self, z: D) -> D {
        z.recip() * (self.pressure / (DENSITY_FACTOR * self.temperature))
    }

    pub(super) fn series<D: DualNum<f64> + Copy>(&self, z: D) -> KeenanSeries<D> {
        self.parameters.series(self.density(z), self.tau)
    }
}

impl ScalarResidual for KeenanResidual<'_> {
    fn residual<D: DualNum<f64> + Copy>(&self, z: D) -> EosResult<D> {
        validate_positive("Wu-Stiel correction", "Zw", z.re())?;
        let rho = self.density(z);
        let s = self.parameters.series(rho, self.tau);
        Ok(z - (rho * s.q + rho * rho * s.dq_drho + 1.0))
    }
}

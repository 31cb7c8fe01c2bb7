use lkws_core::parameter::PureRecord;
use lkws_core::EosResult;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Lee-Kesler constants of a single reference fluid.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct LeeKeslerRecord {
    pub b1: f64,
    pub b2: f64,
    pub b3: f64,
    pub b4: f64,
    pub c1: f64,
    pub c2: f64,
    pub c3: f64,
    pub c4: f64,
    pub d1: f64,
    pub d2: f64,
    pub beta: f64,
    pub gamma: f64,
}

/// Constants of the simple fluid (acentric factor of zero).
pub const SIMPLE_FLUID: LeeKeslerRecord = LeeKeslerRecord {
    b1: 0.1181193,
    b2: 0.265728,
    b3: 0.154790,
    b4: 0.030323,
    c1: 0.0236744,
    c2: 0.0186984,
    c3: 0.0,
    c4: 0.042724,
    d1: 0.155488e-4,
    d2: 0.623689e-4,
    beta: 0.65392,
    gamma: 0.060167,
};

/// Constants of the reference fluid n-octane (acentric factor 0.3978).
pub const OCTANE: LeeKeslerRecord = LeeKeslerRecord {
    b1: 0.2026579,
    b2: 0.331511,
    b3: 0.027655,
    b4: 0.203488,
    c1: 0.0313385,
    c2: 0.0503618,
    c3: 0.016901,
    c4: 0.041577,
    d1: 0.48736e-4,
    d2: 0.0740336e-4,
    beta: 1.226,
    gamma: 0.03754,
};

/// Acentric factor of the n-octane reference fluid.
pub const OCTANE_ACENTRIC_FACTOR: f64 = 0.3978;

/// The two anchors of the Lee-Kesler corresponding-states correlation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReferenceFluid {
    /// Spherical, non-polar simple fluid.
    Simple,
    /// n-octane.
    Octane,
}

impl ReferenceFluid {
    pub fn record(&self) -> &'static LeeKeslerRecord {
        match self {
            Self::Simple => &SIMPLE_FLUID,
            Self::Octane => &OCTANE,
        }
    }

    pub fn acentric_factor(&self) -> f64 {
        match self {
            Self::Simple => 0.0,
            Self::Octane => OCTANE_ACENTRIC_FACTOR,
        }
    }
}

impl fmt::Display for ReferenceFluid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Simple => write!(f, "simple fluid"),
            Self::Octane => write!(f, "n-octane"),
        }
    }
}

impl LeeKeslerRecord {
    /// Read the record of a single reference fluid from a json file.
    pub fn from_json<P: AsRef<Path>>(name: &str, file: P) -> EosResult<Self> {
        let mut records = PureRecord::<Self>::from_json(&[name], file)?;
        Ok(records.remove(0).model_record)
    }
}

impl fmt::Display for LeeKeslerRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LeeKeslerRecord(b=[{}, {}, {}, {}]",
            self.b1, self.b2, self.b3, self.b4
        )?;
        write!(f, ", c=[{}, {}, {}, {}]", self.c1, self.c2, self.c3, self.c4)?;
        write!(f, ", d=[{}, {}]", self.d1, self.d2)?;
        write!(f, ", beta={}, gamma={})", self.beta, self.gamma)
    }
}

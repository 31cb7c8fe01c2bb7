//! Lee-Kesler corresponding-states equation of state.
//!
//! [Lee and Kesler (1975)](https://doi.org/10.1002/aic.690210313)
//!
//! The compressibility factor of a fluid is interpolated by its acentric
//! factor between a simple fluid and the reference fluid n-octane. This
//! module evaluates each of the two reference fluids on its own; the
//! interpolation is left to the caller.
mod eos;
mod parameters;
mod state;
mod volume_iteration;

pub use eos::LeeKesler;
pub use parameters::{
    LeeKeslerRecord, ReferenceFluid, OCTANE, OCTANE_ACENTRIC_FACTOR, SIMPLE_FLUID,
};
pub use state::LeeKeslerState;
pub use volume_iteration::{ReducedVolumeResidual, VolumeInitialization};

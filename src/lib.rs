//! Departure functions from the Lee-Kesler corresponding-states equation of
//! state with the Wu-Stiel correction for polar fluids.
//!
//! All quantities are dimensionless. Iterative calculations take the root
//! finder as an argument (see [lkws_core::RootFinder]) together with an
//! explicit initialization that selects the liquid-like or vapor-like root.
#![warn(clippy::all)]
#![allow(clippy::too_many_arguments)]

pub mod lee_kesler;
pub mod wu_stiel;

use approx::assert_relative_eq;
use lkws::lee_kesler::{LeeKesler, LeeKeslerRecord, ReferenceFluid, OCTANE, SIMPLE_FLUID};
use lkws_core::parameter::{ParameterError, PureRecord};
use lkws_core::EosError;
use proptest::prelude::*;
use std::error::Error;

const PARAMETERS: &str = "tests/data/lee_kesler.json";

fn fluid() -> impl Strategy<Value = ReferenceFluid> {
    prop_oneof![Just(ReferenceFluid::Simple), Just(ReferenceFluid::Octane)]
}

#[test]
fn compressibility_at_reference_state() -> Result<(), Box<dyn Error>> {
    let eos = LeeKesler::new(ReferenceFluid::Simple);
    let z = eos.compressibility(0.8, 4.0)?;
    assert_relative_eq!(z, 0.8746549054151689, max_relative = 1e-12);
    assert!(z > 0.8 && z < 0.95);
    Ok(())
}

#[test]
fn vanishing_temperature_is_rejected() {
    for fluid in [ReferenceFluid::Simple, ReferenceFluid::Octane] {
        let eos = LeeKesler::new(fluid);
        assert!(matches!(eos.b(0.0), Err(EosError::InvalidState(..))));
        assert!(matches!(eos.c(0.0), Err(EosError::InvalidState(..))));
        assert!(matches!(eos.d(0.0), Err(EosError::InvalidState(..))));
        assert!(matches!(
            eos.compressibility(0.0, 1.0),
            Err(EosError::InvalidState(..))
        ));
    }
}

#[test]
fn records_from_json() -> Result<(), Box<dyn Error>> {
    assert_eq!(LeeKeslerRecord::from_json("simple fluid", PARAMETERS)?, SIMPLE_FLUID);
    assert_eq!(LeeKeslerRecord::from_json("n-octane", PARAMETERS)?, OCTANE);

    let records =
        PureRecord::<LeeKeslerRecord>::from_json(&["n-octane", "simple fluid"], PARAMETERS)?;
    assert_eq!(records[0].name, "n-octane");
    assert_eq!(records[1].name, "simple fluid");

    let eos = LeeKesler::from_record(records[0].model_record);
    assert_eq!(
        eos.compressibility(0.8, 4.0)?,
        LeeKesler::new(ReferenceFluid::Octane).compressibility(0.8, 4.0)?
    );

    assert!(matches!(
        LeeKeslerRecord::from_json("water", PARAMETERS),
        Err(EosError::ParameterError(ParameterError::ComponentsNotFound(ref s))) if s == "water"
    ));
    assert!(matches!(
        LeeKeslerRecord::from_json("simple fluid", "tests/data/missing.json"),
        Err(EosError::ParameterError(ParameterError::FileIO(_)))
    ));
    Ok(())
}

proptest! {
    #[test]
    fn ideal_gas_limit(fluid in fluid(), tr in 0.3..4.0) {
        let eos = LeeKesler::new(fluid);
        let z = eos.compressibility(tr, 1e10).unwrap();
        prop_assert!((z - 1.0).abs() < 1e-8);
        // second virial regime
        let z = eos.compressibility(tr, 1e6).unwrap();
        let b = eos.b(tr).unwrap();
        prop_assert!(((z - 1.0) * 1e6 - b).abs() < 1e-4 * (1.0 + b.abs()));
    }

    #[test]
    fn coefficients_are_finite(fluid in fluid(), tr in 0.3..4.0) {
        let eos = LeeKesler::new(fluid);
        prop_assert!(eos.b(tr).unwrap().is_finite());
        prop_assert!(eos.c(tr).unwrap().is_finite());
        prop_assert!(eos.d(tr).unwrap().is_finite());
    }

    #[test]
    fn fugacity_coefficient_is_consistent_with_departures(
        fluid in fluid(),
        tr in 1.0..4.0,
        vr in 0.5..100.0,
    ) {
        let eos = LeeKesler::new(fluid);
        let h = eos.enthalpy_departure(tr, vr).unwrap();
        let s = eos.entropy_departure(tr, vr).unwrap();
        let ln_phi = eos.ln_phi(tr, vr).unwrap();
        prop_assert!((ln_phi - (s - h / tr)).abs() < 1e-10 * (1.0 + ln_phi.abs()));
    }
}

use approx::assert_relative_eq;
use lkws::lee_kesler::{LeeKesler, ReferenceFluid, VolumeInitialization};
use lkws::wu_stiel::{CompressibilityInitialization, KeenanResidual, WuStiel};
use lkws_core::{EosResult, Newton, ScalarResidual, SolverOptions};
use std::error::Error;

const WATER_ACENTRIC_FACTOR: f64 = 0.344;

/// Lee-Kesler compressibility factor of water, interpolated between the
/// simple fluid and the n-octane reference.
fn corresponding_states_compressibility(
    tr: f64,
    pr: f64,
    initialization: VolumeInitialization,
) -> EosResult<f64> {
    let (newton, options) = (Newton::new(), SolverOptions::new());
    let z = |fluid: ReferenceFluid| -> EosResult<f64> {
        let state = LeeKesler::new(fluid).state(tr, pr, initialization, &newton, options)?;
        Ok(state.compressibility())
    };
    let z0 = z(ReferenceFluid::Simple)?;
    let zr = z(ReferenceFluid::Octane)?;
    Ok(z0 + WATER_ACENTRIC_FACTOR / ReferenceFluid::Octane.acentric_factor() * (zr - z0))
}

#[test]
fn near_critical_water() -> Result<(), Box<dyn Error>> {
    let c = WuStiel::new().correct(1.1, 1.0, 1.0, &Newton::new(), SolverOptions::new())?;
    assert!(c.compressibility > 0.0 && c.compressibility < 5.0);
    assert!(c.enthalpy_departure.is_finite() && c.entropy_departure.is_finite());
    assert_relative_eq!(c.compressibility, 0.16222298747278321, max_relative = 1e-8);
    Ok(())
}

#[test]
fn water_vapor() -> Result<(), Box<dyn Error>> {
    let z = corresponding_states_compressibility(0.8, 0.1, VolumeInitialization::Vapor)?;
    assert_relative_eq!(z, 0.9151484333994999, max_relative = 1e-8);

    let c = WuStiel::new().correct(z, 0.8, 0.1, &Newton::new(), SolverOptions::new())?;
    assert_relative_eq!(c.compressibility, 0.8982502719414805, max_relative = 1e-8);
    // the polar correction is small for the dilute vapor
    assert!((c.compressibility - z).abs() / z < 0.05);
    Ok(())
}

#[test]
fn supercritical_water() -> Result<(), Box<dyn Error>> {
    let z = corresponding_states_compressibility(1.1, 0.5, VolumeInitialization::Vapor)?;
    assert_relative_eq!(z, 0.8656418733106896, max_relative = 1e-8);

    let c = WuStiel::new().correct(z, 1.1, 0.5, &Newton::new(), SolverOptions::new())?;
    assert_relative_eq!(c.compressibility, 0.8541100797005318, max_relative = 1e-8);
    assert_relative_eq!(c.enthalpy_departure, 0.5767220199727796, max_relative = 1e-7);
    assert_relative_eq!(c.entropy_departure, 0.44017097288314366, max_relative = 1e-7);
    Ok(())
}

#[test]
fn liquid_water() -> Result<(), Box<dyn Error>> {
    let z = corresponding_states_compressibility(0.6, 0.01, VolumeInitialization::Liquid)?;
    assert_relative_eq!(z, 0.001574682268317301, max_relative = 1e-7);
    assert_eq!(
        CompressibilityInitialization::from_trial(z)?,
        CompressibilityInitialization::Liquid
    );

    let ws = WuStiel::new();
    let c = ws.correct(z, 0.6, 0.01, &Newton::new(), SolverOptions::new())?;
    assert_relative_eq!(c.compressibility, 0.0014432393698556472, max_relative = 1e-8);
    assert!(c.density > 0.9 && c.density < 1.0);

    let residual = KeenanResidual::new(ws.parameters(), 0.6, 0.01)?;
    assert!(residual.residual(c.compressibility)?.abs() < 1e-10);
    Ok(())
}

//! Parallel sweeps over operating conditions.
//!
//! Every sweep point is an independent pure evaluation, so points run in
//! parallel with `rayon`. A failure at any point aborts the sweep and
//! reports the condition it failed at.

use rayon::prelude::*;

use crate::error::{SimError, SimResult};
use wf_aero::{AirfoilModel, Inflow};
use wf_profile::TurbineProfile;
use wf_solver::{OperatingPoint, operating_point, solve_induction};

/// Reference wind speed for dimensionless sweeps; C_dax, C_p and a depend
/// only on the tip-speed ratio and pitch, not on the wind speed itself.
pub const REFERENCE_WIND: f64 = 10.0;

/// One point of the Cp–λ characteristic.
#[derive(Clone, Copy, Debug)]
pub struct CpLambdaPoint {
    /// Tip-speed ratio λ
    pub tip_speed_ratio: f64,
    /// Thrust coefficient C_dax
    pub thrust_coefficient: f64,
    /// Power coefficient C_p
    pub power_coefficient: f64,
    /// Induction factor a
    pub induction: f64,
}

/// Equilibrium operating points over a set of wind speeds.
///
/// Points are solved in parallel; the result preserves the input order.
pub fn power_curve(
    airfoil: &dyn AirfoilModel,
    profile: &TurbineProfile,
    wind_speeds: &[f64],
) -> SimResult<Vec<OperatingPoint>> {
    if wind_speeds.is_empty() {
        return Err(SimError::InvalidArg {
            what: "wind speed sweep must not be empty",
        });
    }

    tracing::debug!(points = wind_speeds.len(), "power curve sweep");
    wind_speeds
        .par_iter()
        .map(|&v| {
            operating_point(airfoil, profile, v).map_err(|source| SimError::SweepPoint {
                at: v,
                source,
            })
        })
        .collect()
}

/// Dimensionless rotor characteristic versus tip-speed ratio at fixed pitch.
///
/// Evaluated at [`REFERENCE_WIND`]; the coefficients are wind-speed
/// independent.
pub fn cp_lambda(
    airfoil: &dyn AirfoilModel,
    profile: &TurbineProfile,
    pitch_deg: f64,
    tip_speed_ratios: &[f64],
) -> SimResult<Vec<CpLambdaPoint>> {
    if tip_speed_ratios.is_empty() {
        return Err(SimError::InvalidArg {
            what: "tip-speed ratio sweep must not be empty",
        });
    }

    tracing::debug!(points = tip_speed_ratios.len(), pitch_deg, "Cp-lambda sweep");
    tip_speed_ratios
        .par_iter()
        .map(|&lambda| {
            let rotor_speed = lambda * REFERENCE_WIND / profile.turbine.rotor_radius;
            let inflow = Inflow::steady(REFERENCE_WIND, pitch_deg, rotor_speed);
            let bem = solve_induction(airfoil, profile, &inflow)
                .map_err(|source| SimError::SweepPoint { at: lambda, source })?;
            Ok(CpLambdaPoint {
                tip_speed_ratio: lambda,
                thrust_coefficient: bem.loads.thrust_coefficient,
                power_coefficient: bem.loads.power_coefficient,
                induction: bem.induction,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wf_aero::LinearAirfoil;
    use wf_profile::nrel_5mw;

    #[test]
    fn power_curve_preserves_order_and_regimes() {
        let profile = nrel_5mw();
        let airfoil = LinearAirfoil::new(0.1, 0.01).unwrap();

        let winds = [6.0, 8.0, 10.0, 14.0, 18.0];
        let curve = power_curve(&airfoil, &profile, &winds).unwrap();

        assert_eq!(curve.len(), winds.len());
        for (op, &v) in curve.iter().zip(&winds) {
            assert_eq!(op.wind_speed, v);
        }
        // below rated, pitch stays at the rated pitch
        assert_eq!(curve[0].pitch_deg, profile.nominal.pitch_deg);
        // above rated, rotor speed stays at its rated value
        assert_eq!(curve[4].rotor_speed, profile.rotor_speed_nom());
    }

    #[test]
    fn power_curve_rejects_an_empty_sweep() {
        let profile = nrel_5mw();
        let airfoil = LinearAirfoil::new(0.1, 0.01).unwrap();
        assert!(matches!(
            power_curve(&airfoil, &profile, &[]),
            Err(SimError::InvalidArg { .. })
        ));
    }

    #[test]
    fn cp_lambda_matches_the_wind_independent_coefficients() {
        let profile = nrel_5mw();
        let airfoil = LinearAirfoil::new(0.1, 0.01).unwrap();

        let points = cp_lambda(&airfoil, &profile, profile.nominal.pitch_deg, &[5.0, 7.3, 9.0])
            .unwrap();
        assert_eq!(points.len(), 3);
        for p in &points {
            assert!(p.power_coefficient.is_finite());
            assert!(p.induction > 0.0);
        }

        // repeat one point at a different wind speed by hand; the
        // dimensionless numbers must agree
        let lambda = 7.3;
        let wind = 6.0;
        let inflow = Inflow::steady(wind, profile.nominal.pitch_deg, lambda * wind / 63.0);
        let bem = solve_induction(&airfoil, &profile, &inflow).unwrap();
        let reference = &points[1];
        assert!(
            (bem.loads.power_coefficient - reference.power_coefficient).abs()
                < 1e-6 * reference.power_coefficient.abs()
        );
        assert!((bem.induction - reference.induction).abs() < 1e-6);
    }

    #[test]
    fn sweep_failure_names_the_point() {
        let profile = nrel_5mw();
        let airfoil = LinearAirfoil::new(0.1, 0.01).unwrap();

        // a negative wind speed cannot have an operating point
        let err = power_curve(&airfoil, &profile, &[8.0, -1.0]).unwrap_err();
        match err {
            SimError::SweepPoint { at, .. } => assert_eq!(at, -1.0),
            other => panic!("unexpected error: {other}"),
        }
    }
}

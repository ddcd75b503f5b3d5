//! Nonlinear equations of motion of the turbine.
//!
//! Three coupled second-order subsystems reduced to first order:
//!
//! ```text
//! flap:       β̈ = (M_β − (k_b + J_b·ω_r²)·β) / J_b
//! tower:      ẍ = (D_ax − d_t·ẋ − k_t·x) / m_t
//! drivetrain: ω̇_r = (M_r − d_r·ε̇ − k_r·ε) / J_r
//!             ε̈  = (J_tot/J_r·M_r + J_tot/(ν²J_g)·ν·M_g − d_r·ε̇ − k_r·ε) / J_tot
//! ```
//!
//! with J_tot = ν²·J_g·J_r/(ν²·J_g + J_r) and generator shaft speed
//! ω_g = ν·(ω_r − ε̇). The flap spring is stiffened centrifugally by
//! J_b·ω_r².
//!
//! Aerodynamic loads use the blade-element method at a frozen induction
//! factor: induction dynamics are much slower than the structural dynamics,
//! so a is held at its operating-point value during fast transients.

use crate::error::ModelResult;
use crate::generator::generator;
use crate::state::{TurbineInput, TurbineOutputs, TurbineState};
use wf_aero::{AirfoilModel, Inflow, rotor_loads};
use wf_profile::TurbineProfile;

/// Evaluate the state derivative Ẋ and the outputs Y.
///
/// A pure function of (state, input, frozen induction, profile); nothing is
/// cached between calls.
pub fn turbine_dynamics(
    airfoil: &dyn AirfoilModel,
    profile: &TurbineProfile,
    state: &TurbineState,
    input: &TurbineInput,
    frozen_induction: f64,
) -> ModelResult<(TurbineState, TurbineOutputs)> {
    let t = &profile.turbine;

    let inflow = Inflow {
        wind_speed: input.wind_speed,
        pitch_deg: input.pitch_deg,
        flap_rate: state.flap_rate,
        rotor_speed: state.rotor_speed,
        tower_rate: state.tower_rate,
    };
    let loads = rotor_loads(airfoil, profile, frozen_induction, &inflow)?;

    let shaft_speed = t.gearbox_ratio * (state.rotor_speed - state.torsion_rate);
    let gen_out = generator(profile, shaft_speed)?;

    let j_tot = profile.drivetrain_inertia();
    let torsion_load =
        t.drivetrain_damping * state.torsion_rate + t.drivetrain_stiffness * state.torsion_angle;

    let derivative = TurbineState {
        flap_angle: state.flap_rate,
        flap_rate: (loads.flap_moment
            - (t.flap_stiffness + t.blade_inertia * state.rotor_speed.powi(2))
                * state.flap_angle)
            / t.blade_inertia,
        tower_displacement: state.tower_rate,
        tower_rate: (loads.axial_force
            - t.tower_damping * state.tower_rate
            - t.tower_stiffness * state.tower_displacement)
            / t.tower_mass,
        rotor_speed: (loads.rotor_torque - torsion_load) / t.rotor_inertia,
        torsion_angle: state.torsion_rate,
        torsion_rate: (j_tot / t.rotor_inertia * loads.rotor_torque
            + j_tot / (t.gearbox_ratio.powi(2) * t.generator_inertia)
                * t.gearbox_ratio
                * gen_out.torque
            - torsion_load)
            / j_tot,
    };

    let outputs = TurbineOutputs {
        axial_force: loads.axial_force,
        flap_moment: loads.flap_moment,
        rotor_torque: loads.rotor_torque,
        generator_power: gen_out.power,
        pitch_deg: input.pitch_deg,
        wind_speed: input.wind_speed,
    };

    Ok((derivative, outputs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wf_aero::LinearAirfoil;
    use wf_profile::nrel_5mw;

    #[test]
    fn kinematic_identities_hold() {
        let profile = nrel_5mw();
        let airfoil = LinearAirfoil::new(0.1, 0.01).unwrap();
        let state = TurbineState {
            flap_angle: 0.02,
            flap_rate: 0.005,
            tower_displacement: 0.1,
            tower_rate: 0.01,
            rotor_speed: 1.2,
            torsion_angle: 0.003,
            torsion_rate: 0.001,
        };
        let input = TurbineInput {
            pitch_deg: -1.5,
            wind_speed: 10.0,
        };

        let (xdot, _) = turbine_dynamics(&airfoil, &profile, &state, &input, 0.3).unwrap();
        assert_eq!(xdot.flap_angle, state.flap_rate);
        assert_eq!(xdot.tower_displacement, state.tower_rate);
        assert_eq!(xdot.torsion_angle, state.torsion_rate);
    }

    #[test]
    fn structural_rows_match_closed_form() {
        let profile = nrel_5mw();
        let t = &profile.turbine;
        let airfoil = LinearAirfoil::new(0.1, 0.01).unwrap();
        let state = TurbineState {
            flap_angle: 0.02,
            flap_rate: 0.0,
            tower_displacement: 0.1,
            tower_rate: 0.0,
            rotor_speed: 1.2,
            torsion_angle: 0.003,
            torsion_rate: 0.0,
        };
        let input = TurbineInput {
            pitch_deg: -1.5,
            wind_speed: 10.0,
        };

        let (xdot, y) = turbine_dynamics(&airfoil, &profile, &state, &input, 0.3).unwrap();

        let flap_expected = (y.flap_moment
            - (t.flap_stiffness + t.blade_inertia * 1.2 * 1.2) * 0.02)
            / t.blade_inertia;
        assert!((xdot.flap_rate - flap_expected).abs() < 1e-9 * flap_expected.abs());

        let tower_expected = (y.axial_force - t.tower_stiffness * 0.1) / t.tower_mass;
        assert!((xdot.tower_rate - tower_expected).abs() < 1e-9 * tower_expected.abs());

        let rotor_expected =
            (y.rotor_torque - t.drivetrain_stiffness * 0.003) / t.rotor_inertia;
        assert!((xdot.rotor_speed - rotor_expected).abs() < 1e-9 * rotor_expected.abs());
    }

    #[test]
    fn outputs_feed_inputs_through() {
        let profile = nrel_5mw();
        let airfoil = LinearAirfoil::new(0.1, 0.01).unwrap();
        let state = TurbineState {
            rotor_speed: 1.2,
            ..Default::default()
        };
        let input = TurbineInput {
            pitch_deg: 2.5,
            wind_speed: 9.0,
        };

        let (_, y) = turbine_dynamics(&airfoil, &profile, &state, &input, 0.25).unwrap();
        assert_eq!(y.pitch_deg, 2.5);
        assert_eq!(y.wind_speed, 9.0);
        assert!(y.generator_power > 0.0);
    }

    #[test]
    fn reversed_shaft_is_rejected() {
        let profile = nrel_5mw();
        let airfoil = LinearAirfoil::new(0.1, 0.01).unwrap();
        // torsion rate exceeding rotor speed drives the generator shaft
        // speed non-positive
        let state = TurbineState {
            rotor_speed: 1.0,
            torsion_rate: 1.5,
            ..Default::default()
        };
        let input = TurbineInput {
            pitch_deg: 0.0,
            wind_speed: 10.0,
        };
        assert!(turbine_dynamics(&airfoil, &profile, &state, &input, 0.3).is_err());
    }
}

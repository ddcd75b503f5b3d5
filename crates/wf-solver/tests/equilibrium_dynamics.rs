//! Cross-crate consistency: a resolved operating point must be a fixed
//! point of the nonlinear equations of motion when the induction factor is
//! frozen at its equilibrium value.

use wf_aero::LinearAirfoil;
use wf_model::{TurbineInput, TurbineState, turbine_dynamics};
use wf_profile::nrel_5mw;
use wf_solver::operating_point;

#[test]
fn partial_load_operating_point_is_a_fixed_point_of_the_dynamics() {
    let profile = nrel_5mw();
    let airfoil = LinearAirfoil::new(0.1, 0.01).unwrap();

    let op = operating_point(&airfoil, &profile, 8.0).unwrap();

    let state = TurbineState {
        flap_angle: op.flap_angle,
        flap_rate: 0.0,
        tower_displacement: op.tower_displacement,
        tower_rate: 0.0,
        rotor_speed: op.rotor_speed,
        torsion_angle: op.torsion_angle,
        torsion_rate: 0.0,
    };
    let input = TurbineInput {
        pitch_deg: op.pitch_deg,
        wind_speed: op.wind_speed,
    };

    let (rate, outputs) =
        turbine_dynamics(&airfoil, &profile, &state, &input, op.induction).unwrap();

    // Position rates are the (zero) velocity states
    assert_eq!(rate.flap_angle, 0.0);
    assert_eq!(rate.tower_displacement, 0.0);
    assert_eq!(rate.torsion_angle, 0.0);

    // Accelerations vanish at the closed-form steady states
    assert!(rate.flap_rate.abs() < 1e-6, "flap: {}", rate.flap_rate);
    assert!(rate.tower_rate.abs() < 1e-6, "tower: {}", rate.tower_rate);
    assert!(rate.rotor_speed.abs() < 1e-6, "rotor: {}", rate.rotor_speed);
    assert!(
        rate.torsion_rate.abs() < 1e-4,
        "torsion: {}",
        rate.torsion_rate
    );

    // The plant sees the same aerodynamic loads the solver settled on
    assert!((outputs.axial_force - op.axial_force).abs() < 1e-9 * op.axial_force.abs());
    assert!((outputs.rotor_torque - op.rotor_torque).abs() < 1e-9 * op.rotor_torque.abs());
}

#[test]
fn full_load_operating_point_is_a_fixed_point_of_the_dynamics() {
    let profile = nrel_5mw();
    let airfoil = LinearAirfoil::new(0.1, 0.01).unwrap();

    let op = operating_point(&airfoil, &profile, 16.0).unwrap();
    assert_eq!(op.rotor_speed, profile.rotor_speed_nom());

    let state = TurbineState {
        flap_angle: op.flap_angle,
        flap_rate: 0.0,
        tower_displacement: op.tower_displacement,
        tower_rate: 0.0,
        rotor_speed: op.rotor_speed,
        torsion_angle: op.torsion_angle,
        torsion_rate: 0.0,
    };
    let input = TurbineInput {
        pitch_deg: op.pitch_deg,
        wind_speed: op.wind_speed,
    };

    let (rate, _) = turbine_dynamics(&airfoil, &profile, &state, &input, op.induction).unwrap();
    assert!(rate.flap_rate.abs() < 1e-6);
    assert!(rate.tower_rate.abs() < 1e-6);
}

//! Built-in reference profiles.

use crate::schema::{
    AeroParams, AirfoilDef, BladeGeometry, NominalPoint, TurbineParams, TurbineProfile,
};

/// NREL 5MW reference turbine.
///
/// Flap, tower and drivetrain stiffnesses are derived from the published
/// natural frequencies; tower damping is 1% critical, drivetrain damping 5%
/// critical on the combined inertia.
pub fn nrel_5mw() -> TurbineProfile {
    let blade_inertia = 11_776_047.0;
    let flap_freq = 0.668 * 2.0 * std::f64::consts::PI; // rad/s
    let flap_stiffness = blade_inertia * flap_freq.powi(2);

    let tower_mass = 347_460.0 + 240_000.0; // tower + nacelle
    let tower_freq = 0.32 * 2.0 * std::f64::consts::PI; // rad/s
    let tower_stiffness = tower_mass * tower_freq.powi(2);
    let tower_damping = 2.0 * 0.01 * (tower_stiffness * tower_mass).sqrt();

    let gearbox_ratio = 97.0;
    let rotor_inertia = 3.0 * blade_inertia;
    let generator_inertia = 534.116;
    let drivetrain_stiffness = 867_637_000.0;
    let nu2_jg = gearbox_ratio * gearbox_ratio * generator_inertia;
    let combined_inertia = nu2_jg * rotor_inertia / (nu2_jg + rotor_inertia);
    let drivetrain_damping = 2.0 * 0.05 * (drivetrain_stiffness * combined_inertia).sqrt();

    TurbineProfile {
        name: "NREL 5MW".to_string(),
        aero: AeroParams {
            air_density: 1.25,
            power_loss_factor: 0.9,
        },
        turbine: TurbineParams {
            rotor_radius: 63.0,
            blade_count: 3,
            blade_inertia,
            flap_stiffness,
            tower_mass,
            tower_damping,
            tower_stiffness,
            gearbox_ratio,
            rotor_inertia,
            drivetrain_damping,
            drivetrain_stiffness,
            generator_inertia,
            rated_power: 4_766_949.0,
            generator_efficiency: 0.9,
        },
        geometry: BladeGeometry {
            radius: vec![
                9.70, 13.80, 17.90, 22.00, 26.10, 30.20, 34.30, 38.40, 42.50, 46.60, 50.70,
                54.80, 57.5333, 60.2667, 63.00,
            ],
            chord: vec![
                4.348, 4.625, 4.580, 4.356, 4.131, 3.878, 3.624, 3.379, 3.133, 2.887, 2.641,
                2.400, 2.218, 1.821, 0.961,
            ],
            twist_deg: vec![
                13.308, 12.38, 10.76, 9.596, 8.408, 7.167, 5.952, 4.761, 3.638, 2.697, 1.926,
                1.131, 0.593, 0.215, 0.0,
            ],
        },
        nominal: NominalPoint {
            wind_speed: 11.4,
            tip_speed_ratio: 7.3,
            pitch_deg: -1.5,
        },
        airfoil: Some(AirfoilDef::Linear {
            lift_slope: 0.1,
            drag: 0.01,
        }),
    }
}

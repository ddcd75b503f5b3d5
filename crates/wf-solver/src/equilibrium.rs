//! Equilibrium operating point of the turbine for a known wind speed.
//!
//! Two regimes, selected by comparing the wind speed to the rated wind
//! speed:
//!
//! - **Partial load** (V ≤ V_n): pitch is held at the rated pitch and the
//!   rotor speed balances aerodynamic torque against the generator reaction
//!   torque referred to the low-speed shaft. It is not assumed that the
//!   turbine operates at its optimal tip-speed ratio.
//! - **Full load** (V > V_n): the rotor speed is held at its rated value and
//!   the pitch regulates the aerodynamic power to the nominal power, which
//!   is evaluated once at (V_n, θ_n, ω_r,nom). Pitch control is to
//!   zero-lift, so the search starts from a high pitch angle.
//!
//! The remaining steady states follow from the zero-rate equations of
//! motion in closed form.

use crate::error::{SolverError, SolverResult};
use crate::induction::{InductionSolution, solve_induction_with};
use crate::scalar::{SecantConfig, secant_solve};
use wf_aero::{AirfoilModel, Inflow};
use wf_model::generator;
use wf_profile::TurbineProfile;

/// Tip-speed-ratio seed for the partial-load rotor speed search.
const PARTIAL_LOAD_LAMBDA_SEED: f64 = 7.5;

/// Pitch seed (degrees) for the full-load power regulation search.
const FULL_LOAD_PITCH_SEED_DEG: f64 = 25.0;

/// Steady operating point: the state after equilibrium between all acting
/// forces, valid for one (profile, wind speed) pair.
#[derive(Clone, Copy, Debug)]
pub struct OperatingPoint {
    /// Wind speed V (m/s) this point was solved for
    pub wind_speed: f64,
    /// Blade pitch angle θ (degrees)
    pub pitch_deg: f64,
    /// Rotor angular velocity ω_r0 (rad/s)
    pub rotor_speed: f64,
    /// Generator angular velocity ω_g0 = ν·ω_r0 (rad/s)
    pub generator_speed: f64,
    /// Flap angle β0 (rad)
    pub flap_angle: f64,
    /// Tower top displacement x0 (m)
    pub tower_displacement: f64,
    /// Transmission torsion angle ε0 (rad)
    pub torsion_angle: f64,
    /// Induction factor a0
    pub induction: f64,
    /// Axial force D_ax0 (N)
    pub axial_force: f64,
    /// Aerodynamic flap moment M_β0 (N·m)
    pub flap_moment: f64,
    /// Aerodynamic rotor torque M_r0 (N·m)
    pub rotor_torque: f64,
    /// Aerodynamic power P0 (W)
    pub aero_power: f64,
    /// Thrust coefficient C_dax0
    pub thrust_coefficient: f64,
    /// Power coefficient C_p0
    pub power_coefficient: f64,
}

/// Solve the operating point with default root-finder settings.
pub fn operating_point(
    airfoil: &dyn AirfoilModel,
    profile: &TurbineProfile,
    wind_speed: f64,
) -> SolverResult<OperatingPoint> {
    operating_point_with(airfoil, profile, wind_speed, &SecantConfig::default())
}

/// Solve the operating point with caller-supplied root-finder settings.
pub fn operating_point_with(
    airfoil: &dyn AirfoilModel,
    profile: &TurbineProfile,
    wind_speed: f64,
    config: &SecantConfig,
) -> SolverResult<OperatingPoint> {
    if !(wind_speed > 0.0) {
        return Err(SolverError::InvalidArg {
            what: "wind speed must be positive",
        });
    }

    let t = &profile.turbine;
    let rated_wind = profile.nominal.wind_speed;
    let rated_pitch = profile.nominal.pitch_deg;
    let rotor_speed_nom = profile.rotor_speed_nom();

    let (pitch_deg, rotor_speed) = if wind_speed <= rated_wind {
        // Partial load: pitch fixed, rotor speed from torque balance
        let torque_residual = |omega_r: f64| -> SolverResult<f64> {
            let inflow = Inflow::steady(wind_speed, rated_pitch, omega_r);
            let bem = solve_induction_with(airfoil, profile, &inflow, config)?;
            let gen_out = generator(profile, t.gearbox_ratio * omega_r)?;
            Ok(bem.loads.rotor_torque - t.gearbox_ratio * gen_out.torque)
        };

        let seed = PARTIAL_LOAD_LAMBDA_SEED * wind_speed / t.rotor_radius;
        let search = SecantConfig {
            bounds: Some((1e-3, f64::INFINITY)),
            ..config.clone()
        };
        let root = secant_solve(seed, torque_residual, "rotor speed balance", &search)?;
        (rated_pitch, root.x)
    } else {
        // Full load: rotor speed fixed, pitch from power regulation against
        // the nominal aerodynamic power
        let nominal_inflow = Inflow::steady(rated_wind, rated_pitch, rotor_speed_nom);
        let nominal_power =
            solve_induction_with(airfoil, profile, &nominal_inflow, config)?.loads.power;

        let power_residual = |pitch: f64| -> SolverResult<f64> {
            let inflow = Inflow::steady(wind_speed, pitch, rotor_speed_nom);
            let bem = solve_induction_with(airfoil, profile, &inflow, config)?;
            Ok(bem.loads.power - nominal_power)
        };

        let root = secant_solve(
            FULL_LOAD_PITCH_SEED_DEG,
            power_residual,
            "pitch power regulation",
            config,
        )?;
        (root.x, rotor_speed_nom)
    };

    // Final blade element-momentum evaluation at the resolved point
    let inflow = Inflow::steady(wind_speed, pitch_deg, rotor_speed);
    let InductionSolution {
        induction, loads, ..
    } = solve_induction_with(airfoil, profile, &inflow, config)?;

    // Closed-form steady states from the zero-rate equations of motion
    let flap_angle =
        loads.flap_moment / (t.flap_stiffness + t.blade_inertia * rotor_speed.powi(2));
    let tower_displacement = loads.axial_force / t.tower_stiffness;
    let torsion_angle = loads.rotor_torque / t.drivetrain_stiffness;
    let generator_speed = t.gearbox_ratio * rotor_speed;

    tracing::debug!(
        wind_speed,
        pitch_deg,
        rotor_speed,
        induction,
        "operating point resolved"
    );

    Ok(OperatingPoint {
        wind_speed,
        pitch_deg,
        rotor_speed,
        generator_speed,
        flap_angle,
        tower_displacement,
        torsion_angle,
        induction,
        axial_force: loads.axial_force,
        flap_moment: loads.flap_moment,
        rotor_torque: loads.rotor_torque,
        aero_power: loads.power,
        thrust_coefficient: loads.thrust_coefficient,
        power_coefficient: loads.power_coefficient,
    })
}

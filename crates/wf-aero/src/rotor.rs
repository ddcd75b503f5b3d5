//! Blade-element force integration.
//!
//! Integrates airfoil lift and drag over the blade stations for a known
//! induction factor, producing the rotor-plane loads and the dimensionless
//! thrust and power coefficients.
//!
//! ## Model
//!
//! Each blade element uses the midpoint of its station's radius, chord and
//! twist. With perpendicular and tangential velocity components
//!
//! ```text
//! V_p = V(1 − a) − β̇·r − ẋ        V_t = ω_r·r
//! ```
//!
//! the inflow angle is φ = atan(V_p/V_t) and the angle of attack (degrees)
//! is α = (180/π)·φ − (θ + twist). Lift and drag per element are
//! 0.5·ρ·W²·c·Δr times the airfoil coefficients, resolved into the
//! rotor-normal and in-plane directions via cos φ / sin φ. The power loss
//! factor applies to the lift contribution of the torque only, not drag.
//!
//! ## Sign and summation conventions
//!
//! Axial force and rotor torque are whole-rotor quantities and carry the
//! blade-count factor. The flap moment is per blade (flap dynamics are
//! modeled for a single blade) and carries no blade-count factor.

use crate::airfoil::AirfoilModel;
use crate::error::{AeroError, AeroResult, check_finite};
use wf_core::rad_to_deg;
use wf_profile::TurbineProfile;

/// Instantaneous flow and motion state seen by the rotor, one per
/// evaluation. A pure value tuple; nothing is retained between calls.
#[derive(Clone, Copy, Debug)]
pub struct Inflow {
    /// Undisturbed wind speed V (m/s)
    pub wind_speed: f64,
    /// Blade pitch angle θ (degrees)
    pub pitch_deg: f64,
    /// Flap angular velocity β̇ (rad/s)
    pub flap_rate: f64,
    /// Rotor angular velocity ω_r (rad/s)
    pub rotor_speed: f64,
    /// Tower top velocity ẋ (m/s)
    pub tower_rate: f64,
}

impl Inflow {
    /// Steady inflow: flap and tower rates zero.
    pub fn steady(wind_speed: f64, pitch_deg: f64, rotor_speed: f64) -> Self {
        Self {
            wind_speed,
            pitch_deg,
            flap_rate: 0.0,
            rotor_speed,
            tower_rate: 0.0,
        }
    }
}

/// Aerodynamic loads on the rotor, recomputed on every call, never cached.
#[derive(Clone, Copy, Debug)]
pub struct RotorLoads {
    /// Axial force D_ax (N), whole rotor
    pub axial_force: f64,
    /// Aerodynamic flap moment M_β (N·m), per blade
    pub flap_moment: f64,
    /// Aerodynamic rotor torque M_r (N·m), whole rotor
    pub rotor_torque: f64,
    /// Aerodynamic power P = ω_r·M_r (W)
    pub power: f64,
    /// Thrust coefficient C_dax = D_ax/(½ρπR²V²)
    pub thrust_coefficient: f64,
    /// Power coefficient C_p = P/(½ρπR²V³)
    pub power_coefficient: f64,
}

/// Integrate blade-element forces for a known induction factor.
///
/// # Errors
/// Returns `AeroError::NonPhysical` when the rotor is at standstill
/// (ω_r ≤ 0 makes the inflow angle undefined) or the wind speed is not
/// positive (the coefficients are undefined), and when any accumulated load
/// is non-finite.
pub fn rotor_loads(
    airfoil: &dyn AirfoilModel,
    profile: &TurbineProfile,
    induction: f64,
    inflow: &Inflow,
) -> AeroResult<RotorLoads> {
    if !(inflow.rotor_speed > 0.0) {
        return Err(AeroError::NonPhysical {
            what: "rotor speed must be positive (inflow angle undefined at standstill)",
        });
    }
    if !(inflow.wind_speed > 0.0) {
        return Err(AeroError::NonPhysical {
            what: "wind speed must be positive",
        });
    }

    let rho = profile.aero.air_density;
    let kp = profile.aero.power_loss_factor;
    let blades = f64::from(profile.turbine.blade_count);
    let geometry = &profile.geometry;

    let mut axial_force = 0.0;
    let mut flap_moment = 0.0;
    let mut rotor_torque = 0.0;

    for i in 0..profile.element_count() {
        let r_mid = 0.5 * (geometry.radius[i] + geometry.radius[i + 1]);
        let chord_mid = 0.5 * (geometry.chord[i] + geometry.chord[i + 1]);
        let twist_mid = 0.5 * (geometry.twist_deg[i] + geometry.twist_deg[i + 1]);
        let dr = geometry.radius[i + 1] - geometry.radius[i];

        let v_perp =
            inflow.wind_speed * (1.0 - induction) - inflow.flap_rate * r_mid - inflow.tower_rate;
        let v_tan = inflow.rotor_speed * r_mid;
        let w_sq = v_perp * v_perp + v_tan * v_tan;

        let phi = (v_perp / v_tan).atan();
        let alpha_deg = rad_to_deg(phi) - (inflow.pitch_deg + twist_mid);

        let q = 0.5 * rho * w_sq * chord_mid * dr;
        let lift = airfoil.lift_coefficient(alpha_deg) * q;
        let drag = airfoil.drag_coefficient(alpha_deg) * q;

        let (sin_phi, cos_phi) = phi.sin_cos();
        let normal = lift * cos_phi + drag * sin_phi;

        axial_force += blades * normal;
        flap_moment += r_mid * normal;
        rotor_torque += blades * r_mid * (kp * lift * sin_phi - drag * cos_phi);
    }

    let power = inflow.rotor_speed * rotor_torque;
    let reference = 0.5 * rho * profile.rotor_area() * inflow.wind_speed.powi(2);
    let thrust_coefficient = axial_force / reference;
    let power_coefficient = power / (reference * inflow.wind_speed);

    check_finite(axial_force, "axial force")?;
    check_finite(flap_moment, "flap moment")?;
    check_finite(rotor_torque, "rotor torque")?;

    Ok(RotorLoads {
        axial_force,
        flap_moment,
        rotor_torque,
        power,
        thrust_coefficient,
        power_coefficient,
    })
}

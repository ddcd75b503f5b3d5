//! Profile schema definitions.
//!
//! The record is structured as four ordered groups: aerodynamic constants,
//! turbine (structural + drivetrain) constants, blade geometry tables, and
//! the nominal operating point. All values are SI unless the field name says
//! otherwise; angles that interact with airfoil tables (pitch, twist) are in
//! degrees.

use crate::error::{ProfileError, ProfileResult};
use serde::{Deserialize, Serialize};

/// Aerodynamic constants.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AeroParams {
    /// Air density (kg/m³)
    pub air_density: f64,
    /// Power loss factor; correction for the single-annulus, no-wake-rotation,
    /// no-tip-loss simplifications. Applied to the lift contribution of the
    /// rotor torque only.
    pub power_loss_factor: f64,
}

/// Structural and drivetrain constants.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TurbineParams {
    /// Rotor radius (m)
    pub rotor_radius: f64,
    /// Number of blades
    pub blade_count: u32,
    /// Blade inertia with respect to the flapping hinge (kg·m²)
    pub blade_inertia: f64,
    /// Flap spring stiffness (N·m/rad)
    pub flap_stiffness: f64,
    /// Equivalent tower + nacelle mass (kg)
    pub tower_mass: f64,
    /// Tower damping (N/(m/s))
    pub tower_damping: f64,
    /// Tower stiffness (N/m)
    pub tower_stiffness: f64,
    /// Transmission (gearbox) ratio
    pub gearbox_ratio: f64,
    /// Rotor inertia (kg·m²)
    pub rotor_inertia: f64,
    /// Transmission damping (N·m/(rad/s))
    pub drivetrain_damping: f64,
    /// Transmission stiffness (N·m/rad)
    pub drivetrain_stiffness: f64,
    /// Generator inertia (kg·m²)
    pub generator_inertia: f64,
    /// Nominal electrical generator power (W)
    pub rated_power: f64,
    /// Generator efficiency
    pub generator_efficiency: f64,
}

/// Blade geometry tables: section borders from the aerodynamic root to the
/// tip. N_s blade elements are described by N_s + 1 border values, so all
/// three tables must have the same length and `radius` must increase
/// strictly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BladeGeometry {
    /// Radial positions of section borders (m); last value is the tip
    pub radius: Vec<f64>,
    /// Chord at section borders (m)
    pub chord: Vec<f64>,
    /// Twist at section borders (degrees); tip twist is zero by convention
    pub twist_deg: Vec<f64>,
}

/// Nominal (rated) operating values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NominalPoint {
    /// Rated wind speed (m/s)
    pub wind_speed: f64,
    /// Rated tip-speed ratio
    pub tip_speed_ratio: f64,
    /// Rated blade pitch angle (degrees)
    pub pitch_deg: f64,
}

/// Airfoil coefficient definition, kept as plain data so profiles can carry
/// their airfoil alongside the turbine constants. Model construction lives
/// in wf-aero.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AirfoilDef {
    /// C_l = lift_slope · α (degrees), constant C_d.
    Linear { lift_slope: f64, drag: f64 },
    /// Tabulated C_l(α), C_d(α) with linear interpolation between samples.
    Table {
        alpha_deg: Vec<f64>,
        lift: Vec<f64>,
        drag: Vec<f64>,
    },
}

/// Immutable record of all turbine parameters, loaded once per analysis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TurbineProfile {
    /// Turbine name, e.g. "NREL 5MW"
    pub name: String,
    pub aero: AeroParams,
    pub turbine: TurbineParams,
    pub geometry: BladeGeometry,
    pub nominal: NominalPoint,
    /// Optional airfoil definition bundled with the profile
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub airfoil: Option<AirfoilDef>,
}

impl TurbineProfile {
    /// Validate the record. Malformed geometry is a load-time error, never
    /// silently tolerated.
    pub fn validate(&self) -> ProfileResult<()> {
        let t = &self.turbine;
        let g = &self.geometry;

        for (value, what) in [
            (self.aero.air_density, "air density must be positive"),
            (self.aero.power_loss_factor, "power loss factor must be positive"),
            (t.rotor_radius, "rotor radius must be positive"),
            (t.blade_inertia, "blade inertia must be positive"),
            (t.flap_stiffness, "flap stiffness must be positive"),
            (t.tower_mass, "tower mass must be positive"),
            (t.tower_stiffness, "tower stiffness must be positive"),
            (t.gearbox_ratio, "gearbox ratio must be positive"),
            (t.rotor_inertia, "rotor inertia must be positive"),
            (t.drivetrain_stiffness, "drivetrain stiffness must be positive"),
            (t.generator_inertia, "generator inertia must be positive"),
            (t.rated_power, "rated power must be positive"),
            (self.nominal.wind_speed, "rated wind speed must be positive"),
            (self.nominal.tip_speed_ratio, "rated tip-speed ratio must be positive"),
        ] {
            if !(value > 0.0) {
                return Err(ProfileError::invalid(what));
            }
        }
        if t.tower_damping < 0.0 || t.drivetrain_damping < 0.0 {
            return Err(ProfileError::invalid("damping cannot be negative"));
        }
        if t.generator_efficiency <= 0.0 || t.generator_efficiency > 1.0 {
            return Err(ProfileError::invalid(
                "generator efficiency must be in (0, 1]",
            ));
        }
        if t.blade_count == 0 {
            return Err(ProfileError::invalid("blade count must be at least 1"));
        }

        if g.radius.len() < 2 {
            return Err(ProfileError::invalid(
                "geometry needs at least two section borders (one element)",
            ));
        }
        if g.chord.len() != g.radius.len() || g.twist_deg.len() != g.radius.len() {
            return Err(ProfileError::invalid(format!(
                "geometry tables must have equal length (radius={}, chord={}, twist={})",
                g.radius.len(),
                g.chord.len(),
                g.twist_deg.len()
            )));
        }
        for w in g.radius.windows(2) {
            if w[1] <= w[0] {
                return Err(ProfileError::invalid(
                    "radial positions must increase strictly",
                ));
            }
        }
        let tip = *g.radius.last().unwrap_or(&0.0);
        if (tip - t.rotor_radius).abs() > 1e-6 * t.rotor_radius {
            return Err(ProfileError::invalid(format!(
                "last radial position ({tip}) must equal the rotor radius ({})",
                t.rotor_radius
            )));
        }
        if g.chord.iter().any(|&c| c <= 0.0) {
            return Err(ProfileError::invalid("chord values must be positive"));
        }

        Ok(())
    }

    /// Number of blade elements N_s (one fewer than the border count).
    pub fn element_count(&self) -> usize {
        self.geometry.radius.len() - 1
    }

    /// Swept rotor area πR² (m²).
    pub fn rotor_area(&self) -> f64 {
        std::f64::consts::PI * self.turbine.rotor_radius.powi(2)
    }

    /// Nominal rotor angular velocity λ_n·V_n/R (rad/s).
    pub fn rotor_speed_nom(&self) -> f64 {
        self.nominal.tip_speed_ratio * self.nominal.wind_speed / self.turbine.rotor_radius
    }

    /// Nominal generator shaft angular velocity ν·λ_n·V_n/R (rad/s).
    pub fn generator_speed_nom(&self) -> f64 {
        self.turbine.gearbox_ratio * self.rotor_speed_nom()
    }

    /// Combined drivetrain inertia ν²·J_g·J_r / (ν²·J_g + J_r) (kg·m²).
    pub fn drivetrain_inertia(&self) -> f64 {
        let t = &self.turbine;
        let nu2_jg = t.gearbox_ratio.powi(2) * t.generator_inertia;
        nu2_jg * t.rotor_inertia / (nu2_jg + t.rotor_inertia)
    }
}

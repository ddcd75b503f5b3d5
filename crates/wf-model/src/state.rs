//! Fixed-size state, input and output vectors of the turbine model.
//!
//! Plain ordered structs with array views; the matrix-oriented shape only
//! matters to the linearization, which owns that concern.

/// Number of dynamic states.
pub const STATE_DIM: usize = 7;

/// Number of plant inputs (pitch, wind speed).
pub const INPUT_DIM: usize = 2;

/// Number of observable output channels.
pub const OUTPUT_DIM: usize = 6;

/// Dynamic state X of a wind turbine. Also used for the state derivative Ẋ,
/// where each field holds the time derivative of its namesake.
///
/// Owned by the caller; the model never retains it between evaluations.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TurbineState {
    /// Flap angle β (rad)
    pub flap_angle: f64,
    /// Flap angular velocity β̇ (rad/s)
    pub flap_rate: f64,
    /// Tower top displacement x (m)
    pub tower_displacement: f64,
    /// Tower top velocity ẋ (m/s)
    pub tower_rate: f64,
    /// Rotor angular velocity ω_r (rad/s)
    pub rotor_speed: f64,
    /// Transmission torsion angle ε (rad)
    pub torsion_angle: f64,
    /// Transmission torsion angular velocity ε̇ (rad/s)
    pub torsion_rate: f64,
}

impl TurbineState {
    pub fn to_array(self) -> [f64; STATE_DIM] {
        [
            self.flap_angle,
            self.flap_rate,
            self.tower_displacement,
            self.tower_rate,
            self.rotor_speed,
            self.torsion_angle,
            self.torsion_rate,
        ]
    }

    pub fn from_array(x: [f64; STATE_DIM]) -> Self {
        Self {
            flap_angle: x[0],
            flap_rate: x[1],
            tower_displacement: x[2],
            tower_rate: x[3],
            rotor_speed: x[4],
            torsion_angle: x[5],
            torsion_rate: x[6],
        }
    }
}

/// Plant inputs U.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TurbineInput {
    /// Blade pitch angle θ (degrees)
    pub pitch_deg: f64,
    /// Undisturbed wind speed V (m/s)
    pub wind_speed: f64,
}

impl TurbineInput {
    pub fn to_array(self) -> [f64; INPUT_DIM] {
        [self.pitch_deg, self.wind_speed]
    }

    pub fn from_array(u: [f64; INPUT_DIM]) -> Self {
        Self {
            pitch_deg: u[0],
            wind_speed: u[1],
        }
    }
}

/// Observable outputs Y exposed to linear-system consumers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TurbineOutputs {
    /// Axial force D_ax (N)
    pub axial_force: f64,
    /// Aerodynamic flap moment M_β (N·m)
    pub flap_moment: f64,
    /// Aerodynamic rotor torque M_r (N·m)
    pub rotor_torque: f64,
    /// Electrical generator power P_g (W)
    pub generator_power: f64,
    /// Blade pitch angle θ (degrees), fed through
    pub pitch_deg: f64,
    /// Undisturbed wind speed V (m/s), fed through
    pub wind_speed: f64,
}

impl TurbineOutputs {
    pub fn to_array(self) -> [f64; OUTPUT_DIM] {
        [
            self.axial_force,
            self.flap_moment,
            self.rotor_torque,
            self.generator_power,
            self.pitch_deg,
            self.wind_speed,
        ]
    }
}

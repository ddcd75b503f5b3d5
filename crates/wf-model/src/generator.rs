//! Converter-controlled generator torque/power map.
//!
//! Ideal torque-speed characteristic of a generator plus converter,
//! anchored at the nominal operating point:
//!
//! ```text
//! P_sh = (ω_g/ω_g,nom)³ · P_n/η      ω_g,nom = ν·λ_n·V_n/R
//! M_g  = P_sh/ω_g
//! P_g  = η·P_sh
//! ```
//!
//! At nominal shaft speed the mechanical power is P_n/η and the electrical
//! power is exactly P_n; for constant tip-speed ratio the shaft power scales
//! with ω_g³.

use crate::error::{ModelError, ModelResult};
use wf_profile::TurbineProfile;

/// Generator reaction torque and electrical power.
#[derive(Clone, Copy, Debug)]
pub struct GeneratorOutput {
    /// Generator torque M_g (N·m), on the high-speed shaft
    pub torque: f64,
    /// Electrical power P_g (W)
    pub power: f64,
}

/// Evaluate the generator map at a shaft speed (rad/s).
///
/// # Errors
/// The torque M_g = P_sh/ω_g is undefined at standstill; a non-positive
/// shaft speed is rejected as non-physical.
pub fn generator(profile: &TurbineProfile, shaft_speed: f64) -> ModelResult<GeneratorOutput> {
    if !(shaft_speed > 0.0) {
        return Err(ModelError::NonPhysical {
            what: "generator shaft speed must be positive",
        });
    }

    let t = &profile.turbine;
    let speed_nom = profile.generator_speed_nom();
    let shaft_power = (shaft_speed / speed_nom).powi(3) * t.rated_power / t.generator_efficiency;

    Ok(GeneratorOutput {
        torque: shaft_power / shaft_speed,
        power: t.generator_efficiency * shaft_power,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use wf_profile::nrel_5mw;

    #[test]
    fn nominal_point_is_exact() {
        let profile = nrel_5mw();
        let speed_nom = profile.generator_speed_nom();
        let out = generator(&profile, speed_nom).unwrap();

        let expected_torque =
            profile.turbine.rated_power / (profile.turbine.generator_efficiency * speed_nom);
        assert!((out.torque - expected_torque).abs() < 1e-9 * expected_torque);
        assert!(
            (out.power - profile.turbine.rated_power).abs() < 1e-9 * profile.turbine.rated_power
        );
    }

    #[test]
    fn cubic_speed_law() {
        let profile = nrel_5mw();
        let speed_nom = profile.generator_speed_nom();
        let nominal = generator(&profile, speed_nom).unwrap();
        let half = generator(&profile, 0.5 * speed_nom).unwrap();

        // P_sh ∝ ω³ and M_g = P_sh/ω, so torque scales with ω².
        assert!((half.torque - 0.25 * nominal.torque).abs() < 1e-9 * nominal.torque);
        assert!((half.power - 0.125 * nominal.power).abs() < 1e-9 * nominal.power);
    }

    #[test]
    fn standstill_is_rejected() {
        let profile = nrel_5mw();
        assert!(generator(&profile, 0.0).is_err());
        assert!(generator(&profile, -1.0).is_err());
    }
}

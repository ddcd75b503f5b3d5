//! Momentum-theory thrust closure.
//!
//! The whole rotor plane is treated as one annulus. Up to a = 0.5 the
//! classical actuator-disc relation applies; past that the rotor runs in
//! the turbulent-wake state where momentum theory is invalid and an
//! empirical fit takes over. The two branches meet continuously at the
//! regime boundary: 4·0.5·0.5 = 1.49/(1.99 − 0.5) = 1.
//!
//! The actuator-disc branch extends to negative induction factors (thrust
//! reversal, rotor driving the flow); the equilibrium pitch search passes
//! through deep-stall pitches where that is the only matching regime. The
//! closure is undefined at and beyond a = 1.62.

use crate::error::{AeroError, AeroResult};

/// Upper induction factor for which the actuator-disc relation is valid.
pub const MOMENTUM_VALID_MAX: f64 = 0.5;

/// Upper bound of the empirical turbulent-wake fit; the closure is undefined
/// at and beyond this value.
pub const WAKE_DOMAIN_MAX: f64 = 1.62;

/// Numerator of the empirical turbulent-wake relation.
const WAKE_EMPIRICAL_NUM: f64 = 1.49;

/// Denominator offset of the empirical turbulent-wake relation.
const WAKE_EMPIRICAL_DEN: f64 = 1.99;

/// Physical regime of the rotor wake for a given induction factor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WakeRegime {
    /// a ≤ 0.5: classical actuator-disc momentum theory.
    Momentum,
    /// a ∈ (0.5, 1.62): turbulent-wake state, empirical relation.
    TurbulentWake,
}

impl WakeRegime {
    /// Classify an induction factor, rejecting values where the closure is
    /// undefined.
    pub fn classify(a: f64) -> AeroResult<WakeRegime> {
        if !a.is_finite() || a >= WAKE_DOMAIN_MAX {
            return Err(AeroError::WakeDomain { a });
        }
        if a <= MOMENTUM_VALID_MAX {
            Ok(WakeRegime::Momentum)
        } else {
            Ok(WakeRegime::TurbulentWake)
        }
    }
}

/// Thrust coefficient predicted by momentum theory for an induction factor.
///
/// Callers must keep their search interval below [`WAKE_DOMAIN_MAX`];
/// beyond it the closure is undefined and an error is returned.
pub fn momentum_thrust_coefficient(a: f64) -> AeroResult<f64> {
    match WakeRegime::classify(a)? {
        WakeRegime::Momentum => Ok(4.0 * a * (1.0 - a)),
        WakeRegime::TurbulentWake => Ok(WAKE_EMPIRICAL_NUM / (WAKE_EMPIRICAL_DEN - a)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actuator_disc_branch() {
        assert_eq!(momentum_thrust_coefficient(0.0).unwrap(), 0.0);
        assert!((momentum_thrust_coefficient(0.25).unwrap() - 0.75).abs() < 1e-15);
        assert!((momentum_thrust_coefficient(0.5).unwrap() - 1.0).abs() < 1e-15);
    }

    #[test]
    fn branches_are_continuous_at_the_boundary() {
        let below = momentum_thrust_coefficient(MOMENTUM_VALID_MAX).unwrap();
        let above = momentum_thrust_coefficient(MOMENTUM_VALID_MAX + 1e-12).unwrap();
        assert!((below - 1.0).abs() < 1e-12);
        assert!((above - below).abs() < 1e-9);
    }

    #[test]
    fn turbulent_wake_branch() {
        let ct = momentum_thrust_coefficient(0.99).unwrap();
        assert!((ct - 1.49).abs() < 1e-12);
    }

    #[test]
    fn negative_induction_reverses_the_thrust() {
        let ct = momentum_thrust_coefficient(-0.5).unwrap();
        assert!((ct - (-3.0)).abs() < 1e-12);
    }

    #[test]
    fn undefined_at_the_wake_bound() {
        assert!(matches!(
            momentum_thrust_coefficient(WAKE_DOMAIN_MAX),
            Err(AeroError::WakeDomain { .. })
        ));
        assert!(momentum_thrust_coefficient(2.0).is_err());
        assert!(momentum_thrust_coefficient(f64::NAN).is_err());
    }

    #[test]
    fn regime_classification() {
        assert_eq!(WakeRegime::classify(0.3).unwrap(), WakeRegime::Momentum);
        assert_eq!(WakeRegime::classify(-0.2).unwrap(), WakeRegime::Momentum);
        assert_eq!(
            WakeRegime::classify(0.8).unwrap(),
            WakeRegime::TurbulentWake
        );
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn actuator_disc_relation_is_exact(a in -1.0_f64..=0.5_f64) {
            let ct = momentum_thrust_coefficient(a).unwrap();
            prop_assert!((ct - 4.0 * a * (1.0 - a)).abs() < 1e-15);
        }

        #[test]
        fn thrust_is_nonnegative_and_finite(a in 0.0_f64..1.61_f64) {
            let ct = momentum_thrust_coefficient(a).unwrap();
            prop_assert!(ct.is_finite());
            prop_assert!(ct >= 0.0);
        }
    }
}

//! Airfoil lift/drag coefficient models.

use crate::error::{AeroError, AeroResult};
use wf_profile::AirfoilDef;

/// Lift and drag coefficients as a function of the angle of attack.
///
/// The angle of attack is in degrees (airfoil-table convention). Models must
/// be defined and continuous over the whole α range the solvers can probe;
/// discontinuities can make the induction and equilibrium root finders fail
/// to converge.
pub trait AirfoilModel: Send + Sync {
    /// Lift coefficient C_l at the given angle of attack (degrees).
    fn lift_coefficient(&self, alpha_deg: f64) -> f64;

    /// Drag coefficient C_d at the given angle of attack (degrees).
    fn drag_coefficient(&self, alpha_deg: f64) -> f64;
}

/// Linear lift curve with constant drag: C_l = slope·α, C_d = const.
#[derive(Clone, Debug)]
pub struct LinearAirfoil {
    /// Lift curve slope (1/degree)
    pub lift_slope: f64,
    /// Constant drag coefficient
    pub drag: f64,
}

impl LinearAirfoil {
    pub fn new(lift_slope: f64, drag: f64) -> AeroResult<Self> {
        if drag < 0.0 {
            return Err(AeroError::InvalidArg {
                what: "drag coefficient cannot be negative",
            });
        }
        Ok(Self { lift_slope, drag })
    }
}

impl AirfoilModel for LinearAirfoil {
    fn lift_coefficient(&self, alpha_deg: f64) -> f64 {
        self.lift_slope * alpha_deg
    }

    fn drag_coefficient(&self, _alpha_deg: f64) -> f64 {
        self.drag
    }
}

/// Tabulated polar with linear interpolation between samples.
///
/// Outside the tabulated range the end values are held, which keeps the
/// model defined and continuous everywhere.
#[derive(Clone, Debug)]
pub struct TableAirfoil {
    alpha_deg: Vec<f64>,
    lift: Vec<f64>,
    drag: Vec<f64>,
}

impl TableAirfoil {
    pub fn new(alpha_deg: Vec<f64>, lift: Vec<f64>, drag: Vec<f64>) -> AeroResult<Self> {
        if alpha_deg.len() < 2 {
            return Err(AeroError::InvalidArg {
                what: "airfoil table needs at least two samples",
            });
        }
        if lift.len() != alpha_deg.len() || drag.len() != alpha_deg.len() {
            return Err(AeroError::InvalidArg {
                what: "airfoil table columns must have equal length",
            });
        }
        if alpha_deg.windows(2).any(|w| w[1] <= w[0]) {
            return Err(AeroError::InvalidArg {
                what: "airfoil table angles must increase strictly",
            });
        }
        Ok(Self {
            alpha_deg,
            lift,
            drag,
        })
    }

    fn interpolate(&self, column: &[f64], alpha_deg: f64) -> f64 {
        let angles = &self.alpha_deg;
        if alpha_deg <= angles[0] {
            return column[0];
        }
        if alpha_deg >= angles[angles.len() - 1] {
            return column[column.len() - 1];
        }
        // partition_point returns the first index with angle > alpha
        let hi = angles.partition_point(|&a| a <= alpha_deg);
        let lo = hi - 1;
        let frac = (alpha_deg - angles[lo]) / (angles[hi] - angles[lo]);
        column[lo] + frac * (column[hi] - column[lo])
    }
}

impl AirfoilModel for TableAirfoil {
    fn lift_coefficient(&self, alpha_deg: f64) -> f64 {
        self.interpolate(&self.lift, alpha_deg)
    }

    fn drag_coefficient(&self, alpha_deg: f64) -> f64 {
        self.interpolate(&self.drag, alpha_deg)
    }
}

/// Build an airfoil model from a profile-embedded definition.
pub fn airfoil_from_def(def: &AirfoilDef) -> AeroResult<Box<dyn AirfoilModel>> {
    match def {
        AirfoilDef::Linear { lift_slope, drag } => {
            Ok(Box::new(LinearAirfoil::new(*lift_slope, *drag)?))
        }
        AirfoilDef::Table {
            alpha_deg,
            lift,
            drag,
        } => Ok(Box::new(TableAirfoil::new(
            alpha_deg.clone(),
            lift.clone(),
            drag.clone(),
        )?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_airfoil_slope() {
        let airfoil = LinearAirfoil::new(0.1, 0.01).unwrap();
        assert!((airfoil.lift_coefficient(5.0) - 0.5).abs() < 1e-12);
        assert!((airfoil.lift_coefficient(-3.0) + 0.3).abs() < 1e-12);
        assert_eq!(airfoil.drag_coefficient(42.0), 0.01);
    }

    #[test]
    fn linear_airfoil_negative_drag_rejected() {
        assert!(LinearAirfoil::new(0.1, -0.01).is_err());
    }

    #[test]
    fn table_airfoil_interpolates() {
        let airfoil = TableAirfoil::new(
            vec![-10.0, 0.0, 10.0],
            vec![-1.0, 0.0, 1.0],
            vec![0.02, 0.01, 0.02],
        )
        .unwrap();
        assert!((airfoil.lift_coefficient(5.0) - 0.5).abs() < 1e-12);
        assert!((airfoil.drag_coefficient(-5.0) - 0.015).abs() < 1e-12);
        // samples hit exactly
        assert_eq!(airfoil.lift_coefficient(10.0), 1.0);
    }

    #[test]
    fn table_airfoil_clamps_ends() {
        let airfoil = TableAirfoil::new(
            vec![-10.0, 10.0],
            vec![-1.0, 1.0],
            vec![0.02, 0.02],
        )
        .unwrap();
        assert_eq!(airfoil.lift_coefficient(50.0), 1.0);
        assert_eq!(airfoil.lift_coefficient(-50.0), -1.0);
    }

    #[test]
    fn table_airfoil_unsorted_rejected() {
        assert!(
            TableAirfoil::new(vec![0.0, -5.0], vec![0.0, 0.1], vec![0.01, 0.01]).is_err()
        );
        assert!(TableAirfoil::new(vec![0.0, 5.0], vec![0.0], vec![0.01, 0.01]).is_err());
    }

    #[test]
    fn from_def_builds_both_kinds() {
        let linear = airfoil_from_def(&AirfoilDef::Linear {
            lift_slope: 0.1,
            drag: 0.01,
        })
        .unwrap();
        assert!((linear.lift_coefficient(2.0) - 0.2).abs() < 1e-12);

        let table = airfoil_from_def(&AirfoilDef::Table {
            alpha_deg: vec![0.0, 10.0],
            lift: vec![0.0, 1.0],
            drag: vec![0.01, 0.02],
        })
        .unwrap();
        assert!((table.lift_coefficient(5.0) - 0.5).abs() < 1e-12);
    }
}

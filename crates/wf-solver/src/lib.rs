//! wf-solver: steady-state and linearization solvers for windflow.
//!
//! This crate provides the numerical layer on top of the aerodynamic and
//! plant models:
//! - a bounded scalar secant root finder with a documented convergence
//!   configuration
//! - the blade element-momentum coupling that resolves the induction factor
//! - the equilibrium operating-point solve (torque balance in partial load,
//!   power regulation in full load)
//! - central-difference linearization of the equations of motion into a
//!   dense state-space quadruple

pub mod equilibrium;
pub mod error;
pub mod induction;
pub mod linearize;
pub mod scalar;

pub use equilibrium::{OperatingPoint, operating_point, operating_point_with};
pub use error::{SolverError, SolverResult};
pub use induction::{InductionSolution, solve_induction, solve_induction_with};
pub use linearize::{MIN_STEP, RELATIVE_STEP, StateSpaceModel, linearize, linearize_with};
pub use scalar::{SecantConfig, SecantResult, secant_solve};

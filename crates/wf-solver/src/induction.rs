//! Blade element-momentum coupling: resolving the induction factor.
//!
//! The induction factor a is found where the thrust coefficient from the
//! blade-element integration equals the one predicted by the momentum
//! closure. The search starts from a = 0.5 and is constrained to the domain
//! where the closure is defined; iterates escaping it surface as
//! non-convergence rather than probing undefined territory.

use crate::error::SolverResult;
use crate::scalar::{SecantConfig, SecantResult, secant_solve};
use wf_aero::{
    AirfoilModel, Inflow, RotorLoads, WAKE_DOMAIN_MAX, momentum_thrust_coefficient,
    rotor_loads,
};
use wf_profile::TurbineProfile;

/// Starting value for the induction search.
const INDUCTION_SEED: f64 = 0.5;

/// Margin kept between the search interval and the closure's open upper
/// domain bound.
const DOMAIN_MARGIN: f64 = 0.02;

/// Lower search bound. Negative induction (thrust reversal) occurs at
/// deep-stall pitches probed by the equilibrium pitch search; anything
/// below this is non-physical for an attached operating point.
const SEARCH_MIN: f64 = -2.0;

/// Converged blade element-momentum solution.
#[derive(Clone, Copy, Debug)]
pub struct InductionSolution {
    /// Induction factor a
    pub induction: f64,
    /// Blade-element loads evaluated at a
    pub loads: RotorLoads,
    /// Root-finder iterations
    pub iterations: usize,
    /// Thrust-coefficient residual at a
    pub residual: f64,
}

/// Solve for the induction factor with default root-finder settings.
pub fn solve_induction(
    airfoil: &dyn AirfoilModel,
    profile: &TurbineProfile,
    inflow: &Inflow,
) -> SolverResult<InductionSolution> {
    solve_induction_with(airfoil, profile, inflow, &SecantConfig::default())
}

/// Solve for the induction factor with caller-supplied root-finder settings;
/// the domain bounds are always enforced.
pub fn solve_induction_with(
    airfoil: &dyn AirfoilModel,
    profile: &TurbineProfile,
    inflow: &Inflow,
    config: &SecantConfig,
) -> SolverResult<InductionSolution> {
    let config = SecantConfig {
        bounds: Some((SEARCH_MIN, WAKE_DOMAIN_MAX - DOMAIN_MARGIN)),
        ..config.clone()
    };

    let residual = |a: f64| -> SolverResult<f64> {
        let loads = rotor_loads(airfoil, profile, a, inflow)?;
        Ok(loads.thrust_coefficient - momentum_thrust_coefficient(a)?)
    };

    let SecantResult {
        x: induction,
        residual,
        iterations,
    } = secant_solve(INDUCTION_SEED, residual, "induction factor", &config)?;

    let loads = rotor_loads(airfoil, profile, induction, inflow)?;
    Ok(InductionSolution {
        induction,
        loads,
        iterations,
        residual,
    })
}

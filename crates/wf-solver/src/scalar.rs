//! Scalar secant root finder with domain bounds.

use crate::error::{SolverError, SolverResult};
use wf_core::{Tolerances, nearly_equal};

/// Secant solver configuration.
#[derive(Clone, Debug)]
pub struct SecantConfig {
    /// Maximum iterations
    pub max_iterations: usize,
    /// Step tolerances: converged when successive iterates are nearly equal
    pub step_tol: Tolerances,
    /// Relative size of the bump used to seed the second iterate
    pub initial_step: f64,
    /// Optional (lower, upper) domain bounds; steps leaving the domain are
    /// halved until they stay inside
    pub bounds: Option<(f64, f64)>,
    /// Maximum step halvings when a step leaves the bounds
    pub max_backtracks: usize,
}

impl Default for SecantConfig {
    fn default() -> Self {
        Self {
            max_iterations: 60,
            step_tol: Tolerances::default(),
            initial_step: 1e-4,
            bounds: None,
            max_backtracks: 30,
        }
    }
}

impl SecantConfig {
    /// Default configuration restricted to a domain.
    pub fn bounded(lower: f64, upper: f64) -> Self {
        Self {
            bounds: Some((lower, upper)),
            ..Self::default()
        }
    }
}

/// Secant iteration result.
#[derive(Clone, Copy, Debug)]
pub struct SecantResult {
    /// Root estimate
    pub x: f64,
    /// Residual at the root estimate
    pub residual: f64,
    /// Number of iterations
    pub iterations: usize,
}

fn inside(bounds: Option<(f64, f64)>, x: f64) -> bool {
    match bounds {
        Some((lo, hi)) => x >= lo && x <= hi,
        None => true,
    }
}

/// Find a root of `residual_fn` starting from `x0`.
///
/// Uses secant steps; when a step would leave the configured bounds it is
/// halved until it stays inside. Non-convergence is a distinct error that
/// carries the last iterate and residual; an unconverged value is never
/// returned as a result.
pub fn secant_solve<F>(
    x0: f64,
    residual_fn: F,
    what: &str,
    config: &SecantConfig,
) -> SolverResult<SecantResult>
where
    F: Fn(f64) -> SolverResult<f64>,
{
    if !inside(config.bounds, x0) {
        return Err(SolverError::InvalidArg {
            what: "secant seed outside the configured bounds",
        });
    }

    let mut x_prev = x0;
    let mut f_prev = residual_fn(x_prev)?;
    if f_prev == 0.0 {
        return Ok(SecantResult {
            x: x_prev,
            residual: 0.0,
            iterations: 0,
        });
    }

    // Second point: small relative bump, pulled back inside the bounds
    let mut bump = config.initial_step * x_prev.abs().max(1.0);
    if !inside(config.bounds, x_prev + bump) {
        bump = -bump;
    }
    let mut x = x_prev + bump;
    let mut f_cur = residual_fn(x)?;

    for iter in 1..=config.max_iterations {
        let denom = f_cur - f_prev;
        if denom == 0.0 {
            return Err(SolverError::Convergence {
                what: format!("{what}: flat residual"),
                iterations: iter,
                last: x,
                residual: f_cur,
            });
        }

        let mut dx = -f_cur * (x - x_prev) / denom;
        let mut backtracks = 0;
        while !inside(config.bounds, x + dx) {
            dx *= 0.5;
            backtracks += 1;
            if backtracks > config.max_backtracks {
                return Err(SolverError::Convergence {
                    what: format!("{what}: iterate pinned at the domain boundary"),
                    iterations: iter,
                    last: x,
                    residual: f_cur,
                });
            }
        }

        let x_new = x + dx;
        if nearly_equal(x, x_new, config.step_tol) {
            let residual = residual_fn(x_new)?;
            tracing::debug!(what, iterations = iter, root = x_new, residual);
            return Ok(SecantResult {
                x: x_new,
                residual,
                iterations: iter,
            });
        }

        x_prev = x;
        f_prev = f_cur;
        x = x_new;
        f_cur = residual_fn(x)?;
    }

    Err(SolverError::Convergence {
        what: what.to_string(),
        iterations: config.max_iterations,
        last: x,
        residual: f_cur,
    })
}

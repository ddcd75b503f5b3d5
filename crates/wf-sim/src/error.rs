//! Error types for wf-sim.

use thiserror::Error;

/// Errors from sweeps and time-domain simulation.
#[derive(Error, Debug)]
pub enum SimError {
    /// Invalid simulation or sweep argument
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// Solver failure at a sweep point; carries the wind speed (or
    /// tip-speed ratio) at which the equilibrium could not be resolved
    #[error("Sweep failed at {at}: {source}")]
    SweepPoint {
        at: f64,
        #[source]
        source: wf_solver::SolverError,
    },

    /// Solver error outside a sweep
    #[error(transparent)]
    Solver(#[from] wf_solver::SolverError),
}

pub type SimResult<T> = Result<T, SimError>;

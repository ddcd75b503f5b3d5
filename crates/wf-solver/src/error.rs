//! Error types for solver operations.

use thiserror::Error;
use wf_aero::AeroError;
use wf_model::ModelError;

/// Errors that can occur during root-finding and linearization.
#[derive(Error, Debug)]
pub enum SolverError {
    /// The root finder did not converge. Carries the last iterate and its
    /// residual so callers can retry with a different seed or abandon the
    /// operating point.
    #[error(
        "Convergence failed: {what} after {iterations} iterations \
         (last iterate {last}, residual {residual})"
    )]
    Convergence {
        what: String,
        iterations: usize,
        last: f64,
        residual: f64,
    },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Aerodynamic error: {0}")]
    Aero(#[from] AeroError),

    #[error("Model error: {0}")]
    Model(#[from] ModelError),
}

pub type SolverResult<T> = Result<T, SolverError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convergence_error_carries_context() {
        let err = SolverError::Convergence {
            what: "rotor speed balance".to_string(),
            iterations: 60,
            last: 1.23,
            residual: 4.5,
        };
        let msg = err.to_string();
        assert!(msg.contains("rotor speed balance"));
        assert!(msg.contains("60"));
        assert!(msg.contains("1.23"));
    }
}

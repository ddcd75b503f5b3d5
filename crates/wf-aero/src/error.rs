//! Error types for aerodynamic calculations.

use thiserror::Error;
use wf_core::ensure_finite;

/// Errors that can occur during aerodynamic calculations.
#[derive(Error, Debug, Clone)]
pub enum AeroError {
    #[error("Non-physical value: {what}")]
    NonPhysical { what: &'static str },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Induction factor {a} at or beyond the turbulent-wake domain bound 1.62")]
    WakeDomain { a: f64 },
}

pub type AeroResult<T> = Result<T, AeroError>;

/// Ensure a value is finite, returning AeroError if not.
pub fn check_finite(value: f64, what: &'static str) -> AeroResult<()> {
    ensure_finite(value, what).map_err(|_| AeroError::NonPhysical { what })?;
    Ok(())
}

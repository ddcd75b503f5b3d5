//! Error types for the plant model.

use thiserror::Error;
use wf_aero::AeroError;

/// Errors that can occur while evaluating the plant model.
#[derive(Error, Debug, Clone)]
pub enum ModelError {
    #[error("Non-physical value: {what}")]
    NonPhysical { what: &'static str },

    #[error("Aerodynamic error: {0}")]
    Aero(#[from] AeroError),
}

pub type ModelResult<T> = Result<T, ModelError>;

//! wf-model: turbine plant model for windflow.
//!
//! Provides:
//! - fixed-size state/input/output vector types for the 7-state turbine
//! - the converter-controlled generator torque/power map
//! - the nonlinear equations of motion coupling flap, tower and drivetrain
//!   under the frozen-wake assumption
//!
//! Every evaluation is a pure function of its explicit inputs; the model
//! never persists state across calls.

pub mod dynamics;
pub mod error;
pub mod generator;
pub mod state;

// Re-exports
pub use dynamics::turbine_dynamics;
pub use error::{ModelError, ModelResult};
pub use generator::{GeneratorOutput, generator};
pub use state::{
    INPUT_DIM, OUTPUT_DIM, STATE_DIM, TurbineInput, TurbineOutputs, TurbineState,
};

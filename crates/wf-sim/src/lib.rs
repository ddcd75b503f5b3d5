//! wf-sim: sweeps and time-domain simulation for windflow.
//!
//! Downstream consumers of the solver layer:
//! - power-curve and dimensionless Cp–λ sweeps, parallel across points
//! - deterministic wind-gust signal shapes
//! - fixed-step RK4 time response of the linearized model in deviation
//!   variables

pub mod error;
pub mod gust;
pub mod response;
pub mod sweep;

pub use error::{SimError, SimResult};
pub use gust::Gust;
pub use response::{SimOptions, SimRecord, gust_response, linear_response};
pub use sweep::{CpLambdaPoint, REFERENCE_WIND, cp_lambda, power_curve};

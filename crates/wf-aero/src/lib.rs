//! wf-aero: blade aerodynamics for windflow.
//!
//! Provides:
//! - the `AirfoilModel` trait with linear and tabulated implementations
//! - blade-element force integration over the rotor (`rotor_loads`)
//! - the momentum-theory thrust closure with its turbulent-wake branch
//!
//! Simplifications carried over deliberately from the underlying model:
//! uniform inflow, no wake rotation, no blade tip loss, and a single annulus
//! spanning the whole rotor plane. The power loss factor in the profile is
//! the lumped correction for these.

pub mod airfoil;
pub mod error;
pub mod momentum;
pub mod rotor;

// Re-exports
pub use airfoil::{AirfoilModel, LinearAirfoil, TableAirfoil, airfoil_from_def};
pub use error::{AeroError, AeroResult};
pub use momentum::{
    MOMENTUM_VALID_MAX, WAKE_DOMAIN_MAX, WakeRegime, momentum_thrust_coefficient,
};
pub use rotor::{Inflow, RotorLoads, rotor_loads};

//! wf-profile: turbine parameter records for windflow.
//!
//! A [`TurbineProfile`] is the flat, immutable record of aerodynamic,
//! structural/drivetrain, blade-geometry and nominal constants that every
//! downstream computation consumes. It is loaded once (from YAML or a
//! built-in catalog entry), validated, and then threaded by reference
//! through the whole call chain, never held as global state.

pub mod builtin;
pub mod error;
pub mod loader;
pub mod schema;

pub use builtin::nrel_5mw;
pub use error::{ProfileError, ProfileResult};
pub use loader::{profile_from_path, profile_from_yaml};
pub use schema::{
    AeroParams, AirfoilDef, BladeGeometry, NominalPoint, TurbineParams, TurbineProfile,
};

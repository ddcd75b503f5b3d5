//! Error types for profile loading and validation.

use thiserror::Error;

/// Errors that can occur while loading or validating a turbine profile.
#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("I/O error reading profile: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error in profile: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid profile: {what}")]
    Invalid { what: String },
}

pub type ProfileResult<T> = Result<T, ProfileError>;

impl ProfileError {
    pub(crate) fn invalid(what: impl Into<String>) -> Self {
        ProfileError::Invalid { what: what.into() }
    }
}

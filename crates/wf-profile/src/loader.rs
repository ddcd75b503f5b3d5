//! Loading profiles from YAML.
//!
//! Profiles are loaded once at the top of a call chain and the parsed,
//! validated structure is passed down, so every computation in one pipeline
//! run sees the same snapshot.

use crate::error::ProfileResult;
use crate::schema::TurbineProfile;
use std::path::Path;

/// Parse and validate a profile from YAML text.
pub fn profile_from_yaml(text: &str) -> ProfileResult<TurbineProfile> {
    let profile: TurbineProfile = serde_yaml::from_str(text)?;
    profile.validate()?;
    Ok(profile)
}

/// Read, parse and validate a profile file.
pub fn profile_from_path(path: &Path) -> ProfileResult<TurbineProfile> {
    let text = std::fs::read_to_string(path)?;
    profile_from_yaml(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::nrel_5mw;

    #[test]
    fn yaml_round_trip() {
        let profile = nrel_5mw();
        let text = serde_yaml::to_string(&profile).unwrap();
        let reloaded = profile_from_yaml(&text).unwrap();
        assert_eq!(reloaded, profile);
    }

    #[test]
    fn malformed_geometry_fails_to_load() {
        let mut profile = nrel_5mw();
        profile.geometry.twist_deg.pop();
        let text = serde_yaml::to_string(&profile).unwrap();
        assert!(profile_from_yaml(&text).is_err());
    }

    #[test]
    fn parse_error_is_reported() {
        assert!(profile_from_yaml("name: [unterminated").is_err());
    }
}

//! Cookie policy configuration.
//!
//! The mode is stored as its integer ordinal, the same representation the
//! browser keeps in user preferences:
//!
//! ```json
//! { "mode": 3 }
//! ```

use crate::base::neterror::NetError;
use crate::cookies::policy::{CookiePolicyMode, StaticCookiePolicy};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Serialized cookie policy settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CookiePolicyConfig {
    /// Blocking mode to enforce.
    pub mode: CookiePolicyMode,
}

impl CookiePolicyConfig {
    /// Create a new config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the blocking mode.
    pub fn mode(mut self, mode: CookiePolicyMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self, NetError> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Load config from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, NetError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| {
            NetError::invalid_config(format!("failed to read {}: {}", path.display(), e))
        })?;
        let config = Self::from_json_str(&json)?;
        tracing::debug!(path = %path.display(), mode = %config.mode, "loaded cookie policy config");
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String, NetError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Build a policy enforcing this config.
    pub fn build(&self) -> StaticCookiePolicy {
        StaticCookiePolicy::with_mode(self.mode)
    }

    /// Push this config's mode into a running policy.
    pub fn apply(&self, policy: &StaticCookiePolicy) {
        policy.set_mode(self.mode);
    }
}

impl From<&CookiePolicyConfig> for StaticCookiePolicy {
    fn from(config: &CookiePolicyConfig) -> Self {
        config.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = CookiePolicyConfig::new();
        assert_eq!(config.mode, CookiePolicyMode::AllowAll);
        assert_eq!(config.build().mode(), CookiePolicyMode::AllowAll);
    }

    #[test]
    fn test_serializes_ordinal() {
        let config = CookiePolicyConfig::new().mode(CookiePolicyMode::BlockAllThirdParty);
        assert_eq!(config.to_json_string().unwrap(), r#"{"mode":3}"#);
    }

    #[test]
    fn test_parse_each_ordinal() {
        for mode in CookiePolicyMode::ALL {
            let json = format!(r#"{{"mode":{}}}"#, mode.as_i32());
            assert_eq!(CookiePolicyConfig::from_json_str(&json).unwrap().mode, mode);
        }
    }

    #[test]
    fn test_missing_mode_uses_default() {
        let config = CookiePolicyConfig::from_json_str("{}").unwrap();
        assert_eq!(config.mode, CookiePolicyMode::AllowAll);
    }

    #[test]
    fn test_unknown_ordinal_rejected() {
        let err = CookiePolicyConfig::from_json_str(r#"{"mode":4}"#).unwrap_err();
        match err {
            NetError::InvalidConfig { message } => {
                assert!(message.contains("Invalid cookie policy mode: 4"), "{}", message);
            }
            other => panic!("Expected InvalidConfig, got {:?}", other),
        }
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "mode": 1 }}"#).unwrap();

        let config = CookiePolicyConfig::from_path(file.path()).unwrap();
        assert_eq!(config.mode, CookiePolicyMode::BlockSettingThirdParty);
    }

    #[test]
    fn test_from_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = CookiePolicyConfig::from_path(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, NetError::InvalidConfig { .. }));
    }

    #[test]
    fn test_apply_updates_running_policy() {
        let policy = StaticCookiePolicy::new();
        CookiePolicyConfig::new()
            .mode(CookiePolicyMode::BlockAll)
            .apply(&policy);
        assert_eq!(policy.mode(), CookiePolicyMode::BlockAll);
    }
}

//! Session persistence configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Session persistence configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Directory holding one file per snapshot slot
    #[serde(default = "default_snapshot_dir")]
    pub snapshot_dir: PathBuf,
}

impl SessionConfig {
    /// Validate session configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.snapshot_dir.as_os_str().is_empty() {
            return Err(ValidationError::MissingRequired("SESSION_SNAPSHOT_DIR"));
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            snapshot_dir: default_snapshot_dir(),
        }
    }
}

fn default_snapshot_dir() -> PathBuf {
    PathBuf::from("./.essentia/session")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.snapshot_dir, PathBuf::from("./.essentia/session"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_snapshot_dir_is_invalid() {
        let config = SessionConfig {
            snapshot_dir: PathBuf::new(),
        };
        assert!(config.validate().is_err());
    }
}

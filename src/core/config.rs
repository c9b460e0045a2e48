//! Configuration system: optional TOML file + CLI overrides + defaults.
//!
//! Nothing is read from disk unless a path is passed explicitly; the
//! shipped defaults (non-admin, no activity log) need no file at all.

#![allow(missing_docs)]

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::errors::{MenuError, Result};

/// Default banner printed once at startup.
pub const DEFAULT_BANNER: &str = "Client Management Console";

/// Full menu configuration model.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Config {
    pub access: AccessConfig,
    pub display: DisplayConfig,
    pub activity: ActivityConfig,
}

/// Permission wiring fixed at process start.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct AccessConfig {
    /// Whether the operator is treated as an administrator.
    pub admin: bool,
}

/// Console presentation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayConfig {
    pub banner: String,
    /// Styled output when attached to a terminal.
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            banner: DEFAULT_BANNER.to_string(),
            color: true,
        }
    }
}

/// Optional JSONL activity log.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ActivityConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_path: Option<PathBuf>,
    pub max_size_bytes: u64,
    pub max_rotated_files: u32,
}

impl Default for ActivityConfig {
    fn default() -> Self {
        Self {
            log_path: None,
            max_size_bytes: 1024 * 1024,
            max_rotated_files: 3,
        }
    }
}

/// Command-line overrides layered on top of the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub admin: bool,
    pub no_color: bool,
    pub activity_log: Option<PathBuf>,
}

impl Config {
    /// Load config from an explicit path, or fall back to defaults.
    ///
    /// An explicit path that does not exist is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        if !path.exists() {
            return Err(MenuError::MissingConfig {
                path: path.to_path_buf(),
            });
        }
        let raw = fs::read_to_string(path).map_err(|source| MenuError::io(path, source))?;
        Self::from_toml_str(&raw)
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let cfg: Self = toml::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Apply command-line overrides. Flags only ever widen what the file says.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if overrides.admin {
            self.access.admin = true;
        }
        if overrides.no_color {
            self.display.color = false;
        }
        if let Some(path) = &overrides.activity_log {
            self.activity.log_path = Some(path.clone());
        }
    }

    /// Render the effective config as TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| MenuError::Serialization {
            context: "toml",
            details: e.to_string(),
        })
    }

    fn validate(&self) -> Result<()> {
        let banner = self.display.banner.trim();
        if banner.is_empty() {
            return Err(MenuError::InvalidConfig {
                details: "display.banner must not be empty".to_string(),
            });
        }
        if banner.contains('\n') || banner.contains('\r') {
            return Err(MenuError::InvalidConfig {
                details: "display.banner must be a single line".to_string(),
            });
        }

        if self.activity.max_size_bytes == 0 {
            return Err(MenuError::InvalidConfig {
                details: "activity.max_size_bytes must be > 0".to_string(),
            });
        }
        if self.activity.max_rotated_files == 0 {
            return Err(MenuError::InvalidConfig {
                details: "activity.max_rotated_files must be >= 1".to_string(),
            });
        }

        if let Some(path) = &self.activity.log_path
            && path.as_os_str().is_empty()
        {
            return Err(MenuError::InvalidConfig {
                details: "activity.log_path must not be empty when set".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_deny_access_and_disable_logging() {
        let cfg = Config::load(None).unwrap();
        assert!(!cfg.access.admin);
        assert!(cfg.activity.log_path.is_none());
        assert_eq!(cfg.display.banner, DEFAULT_BANNER);
        assert!(cfg.display.color);
    }

    #[test]
    fn missing_explicit_path_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert_eq!(err.code(), "CMU-1002");
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("menu.toml");
        fs::write(&path, "[access]\nadmin = true\n").unwrap();

        let cfg = Config::load(Some(&path)).unwrap();
        assert!(cfg.access.admin);
        assert_eq!(cfg.display.banner, DEFAULT_BANNER);
        assert_eq!(cfg.activity.max_rotated_files, 3);
    }

    #[test]
    fn defaults_pass_validation() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn invalid_file_rejected_by_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("menu.toml");
        fs::write(&path, "[activity]\nmax_rotated_files = 0\n").unwrap();

        let err = Config::load(Some(&path)).unwrap_err();
        assert_eq!(err.code(), "CMU-1001");
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        let err = Config::from_toml_str("[access\nadmin = ").unwrap_err();
        assert_eq!(err.code(), "CMU-1003");
    }

    #[test]
    fn wrong_type_is_parse_error() {
        let err = Config::from_toml_str("[access]\nadmin = \"yes\"\n").unwrap_err();
        assert_eq!(err.code(), "CMU-1003");
    }

    #[test]
    fn empty_banner_rejected() {
        let err = Config::from_toml_str("[display]\nbanner = \"   \"\n").unwrap_err();
        assert_eq!(err.code(), "CMU-1001");
        assert!(err.to_string().contains("display.banner"));
    }

    #[test]
    fn multiline_banner_rejected() {
        let err = Config::from_toml_str("[display]\nbanner = \"a\\nb\"\n").unwrap_err();
        assert!(err.to_string().contains("single line"));
    }

    #[test]
    fn zero_rotation_settings_rejected() {
        let err = Config::from_toml_str("[activity]\nmax_size_bytes = 0\n").unwrap_err();
        assert!(err.to_string().contains("max_size_bytes"));

        let err = Config::from_toml_str("[activity]\nmax_rotated_files = 0\n").unwrap_err();
        assert!(err.to_string().contains("max_rotated_files"));
    }

    #[test]
    fn overrides_layer_on_top() {
        let mut cfg = Config::default();
        cfg.apply_overrides(&ConfigOverrides {
            admin: true,
            no_color: true,
            activity_log: Some(PathBuf::from("/tmp/menu.jsonl")),
        });
        assert!(cfg.access.admin);
        assert!(!cfg.display.color);
        assert_eq!(
            cfg.activity.log_path.as_deref(),
            Some(Path::new("/tmp/menu.jsonl"))
        );
    }

    #[test]
    fn absent_overrides_leave_file_values() {
        let mut cfg = Config::from_toml_str("[access]\nadmin = true\n").unwrap();
        cfg.apply_overrides(&ConfigOverrides::default());
        assert!(cfg.access.admin);
        assert!(cfg.display.color);
    }

    #[test]
    fn toml_rendering_reparses() {
        let cfg = Config::default();
        let rendered = cfg.to_toml_string().unwrap();
        assert!(rendered.contains("[access]"));
        assert_eq!(Config::from_toml_str(&rendered).unwrap(), cfg);
    }
}

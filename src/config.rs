//! Resize job configuration (spriteprep.yaml).
//!
//! A job file supplies defaults for the `resize` command so a project can
//! keep its mesh ratio and padding next to its sprites. Command-line flags
//! override file values, which override the built-in defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::batch::FailurePolicy;
use crate::error::{Result, SpriteError};
use crate::types::{AspectRatio, FudgeFactor, Offset, ResizeParams};

/// The name of the job file looked up in the working directory.
pub const CONFIG_FILENAME: &str = "spriteprep.yaml";

/// Default target aspect ratio.
pub const DEFAULT_RATIO: f64 = 1.0;

/// Default fudge factor.
pub const DEFAULT_FUDGE: f64 = 1.05;

/// Resize settings, every field optional so layers can be merged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct JobConfig {
    /// Target width / height ratio.
    pub ratio: Option<f64>,

    /// Padding multiplier, clamped to at least 1.0.
    pub fudge: Option<f64>,

    /// Horizontal paste shift in pixels.
    pub offset_x: Option<i32>,

    /// Vertical paste shift in pixels.
    pub offset_y: Option<i32>,

    /// Continue past failing files instead of aborting.
    pub keep_going: Option<bool>,
}

impl JobConfig {
    /// Load a job file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SpriteError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse a job file from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(content).map_err(|e| SpriteError::InvalidParameter {
            message: format!("Invalid config: {}", e),
            help: Some(format!(
                "Check {} syntax; known keys are ratio, fudge, offset_x, offset_y, keep_going",
                CONFIG_FILENAME
            )),
        })
    }

    /// Load `spriteprep.yaml` from `dir` if it exists.
    pub fn discover(dir: &Path) -> Result<Option<Self>> {
        let path = dir.join(CONFIG_FILENAME);
        if path.is_file() {
            Self::load(&path).map(Some)
        } else {
            Ok(None)
        }
    }

    /// Merge two configs; values set in `overrides` win.
    pub fn overlay(self, overrides: JobConfig) -> JobConfig {
        JobConfig {
            ratio: overrides.ratio.or(self.ratio),
            fudge: overrides.fudge.or(self.fudge),
            offset_x: overrides.offset_x.or(self.offset_x),
            offset_y: overrides.offset_y.or(self.offset_y),
            keep_going: overrides.keep_going.or(self.keep_going),
        }
    }

    /// Validate and resolve into resize parameters, filling in defaults.
    pub fn resize_params(&self) -> Result<ResizeParams> {
        let ratio = AspectRatio::new(self.ratio.unwrap_or(DEFAULT_RATIO))?;
        let fudge = FudgeFactor::new(self.fudge.unwrap_or(DEFAULT_FUDGE))?;
        let offset = Offset::new(self.offset_x.unwrap_or(0), self.offset_y.unwrap_or(0));
        Ok(ResizeParams::new(ratio, fudge, offset))
    }

    pub fn failure_policy(&self) -> FailurePolicy {
        if self.keep_going.unwrap_or(false) {
            FailurePolicy::KeepGoing
        } else {
            FailurePolicy::Abort
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
ratio: 0.75
fudge: 1.1
offset_x: -4
offset_y: 12
keep_going: true
"#;
        let config = JobConfig::parse(yaml).unwrap();

        assert_eq!(
            config,
            JobConfig {
                ratio: Some(0.75),
                fudge: Some(1.1),
                offset_x: Some(-4),
                offset_y: Some(12),
                keep_going: Some(true),
            }
        );
    }

    #[test]
    fn test_parse_partial_config() {
        let config = JobConfig::parse("ratio: 2").unwrap();
        assert_eq!(config.ratio, Some(2.0));
        assert!(config.fudge.is_none());
    }

    #[test]
    fn test_parse_empty_config() {
        assert_eq!(JobConfig::parse("").unwrap(), JobConfig::default());
    }

    #[test]
    fn test_parse_unknown_key() {
        assert!(JobConfig::parse("ratoi: 1.0").is_err());
    }

    #[test]
    fn test_parse_non_numeric() {
        let err = JobConfig::parse("ratio: wide").unwrap_err();
        assert!(matches!(err, SpriteError::InvalidParameter { .. }));
    }

    #[test]
    fn test_defaults() {
        let params = JobConfig::default().resize_params().unwrap();
        assert_eq!(params.ratio.get(), DEFAULT_RATIO);
        assert_eq!(params.fudge.get(), DEFAULT_FUDGE);
        assert_eq!(params.offset, Offset::new(0, 0));
        assert_eq!(JobConfig::default().failure_policy(), FailurePolicy::Abort);
    }

    #[test]
    fn test_overlay_prefers_overrides() {
        let file = JobConfig {
            ratio: Some(0.5),
            fudge: Some(1.2),
            offset_x: Some(3),
            ..Default::default()
        };
        let cli = JobConfig {
            ratio: Some(2.0),
            offset_y: Some(-1),
            ..Default::default()
        };

        let merged = file.overlay(cli);

        assert_eq!(merged.ratio, Some(2.0));
        assert_eq!(merged.fudge, Some(1.2));
        assert_eq!(merged.offset_x, Some(3));
        assert_eq!(merged.offset_y, Some(-1));
    }

    #[test]
    fn test_invalid_ratio_rejected() {
        let config = JobConfig {
            ratio: Some(0.0),
            ..Default::default()
        };
        assert!(matches!(
            config.resize_params(),
            Err(SpriteError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_keep_going_policy() {
        let config = JobConfig {
            keep_going: Some(true),
            ..Default::default()
        };
        assert_eq!(config.failure_policy(), FailurePolicy::KeepGoing);
    }

    #[test]
    fn test_discover() {
        let dir = tempdir().unwrap();
        assert!(JobConfig::discover(dir.path()).unwrap().is_none());

        std::fs::write(dir.path().join(CONFIG_FILENAME), "fudge: 1.3\n").unwrap();
        let config = JobConfig::discover(dir.path()).unwrap().unwrap();
        assert_eq!(config.fudge, Some(1.3));
    }
}

//! Corpus configuration for generating many variants of one image.

use serde::{Deserialize, Serialize};

use super::{ConfigError, ImageSpec};

fn default_count() -> usize {
    16
}

fn default_override_range() -> (i32, i32) {
    (-64, 64)
}

/// Settings for a fuzz corpus built from a base image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusConfig {
    /// Image every corpus entry is derived from. Its own `size_override`
    /// is ignored; each entry gets one drawn from `override_range`.
    pub base: ImageSpec,
    /// Number of files to generate, including the faithful one.
    #[serde(default = "default_count")]
    pub count: usize,
    /// Random seed for reproducibility.
    #[serde(default)]
    pub seed: u64,
    /// Inclusive range of size overrides to draw from.
    #[serde(default = "default_override_range")]
    pub override_range: (i32, i32),
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            base: ImageSpec::default(),
            count: default_count(),
            seed: 0,
            override_range: default_override_range(),
        }
    }
}

impl CorpusConfig {
    /// Validate corpus configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count == 0 {
            return Err(ConfigError::InvalidCount);
        }

        let (min, max) = self.override_range;
        if min > max {
            return Err(ConfigError::InvalidOverrideRange { min, max });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_valid() {
        assert!(CorpusConfig::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_range() {
        let config = CorpusConfig {
            override_range: (10, -10),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidOverrideRange { min: 10, max: -10 })
        ));
    }

    #[test]
    fn test_zero_count() {
        let config = CorpusConfig {
            count: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidCount)));
    }

    #[test]
    fn test_defaults_from_json() {
        let json = r#"{"base": {"width": 8, "height": 8, "chunks": []}}"#;
        let config: CorpusConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.count, 16);
        assert_eq!(config.seed, 0);
        assert_eq!(config.override_range, (-64, 64));
    }
}

//! Report output configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::ports::ExportFormat;

/// Largest number of decimals accepted for ranking values.
pub const MAX_PRECISION: usize = 12;

/// Report output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Report format
    #[serde(default)]
    pub format: ExportFormat,

    /// Decimals for sums and scores in table output
    #[serde(default = "default_precision")]
    pub precision: usize,

    /// Indent JSON output
    #[serde(default = "default_pretty_json")]
    pub pretty_json: bool,
}

impl OutputConfig {
    /// Validate output configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.precision == 0 || self.precision > MAX_PRECISION {
            return Err(ValidationError::InvalidPrecision(self.precision));
        }
        Ok(())
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: ExportFormat::default(),
            precision: default_precision(),
            pretty_json: default_pretty_json(),
        }
    }
}

fn default_precision() -> usize {
    4
}

fn default_pretty_json() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_config_defaults() {
        let config = OutputConfig::default();
        assert_eq!(config.format, ExportFormat::Table);
        assert_eq!(config.precision, 4);
        assert!(config.pretty_json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_precision_bounds() {
        let mut config = OutputConfig::default();
        config.precision = 0;
        assert!(matches!(config.validate(), Err(ValidationError::InvalidPrecision(0))));
        config.precision = 13;
        assert!(config.validate().is_err());
        config.precision = 12;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_output_config_deserialization() {
        let config: OutputConfig =
            serde_json::from_str(r#"{"format": "json", "precision": 6}"#).unwrap();
        assert_eq!(config.format, ExportFormat::Json);
        assert_eq!(config.precision, 6);
        assert!(config.pretty_json);
    }
}

//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::{PllSection, ToolsConfig};
use std::path::Path;

/// Loads and validates a `gen4.toml` configuration file.
pub fn load_config(path: &Path) -> Result<ToolsConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    load_config_from_str(&content)
}

/// Parses and validates a `gen4.toml` configuration from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<ToolsConfig, ConfigError> {
    let config: ToolsConfig =
        toml::from_str(content).map_err(|e| ConfigError::Syntax(e.to_string()))?;
    validate_pll(&config.pll)?;
    Ok(config)
}

/// Rejects values that would make the clock computation divide by zero.
fn validate_pll(pll: &PllSection) -> Result<(), ConfigError> {
    if let Some(input) = pll.input {
        if !input.is_valid() {
            return Err(ConfigError::InvalidPll {
                field: "input",
                reason: format!("expected a positive frequency, got {} Hz", input.hz()),
            });
        }
    }
    for (name, value) in [
        ("input_div", pll.input_div),
        ("feedback_div", pll.feedback_div),
        ("output_div", pll.output_div),
    ] {
        if value == Some(0) {
            return Err(ConfigError::InvalidPll {
                field: name,
                reason: "must be non-zero".to_string(),
            });
        }
    }
    Ok(())
}

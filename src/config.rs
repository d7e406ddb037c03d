use std::{fs, path::Path};

use anyhow::{Context, Result};
use twolink::{ArmConfig, ConfigError};

/// First segment length used when neither a file nor a flag provides one.
pub const DEFAULT_LENGTH1: f64 = 100.0;
/// Second segment length used when neither a file nor a flag provides one.
pub const DEFAULT_LENGTH2: f64 = 80.0;

/// Read and validate an arm configuration from a TOML file.
///
/// The file holds the two lengths at the top level:
///
/// ```toml
/// length1 = 100.0
/// length2 = 80.0
/// ```
pub fn load_arm_config(path: &Path) -> Result<ArmConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file {}", path.display()))?;
    parse_arm_config(&text)
        .with_context(|| format!("Invalid configuration file {}", path.display()))
}

/// Parse an arm configuration from TOML text.
pub fn parse_arm_config(text: &str) -> Result<ArmConfig> {
    Ok(toml::from_str(text)?)
}

/// Combine the file configuration with command line overrides.
///
/// Each length falls back from the flag to the file and then to the defaults. The
/// merged lengths are validated again since a flag can still carry a bad value.
pub fn resolve_arm_config(
    file: Option<ArmConfig>,
    length1: Option<f64>,
    length2: Option<f64>,
) -> Result<ArmConfig, ConfigError> {
    let (base1, base2) = file.map_or((DEFAULT_LENGTH1, DEFAULT_LENGTH2), |arm| {
        (arm.length1(), arm.length2())
    });
    ArmConfig::new(length1.unwrap_or(base1), length2.unwrap_or(base2))
}

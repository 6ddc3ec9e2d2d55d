//! Application configuration
//!
//! All bootstrap parameters live in one explicit [`AppConfig`] value that
//! is constructed once in `main` and passed down; nothing here is global
//! or ambient state.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),
}

/// A semantic version triple, convertible to Vulkan's packed format.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl Version {
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Pack into the `VK_MAKE_API_VERSION` encoding used by `ApplicationInfo`.
    pub fn to_vk(self) -> u32 {
        ash::vk::make_api_version(0, self.major, self.minor, self.patch)
    }
}

/// Bootstrap configuration for the application.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AppConfig {
    /// Application name reported to the Vulkan driver
    pub app_name: String,
    /// Application version reported to the Vulkan driver
    pub app_version: Version,
    /// Engine name reported to the Vulkan driver
    pub engine_name: String,
    /// Engine version reported to the Vulkan driver
    pub engine_version: Version,
    /// Window width in pixels
    pub window_width: u32,
    /// Window height in pixels
    pub window_height: u32,
    /// Window title
    pub window_title: String,
    /// Whether to enable validation layers and the debug messenger
    pub enable_validation: bool,
    /// Validation layers requested when validation is enabled
    pub validation_layers: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: "basic".to_string(),
            app_version: Version::new(0, 0, 1),
            engine_name: "no engine".to_string(),
            engine_version: Version::new(0, 0, 0),
            window_width: 800,
            window_height: 600,
            window_title: "window".to_string(),
            enable_validation: cfg!(debug_assertions),
            validation_layers: vec!["VK_LAYER_KHRONOS_validation".to_string()],
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_bootstrap_constants() {
        let config = AppConfig::default();

        assert_eq!(config.window_width, 800);
        assert_eq!(config.window_height, 600);
        assert_eq!(config.app_name, "basic");
        assert_eq!(config.app_version, Version::new(0, 0, 1));
        assert_eq!(config.engine_version, Version::new(0, 0, 0));
        assert_eq!(
            config.validation_layers,
            vec!["VK_LAYER_KHRONOS_validation".to_string()]
        );
    }

    #[test]
    fn test_toml_round_trip() {
        let config = AppConfig::default();
        let serialized = toml::to_string(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&serialized).unwrap();

        assert_eq!(parsed.app_name, config.app_name);
        assert_eq!(parsed.app_version, config.app_version);
        assert_eq!(parsed.enable_validation, config.enable_validation);
        assert_eq!(parsed.validation_layers, config.validation_layers);
    }

    #[test]
    fn test_version_packing() {
        let version = Version::new(1, 2, 3);
        assert_eq!(version.to_vk(), ash::vk::make_api_version(0, 1, 2, 3));
    }
}

//! Configuration Module
//!
//! Handles loading and managing test-support configuration from environment variables.

use std::env;
use std::path::PathBuf;

use crate::error::{FitsError, Result};

/// Component whose spec entries override the general ones.
pub const DEFAULT_COMPONENT: &str = "gst-msdk";

/// Driver name the msdk plugin is known to work with.
pub const DEFAULT_COMPATIBLE_DRIVER: &str = "iHD";

/// Environment variable the VA runtime reads the driver name from.
pub const DEFAULT_DRIVER_ENV: &str = "LIBVA_DRIVER_NAME";

/// Shell used to run probe commands.
pub const DEFAULT_SHELL: &str = "sh";

/// Test-support configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Component name used for spec overrides
    pub component: String,
    /// Driver name considered compatible
    pub compatible_driver: String,
    /// Environment variable holding the active driver name
    pub driver_env: String,
    /// Shell used by the tool probe
    pub shell: String,
    /// Optional JSON spec document
    pub spec_path: Option<PathBuf>,
    /// Context to compose when a spec document is configured
    pub context: Vec<String>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `FITS_COMPONENT` - Component override name (default: gst-msdk)
    /// - `FITS_COMPATIBLE_DRIVER` - Compatible driver name (default: iHD)
    /// - `FITS_DRIVER_ENV` - Variable holding the driver name (default: LIBVA_DRIVER_NAME)
    /// - `FITS_SHELL` - Shell for probe commands (default: sh)
    /// - `FITS_SPEC_PATH` - JSON spec document (default: none)
    /// - `FITS_CONTEXT` - Slash separated context, e.g. `encode/avc` (default: empty)
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        Self {
            component: non_empty("FITS_COMPONENT").unwrap_or(defaults.component),
            compatible_driver: non_empty("FITS_COMPATIBLE_DRIVER")
                .unwrap_or(defaults.compatible_driver),
            driver_env: non_empty("FITS_DRIVER_ENV").unwrap_or(defaults.driver_env),
            shell: non_empty("FITS_SHELL").unwrap_or(defaults.shell),
            spec_path: non_empty("FITS_SPEC_PATH").map(PathBuf::from),
            context: non_empty("FITS_CONTEXT")
                .map(|v| parse_context(&v))
                .unwrap_or_default(),
        }
    }

    /// Checks that the values the probes and composer depend on are usable.
    pub fn validate(&self) -> Result<()> {
        if self.component.trim().is_empty() {
            return Err(FitsError::InvalidConfig(
                "component name cannot be empty".to_string(),
            ));
        }
        if self.shell.trim().is_empty() {
            return Err(FitsError::InvalidConfig("shell cannot be empty".to_string()));
        }
        Ok(())
    }

    /// Returns the configured context as borrowed segments.
    pub fn context_segments(&self) -> Vec<&str> {
        self.context.iter().map(String::as_str).collect()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            component: DEFAULT_COMPONENT.to_string(),
            compatible_driver: DEFAULT_COMPATIBLE_DRIVER.to_string(),
            driver_env: DEFAULT_DRIVER_ENV.to_string(),
            shell: DEFAULT_SHELL.to_string(),
            spec_path: None,
            context: Vec::new(),
        }
    }
}

/// Splits `encode/avc` into `["encode", "avc"]`. Empty segments are dropped,
/// so `/` is the root context.
fn parse_context(raw: &str) -> Vec<String> {
    raw.split('/')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.component, "gst-msdk");
        assert_eq!(config.compatible_driver, "iHD");
        assert_eq!(config.driver_env, "LIBVA_DRIVER_NAME");
        assert_eq!(config.shell, "sh");
        assert!(config.spec_path.is_none());
        assert!(config.context.is_empty());
    }

    #[test]
    fn test_config_from_lookup_defaults() {
        let config = Config::from_lookup(lookup_from(&[]));
        assert_eq!(config.component, "gst-msdk");
        assert_eq!(config.compatible_driver, "iHD");
        assert!(config.spec_path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_from_lookup_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("FITS_COMPONENT", "gst-vaapi"),
            ("FITS_SPEC_PATH", "/tmp/spec.json"),
            ("FITS_CONTEXT", "/encode/avc/"),
        ]));
        assert_eq!(config.component, "gst-vaapi");
        assert_eq!(config.spec_path, Some(PathBuf::from("/tmp/spec.json")));
        assert_eq!(config.context_segments(), vec!["encode", "avc"]);
    }

    #[test]
    fn test_config_blank_values_fall_back() {
        let config = Config::from_lookup(lookup_from(&[("FITS_SHELL", "  ")]));
        assert_eq!(config.shell, "sh");
    }

    #[test]
    fn test_config_root_context_is_empty() {
        let config = Config::from_lookup(lookup_from(&[("FITS_CONTEXT", "/")]));
        assert!(config.context.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_context_double_slash() {
        let config = Config::from_lookup(lookup_from(&[("FITS_CONTEXT", "encode// avc")]));
        assert_eq!(config.context_segments(), vec!["encode", "avc"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_shell() {
        let config = Config {
            shell: String::new(),
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(FitsError::InvalidConfig(_))));
    }
}

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::{NegativeAmountPolicy, UnitSystem};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub scaling: ScalingSettings,
    #[serde(default)]
    pub units: UnitSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScalingSettings {
    #[serde(default)]
    pub negative_amounts: NegativeAmountPolicy,
    #[serde(default = "default_servings")]
    pub default_servings: u32,
}

impl Default for ScalingSettings {
    fn default() -> Self {
        Self {
            negative_amounts: NegativeAmountPolicy::default(),
            default_servings: default_servings(),
        }
    }
}

fn default_servings() -> u32 { 4 }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UnitSettings {
    #[serde(default)]
    pub preferred_system: Option<UnitSystem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with RECIPE_SCALE_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., RECIPE_SCALE__SCALING__NEGATIVE_AMOUNTS -> scaling.negative_amounts
            .add_source(environment())
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?;

        settings.try_deserialize()
    }
}

fn environment() -> Environment {
    Environment::with_prefix("RECIPE_SCALE")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn from_toml(toml: &str) -> Settings {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.scaling.negative_amounts, NegativeAmountPolicy::Reject);
        assert_eq!(settings.scaling.default_servings, 4);
        assert_eq!(settings.units.preferred_system, None);
    }

    #[test]
    fn test_default_logging() {
        let level = default_log_level();
        let format = default_log_format();
        assert_eq!(level, "info");
        assert_eq!(format, "json");
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let settings = from_toml("");
        assert_eq!(settings.scaling.default_servings, 4);
        assert_eq!(settings.logging.format, "json");
    }

    #[test]
    fn test_overrides_from_environment() {
        let vars = config::Map::from([
            ("RECIPE_SCALE__UNITS__PREFERRED_SYSTEM".to_string(), "Metric".to_string()),
            ("RECIPE_SCALE__SCALING__NEGATIVE_AMOUNTS".to_string(), "clamp".to_string()),
            ("RECIPE_SCALE__SCALING__DEFAULT_SERVINGS".to_string(), "6".to_string()),
            ("OTHER_APP__SCALING__DEFAULT_SERVINGS".to_string(), "99".to_string()),
        ]);

        let settings: Settings = Config::builder()
            .add_source(File::from_str("[logging]\nlevel = \"warn\"", FileFormat::Toml))
            .add_source(environment().source(Some(vars)))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.units.preferred_system, Some(UnitSystem::Metric));
        assert_eq!(settings.scaling.negative_amounts, NegativeAmountPolicy::Clamp);
        assert_eq!(settings.scaling.default_servings, 6);
        assert_eq!(settings.logging.level, "warn");
    }

    #[test]
    fn test_overrides_from_file() {
        let settings = from_toml(
            r#"
            [scaling]
            negative_amounts = "clamp"
            default_servings = 6

            [units]
            preferred_system = "imperial"

            [logging]
            level = "debug"
            format = "pretty"
            "#,
        );

        assert_eq!(settings.scaling.negative_amounts, NegativeAmountPolicy::Clamp);
        assert_eq!(settings.scaling.default_servings, 6);
        assert_eq!(settings.units.preferred_system, Some(UnitSystem::Imperial));
        assert_eq!(settings.logging.level, "debug");
        assert_eq!(settings.logging.format, "pretty");
    }
}

use core::fmt::{Debug, Display};
use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub mod validation;

pub use validation::{InputRangeError, ValidationErrors};

pub const DEFAULT_CONFIG_FILE: &str = "roster.toml";
pub const ENV_PREFIX: &str = "ROSTER_";

/// Raw roster input as it comes out of the config layers.
///
/// Every value is a wide signed integer so that negative or oversized input
/// survives until [`RosterConfig::validate`] can report it.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct RosterConfig {
    pub year: i64,
    pub month: i64,
    pub employees: i64,
    pub employees_per_meeting: i64,
    pub meeting_rooms: i64,
    pub meeting_duration: i64,
    pub start_hour: i64,
    pub end_hour: i64,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            year: 2024,
            month: 10,
            employees: 20,
            employees_per_meeting: 2,
            meeting_rooms: 2,
            meeting_duration: 1,
            start_hour: 9,
            end_hour: 17,
        }
    }
}

/// Values given on the command line. Unset fields leave lower layers alone.
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct RosterOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employees: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub employees_per_meeting: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_rooms: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_duration: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_hour: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_hour: Option<i64>,
}

#[derive(thiserror::Error)]
pub enum ConfigError {
    #[error("config error: {0}")]
    Extract(#[from] figment::Error),
    #[error("config file {} does not exist", .0.display())]
    MissingFile(PathBuf),
}

impl Debug for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

/// Layers, lowest priority first: built-in defaults, the TOML file,
/// `ROSTER_*` environment variables, command line overrides.
///
/// Without an explicit `path` a missing [`DEFAULT_CONFIG_FILE`] is fine, an
/// explicitly named file has to exist.
pub fn layered_figment(
    path: Option<&Path>,
    overrides: &RosterOverrides,
) -> Result<Figment, ConfigError> {
    let file = match path {
        Some(path) if !path.is_file() => {
            return Err(ConfigError::MissingFile(path.to_owned()));
        }
        Some(path) => path,
        None => Path::new(DEFAULT_CONFIG_FILE),
    };
    debug!(file = %file.display(), "loading configuration");
    Ok(Figment::new()
        .merge(Serialized::defaults(RosterConfig::default()))
        .merge(Toml::file(file))
        .merge(Env::prefixed(ENV_PREFIX))
        .merge(Serialized::defaults(overrides)))
}

pub fn get_config(
    path: Option<&Path>,
    overrides: &RosterOverrides,
) -> Result<RosterConfig, ConfigError> {
    Ok(layered_figment(path, overrides)?.extract()?)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use figment::Jail;

    use super::{get_config, ConfigError, RosterConfig, RosterOverrides};

    #[test]
    fn defaults_without_any_source() {
        Jail::expect_with(|_jail| {
            let config = get_config(None, &RosterOverrides::default())
                .map_err(|err| err.to_string())?;
            assert_eq!(config, RosterConfig::default());
            Ok(())
        });
    }

    #[test]
    fn layers_override_in_order() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "roster.toml",
                r"
                year = 2025
                month = 3
                employees = 40
                start_hour = 8
                ",
            )?;
            jail.set_env("ROSTER_MONTH", "4");
            jail.set_env("ROSTER_EMPLOYEES", "50");
            let overrides = RosterOverrides {
                employees: Some(60),
                ..RosterOverrides::default()
            };

            let config = get_config(None, &overrides).map_err(|err| err.to_string())?;
            assert_eq!(config.year, 2025);
            assert_eq!(config.month, 4);
            assert_eq!(config.employees, 60);
            assert_eq!(config.start_hour, 8);
            assert_eq!(config.end_hour, 17);
            Ok(())
        });
    }

    #[test]
    fn explicit_file() {
        Jail::expect_with(|jail| {
            jail.create_file("team.toml", "meeting_rooms = 7")?;
            let config = get_config(Some(Path::new("team.toml")), &RosterOverrides::default())
                .map_err(|err| err.to_string())?;
            assert_eq!(config.meeting_rooms, 7);
            Ok(())
        });
    }

    #[test]
    fn explicit_file_must_exist() {
        Jail::expect_with(|_jail| {
            let result = get_config(Some(Path::new("missing.toml")), &RosterOverrides::default());
            assert!(matches!(result, Err(ConfigError::MissingFile(_))));
            Ok(())
        });
    }

    #[test]
    fn malformed_value_is_an_error() {
        Jail::expect_with(|jail| {
            jail.set_env("ROSTER_YEAR", "next year");
            let result = get_config(None, &RosterOverrides::default());
            assert!(matches!(result, Err(ConfigError::Extract(..))));
            Ok(())
        });
    }

    #[test]
    fn extract_error_shows_its_source() {
        let err = ConfigError::from(figment::Error::from("invalid type for `year`"));
        assert_eq!(err.to_string(), "config error: invalid type for `year`");
        assert_eq!(format!("{err:?}"), err.to_string());
    }

    #[test]
    fn negative_values_reach_validation() {
        Jail::expect_with(|jail| {
            jail.set_env("ROSTER_START_HOUR", "-3");
            let config = get_config(None, &RosterOverrides::default())
                .map_err(|err| err.to_string())?;
            assert_eq!(config.start_hour, -3);
            assert!(config.validate().is_err());
            Ok(())
        });
    }
}

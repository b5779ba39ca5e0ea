use std::{env, fmt};

use dotenvy;

use crate::constants::{DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_DIMENSION};

pub const WIDTH_KEY: &str = "MAZE_WIDTH";
pub const HEIGHT_KEY: &str = "MAZE_HEIGHT";
pub const SEED_KEY: &str = "MAZE_SEED";
pub const SHOW_ITERATIONS_KEY: &str = "MAZE_SHOW_ITERATIONS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidValue { key: &'static str, value: String },
    InvalidDimension { key: &'static str, value: String },
    TooLarge { key: &'static str, value: String, max: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidValue { key, value } => {
                write!(f, "{} has an invalid value '{}'", key, value)
            }
            ConfigError::InvalidDimension { key, value } => {
                write!(f, "{} must be a positive whole number, got '{}'", key, value)
            }
            ConfigError::TooLarge { key, value, max } => {
                write!(f, "{} is {}, but the largest supported size is {}", key, value, max)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Settings for the next generation run. Changing them never affects a maze that already
/// exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub width: usize,
    pub height: usize,
    pub seed: Option<u64>,
    pub show_iterations: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            seed: None,
            show_iterations: false,
        }
    }
}

impl Config {
    /// Reads settings from the environment, after loading a `.env` file if there is one.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        if let Some(value) = lookup(WIDTH_KEY) {
            config.width = parse_dimension(WIDTH_KEY, &value)?;
        }
        if let Some(value) = lookup(HEIGHT_KEY) {
            config.height = parse_dimension(HEIGHT_KEY, &value)?;
        }
        if let Some(value) = lookup(SEED_KEY) {
            let seed = value
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidValue {
                    key: SEED_KEY,
                    value: value.clone(),
                })?;
            config.seed = Some(seed);
        }
        if let Some(value) = lookup(SHOW_ITERATIONS_KEY) {
            config.show_iterations = parse_flag(SHOW_ITERATIONS_KEY, &value)?;
        }

        Ok(config)
    }
}

/// Parses a width or height. Zero and negative sizes are rejected here, so the generator is
/// never asked to build an empty grid.
pub fn parse_dimension(key: &'static str, value: &str) -> Result<usize, ConfigError> {
    let number = value
        .trim()
        .parse::<i64>()
        .map_err(|_| ConfigError::InvalidValue {
            key,
            value: value.to_string(),
        })?;

    if number <= 0 {
        return Err(ConfigError::InvalidDimension {
            key,
            value: value.to_string(),
        });
    }

    let number = number as u64;
    if number > MAX_DIMENSION as u64 {
        return Err(ConfigError::TooLarge {
            key,
            value: value.to_string(),
            max: MAX_DIMENSION,
        });
    }

    Ok(number as usize)
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.width, 20);
        assert_eq!(config.height, 20);
    }

    #[test]
    fn all_keys_are_read() {
        let config = Config::from_lookup(lookup_from(&[
            (WIDTH_KEY, "12"),
            (HEIGHT_KEY, " 8 "),
            (SEED_KEY, "12345"),
            (SHOW_ITERATIONS_KEY, "yes"),
        ]))
        .unwrap();

        assert_eq!(
            config,
            Config {
                width: 12,
                height: 8,
                seed: Some(12345),
                show_iterations: true,
            }
        );
    }

    #[test]
    fn non_positive_dimensions_are_rejected() {
        assert_eq!(
            parse_dimension(WIDTH_KEY, "0"),
            Err(ConfigError::InvalidDimension {
                key: WIDTH_KEY,
                value: "0".to_string()
            })
        );
        assert_eq!(
            Config::from_lookup(lookup_from(&[(HEIGHT_KEY, "-1")])),
            Err(ConfigError::InvalidDimension {
                key: HEIGHT_KEY,
                value: "-1".to_string()
            })
        );
    }

    #[test]
    fn oversized_and_garbled_values_are_rejected() {
        assert!(matches!(
            parse_dimension(WIDTH_KEY, "100000"),
            Err(ConfigError::TooLarge { max: MAX_DIMENSION, .. })
        ));
        assert!(matches!(
            parse_dimension(WIDTH_KEY, "wide"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(Config::from_lookup(lookup_from(&[(SEED_KEY, "-3")])).is_err());
        assert!(Config::from_lookup(lookup_from(&[(SHOW_ITERATIONS_KEY, "maybe")])).is_err());
    }

    #[test]
    fn errors_name_the_offending_key() {
        let error = parse_dimension(HEIGHT_KEY, "-1").unwrap_err();
        assert_eq!(
            error.to_string(),
            "MAZE_HEIGHT must be a positive whole number, got '-1'"
        );
    }
}

//! Runtime configuration
//!
//! Read once from environment variables at startup.

use thiserror::Error;

use crate::models::{DietStyle, Goal};

pub const ENV_DEFAULT_GOAL: &str = "TDEE_DEFAULT_GOAL";
pub const ENV_DEFAULT_DIET_STYLE: &str = "TDEE_DEFAULT_DIET_STYLE";
pub const ENV_LOG: &str = "TDEE_LOG";

/// Log directive used when `TDEE_LOG` is not set
pub const DEFAULT_LOG_DIRECTIVE: &str = "tdee=info";

/// Configuration error types
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var}: unknown goal '{value}' (expected maintenance, cutting or bulking)")]
    InvalidGoal { var: &'static str, value: String },

    #[error("{var}: unknown diet style '{value}' (expected moderate, lowCarb or highCarb)")]
    InvalidDietStyle { var: &'static str, value: String },
}

/// Defaults applied when a tool call leaves goal or diet style out
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub default_goal: Goal,
    pub default_diet_style: DietStyle,
    pub log_directive: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_goal: Goal::Maintenance,
            default_diet_style: DietStyle::Moderate,
            log_directive: DEFAULT_LOG_DIRECTIVE.to_string(),
        }
    }
}

impl Config {
    /// Load from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from any key lookup; unset or blank values keep their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(value) = get(ENV_DEFAULT_GOAL) {
            config.default_goal = Goal::from_str(&value).ok_or(ConfigError::InvalidGoal {
                var: ENV_DEFAULT_GOAL,
                value,
            })?;
        }

        if let Some(value) = get(ENV_DEFAULT_DIET_STYLE) {
            config.default_diet_style =
                DietStyle::from_str(&value).ok_or(ConfigError::InvalidDietStyle {
                    var: ENV_DEFAULT_DIET_STYLE,
                    value,
                })?;
        }

        if let Some(value) = get(ENV_LOG) {
            config.log_directive = value.trim().to_string();
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.log_directive, "tdee=info");
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            (ENV_DEFAULT_GOAL, "cutting"),
            (ENV_DEFAULT_DIET_STYLE, "lowCarb"),
            (ENV_LOG, " tdee=debug "),
        ]))
        .unwrap();
        assert_eq!(config.default_goal, Goal::Cutting);
        assert_eq!(config.default_diet_style, DietStyle::LowCarb);
        assert_eq!(config.log_directive, "tdee=debug");
    }

    #[test]
    fn test_blank_values_keep_defaults() {
        let config = Config::from_lookup(lookup_from(&[(ENV_DEFAULT_GOAL, "  ")])).unwrap();
        assert_eq!(config.default_goal, Goal::Maintenance);
    }

    #[test]
    fn test_invalid_values() {
        let err = Config::from_lookup(lookup_from(&[(ENV_DEFAULT_GOAL, "recomp")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidGoal {
                var: ENV_DEFAULT_GOAL,
                value: "recomp".to_string()
            }
        );

        let err =
            Config::from_lookup(lookup_from(&[(ENV_DEFAULT_DIET_STYLE, "keto")])).unwrap_err();
        assert!(err.to_string().contains("keto"));
    }
}

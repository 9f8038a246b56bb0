use anyhow::{Context, Result};
use clap::ValueEnum;

/// How the CLI prints a token sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Tokens joined by the separator, as a single reply line
    #[default]
    Joined,
    /// One quoted token per line
    Lines,
    /// JSON array of `{ "text", "kind" }` objects
    Json,
}

/// Runtime settings, read from the environment (and `.env`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub separator: String,
    pub preserve_case: bool,
    pub format: OutputFormat,
}

impl Config {
    /// Builds a config from `HAL_SEPARATOR`, `HAL_PRESERVE_CASE` and `HAL_FORMAT`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let separator = lookup("HAL_SEPARATOR").unwrap_or(defaults.separator);

        let preserve_case = match lookup("HAL_PRESERVE_CASE") {
            Some(value) => parse_flag(&value)
                .with_context(|| format!("Invalid HAL_PRESERVE_CASE value: {:?}", value))?,
            None => defaults.preserve_case,
        };

        let format = match lookup("HAL_FORMAT") {
            Some(value) => OutputFormat::from_str(&value, true)
                .map_err(|e| anyhow::anyhow!(e))
                .with_context(|| format!("Invalid HAL_FORMAT value: {:?}", value))?,
            None => defaults.format,
        };

        Ok(Config {
            separator,
            preserve_case,
            format,
        })
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => anyhow::bail!("expected a boolean, got {:?}", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.separator, "");
        assert!(!config.preserve_case);
        assert_eq!(config.format, OutputFormat::Joined);
    }

    #[test]
    fn test_all_values() {
        let config = config_from(&[
            ("HAL_SEPARATOR", " | "),
            ("HAL_PRESERVE_CASE", "yes"),
            ("HAL_FORMAT", "JSON"),
        ])
        .unwrap();

        assert_eq!(config.separator, " | ");
        assert!(config.preserve_case);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_invalid_flag() {
        let err = config_from(&[("HAL_PRESERVE_CASE", "maybe")]).unwrap_err();
        assert!(err.to_string().contains("HAL_PRESERVE_CASE"));
    }

    #[test]
    fn test_invalid_format() {
        let err = config_from(&[("HAL_FORMAT", "xml")]).unwrap_err();
        assert!(err.to_string().contains("HAL_FORMAT"));
    }
}

//! Configuration management for Periodize
//!
//! Configuration is loaded with the following priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables (PERIODIZE_*)
//! 3. Config file (~/.config/periodize/config.toml)
//! 4. Default values

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// How a plan is written to the output sink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One display line per week
    #[default]
    Text,
    /// The whole plan as pretty-printed JSON
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

/// Plan dates
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct PlanConfig {
    /// First day of training
    pub start: Option<NaiveDate>,

    /// Event day
    pub race: Option<NaiveDate>,
}

/// Output settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: OutputFormat,
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Plan configuration
    pub plan: PlanConfig,

    /// Output configuration
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from the default config file location
    ///
    /// Returns default config if file doesn't exist
    pub fn load() -> Result<Self> {
        if let Some(path) = Self::default_config_path() {
            if path.exists() {
                return Self::load_from_file(&path);
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)
            .map_err(|e| Error::Config(format!("Failed to parse config: {}", e)))
    }

    /// Get the default config file path
    ///
    /// Returns `~/.config/periodize/config.toml` on Unix
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("periodize").join("config.toml"))
    }

    /// Apply environment variable overrides
    ///
    /// Supported variables:
    /// - PERIODIZE_START: First day of training (YYYY-MM-DD)
    /// - PERIODIZE_RACE: Event day (YYYY-MM-DD)
    /// - PERIODIZE_FORMAT: Output format (text or json)
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    fn with_overrides_from(mut self, var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(start) = var("PERIODIZE_START") {
            self.plan.start = Some(parse_date("PERIODIZE_START", &start)?);
        }

        if let Some(race) = var("PERIODIZE_RACE") {
            self.plan.race = Some(parse_date("PERIODIZE_RACE", &race)?);
        }

        if let Some(format) = var("PERIODIZE_FORMAT") {
            self.output.format = format
                .parse()
                .map_err(|e| Error::Config(format!("PERIODIZE_FORMAT: {}", e)))?;
        }

        Ok(self)
    }

    /// Apply CLI flag overrides
    pub fn with_cli_overrides(
        mut self,
        start: Option<NaiveDate>,
        race: Option<NaiveDate>,
        format: Option<OutputFormat>,
    ) -> Self {
        if let Some(date) = start {
            self.plan.start = Some(date);
        }

        if let Some(date) = race {
            self.plan.race = Some(date);
        }

        if let Some(f) = format {
            self.output.format = f;
        }

        self
    }

    /// Load configuration with all overrides applied
    ///
    /// Priority: CLI > env > config file > defaults
    pub fn load_with_overrides(
        start: Option<NaiveDate>,
        race: Option<NaiveDate>,
        format: Option<OutputFormat>,
    ) -> Result<Self> {
        Ok(Self::load()?
            .with_env_overrides()?
            .with_cli_overrides(start, race, format))
    }
}

fn parse_date(key: &str, value: &str) -> Result<NaiveDate> {
    value
        .trim()
        .parse()
        .map_err(|e| Error::Config(format!("{}: invalid date '{}': {}", key, value, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.plan.start.is_none());
        assert!(config.plan.race.is_none());
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_cli_overrides() {
        let config = Config::default().with_cli_overrides(
            Some(date(2021, 6, 6)),
            Some(date(2021, 8, 7)),
            Some(OutputFormat::Json),
        );

        assert_eq!(config.plan.start, Some(date(2021, 6, 6)));
        assert_eq!(config.plan.race, Some(date(2021, 8, 7)));
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("PERIODIZE_START", "2021-06-06"),
            ("PERIODIZE_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let config = Config::default()
            .with_overrides_from(|k| vars.get(k).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.plan.start, Some(date(2021, 6, 6)));
        assert!(config.plan.race.is_none());
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_cli_beats_env() {
        let config = Config::default()
            .with_overrides_from(|k| (k == "PERIODIZE_RACE").then(|| "2021-09-01".to_string()))
            .unwrap()
            .with_cli_overrides(None, Some(date(2021, 8, 7)), None);

        assert_eq!(config.plan.race, Some(date(2021, 8, 7)));
    }

    #[test]
    fn test_invalid_env_date() {
        let err = Config::default()
            .with_overrides_from(|k| (k == "PERIODIZE_START").then(|| "June 6".to_string()))
            .unwrap_err();

        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("PERIODIZE_START"));
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
[plan]
start = "2021-06-06"
race = "2021-08-07"

[output]
format = "json"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.plan.start, Some(date(2021, 6, 6)));
        assert_eq!(config.plan.race, Some(date(2021, 8, 7)));
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_partial_toml() {
        let toml = r#"
[plan]
race = "2021-08-07"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        // start and format should use defaults
        assert!(config.plan.start.is_none());
        assert_eq!(config.plan.race, Some(date(2021, 8, 7)));
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[output]\nformat = \"json\"").unwrap();

        let config = Config::load_from_file(file.path()).unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_load_from_bad_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[output]\nformat = \"yaml\"").unwrap();

        let err = Config::load_from_file(file.path()).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("txt".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("xml".parse::<OutputFormat>().is_err());
    }
}

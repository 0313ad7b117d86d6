use crate::config::toml_config::TomlConfig;
use crate::core::format::DEFAULT_INTEGER_TOLERANCE;
use crate::domain::ports::{ConfigProvider, OutputFormat};
use crate::utils::error::{Result, VolumeError};
use crate::utils::validation::{self, Validate};

pub const DEFAULT_PROMPT: &str = "> ";

/// Effective settings: explicit overrides, then the TOML file, then defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub integer_tolerance: f64,
    pub output: OutputFormat,
    pub prompt: String,
    pub log_level: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            integer_tolerance: DEFAULT_INTEGER_TOLERANCE,
            output: OutputFormat::Text,
            prompt: DEFAULT_PROMPT.to_string(),
            log_level: None,
        }
    }
}

impl Settings {
    pub fn from_toml(file: &TomlConfig) -> Result<Self> {
        file.validate()?;
        Ok(Self {
            integer_tolerance: file.integer_tolerance(),
            output: file.output_format(),
            prompt: file.prompt().unwrap_or(DEFAULT_PROMPT).to_string(),
            log_level: file.log_level().map(str::to_string),
        })
    }

    /// Applies command-line overrides on top of `self`.
    pub fn with_overrides(
        mut self,
        output: Option<&str>,
        integer_tolerance: Option<f64>,
    ) -> Result<Self> {
        if let Some(name) = output {
            self.output = OutputFormat::from_name(name).ok_or_else(|| VolumeError::ConfigError {
                message: format!(
                    "Unknown output '{}', expected one of: {}",
                    name,
                    OutputFormat::NAMES.join(", ")
                ),
            })?;
        }
        if let Some(tolerance) = integer_tolerance {
            self.integer_tolerance = tolerance;
        }
        self.validate()?;
        Ok(self)
    }

    #[cfg(feature = "cli")]
    pub fn from_cli(cli: &crate::config::CliConfig) -> Result<Self> {
        let base = match &cli.config {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path);
                Self::from_toml(&TomlConfig::from_file(path)?)?
            }
            None => Self::default(),
        };
        base.with_overrides(cli.output.as_deref(), cli.integer_tolerance)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validation::validate_range_exclusive("integer_tolerance", self.integer_tolerance, 0.0, 0.5)
    }
}

impl ConfigProvider for Settings {
    fn integer_tolerance(&self) -> f64 {
        self.integer_tolerance
    }

    fn output_format(&self) -> OutputFormat {
        self.output
    }

    fn prompt(&self) -> &str {
        &self.prompt
    }
}

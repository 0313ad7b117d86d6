use crate::core::format::DEFAULT_INTEGER_TOLERANCE;
use crate::domain::ports::OutputFormat;
use crate::utils::error::{Result, VolumeError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub format: Option<FormatConfig>,
    pub display: Option<DisplayConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormatConfig {
    pub integer_tolerance: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub output: Option<String>,
    pub prompt: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("static pattern is valid"))
}

impl TomlConfig {
    /// Loads and parses a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(VolumeError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses TOML text after environment substitution.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| VolumeError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the variable's value. Unset variables stay as written.
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn integer_tolerance(&self) -> f64 {
        self.format
            .as_ref()
            .and_then(|f| f.integer_tolerance)
            .unwrap_or(DEFAULT_INTEGER_TOLERANCE)
    }

    /// Raw output name; `None` when the file does not set one.
    pub fn output_name(&self) -> Option<&str> {
        self.display.as_ref().and_then(|d| d.output.as_deref())
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output_name()
            .and_then(OutputFormat::from_name)
            .unwrap_or_default()
    }

    pub fn prompt(&self) -> Option<&str> {
        self.display.as_ref().and_then(|d| d.prompt.as_deref())
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(tolerance) = self.format.as_ref().and_then(|f| f.integer_tolerance) {
            validation::validate_range_exclusive("format.integer_tolerance", tolerance, 0.0, 0.5)?;
        }

        if let Some(output) = self.output_name() {
            validation::validate_one_of("display.output", output, &OutputFormat::NAMES)?;
        }

        if let Some(level) = self.log_level() {
            validation::validate_not_empty("logging.level", level)?;
        }

        Ok(())
    }
}

pub mod settings;
pub mod toml_config;

pub use settings::Settings;
pub use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "volume-calc")]
#[command(about = "Computes the volume of a rectangular box")]
pub struct CliConfig {
    /// Length text; any of the three dimension flags runs a single calculation
    #[arg(long, allow_hyphen_values = true)]
    pub length: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    pub width: Option<String>,

    #[arg(long, allow_hyphen_values = true)]
    pub height: Option<String>,

    #[arg(long, help = "Path to a TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, help = "Result output: text or json")]
    pub output: Option<String>,

    #[arg(long, help = "Distance from an integer below which a volume prints without decimals")]
    pub integer_tolerance: Option<f64>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines on stderr")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn is_one_shot(&self) -> bool {
        self.length.is_some() || self.width.is_some() || self.height.is_some()
    }
}

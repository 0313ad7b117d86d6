use anyhow::Context;
use clap::Parser;
use volume_calc::utils::logger;
use volume_calc::{CliConfig, DimensionInputs, Settings, Session};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // defaults < TOML file < flags
    let settings = match Settings::from_cli(&config) {
        Ok(settings) => settings,
        Err(e) => {
            logger::init_cli_logger(config.verbose, None);
            tracing::error!("❌ Configuration failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    if config.log_json {
        logger::init_json_logger(config.verbose, settings.log_level.as_deref());
    } else {
        logger::init_cli_logger(config.verbose, settings.log_level.as_deref());
    }
    tracing::debug!("Settings: {:?}", settings);

    let stdout = std::io::stdout();
    let mut session = Session::new(settings, stdout);

    if config.is_one_shot() {
        let inputs = DimensionInputs::new(
            config.length.clone().unwrap_or_default(),
            config.width.clone().unwrap_or_default(),
            config.height.clone().unwrap_or_default(),
        );
        session.run_once(inputs);
    } else {
        tracing::info!("Type 'help' for commands");
        let stdin = std::io::stdin();
        session
            .run(stdin.lock())
            .context("Interactive session failed")?;
    }

    let computations = session.finish();
    tracing::debug!("Session ended after {} calculation(s)", computations);

    Ok(())
}

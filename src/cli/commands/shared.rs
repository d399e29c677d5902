//! Shared components for CLI commands
//!
//! Logging setup and the layered parser configuration used by every command.

use crate::Result;
use crate::cli::args::InspectArgs;
use crate::config::ParserConfig;
use crate::constants::LOG_TARGET;
use tracing::{debug, info};

/// Set up structured logging for the inspect command
pub fn setup_logging(args: &InspectArgs) -> Result<()> {
    use tracing_subscriber::{
        EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt,
    };

    let log_level = args.get_log_level();
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", LOG_TARGET, log_level)));

    let layer = fmt::layer().with_target(false).with_writer(std::io::stderr);
    let layer = if args.quiet {
        layer.compact().boxed()
    } else {
        layer.with_timer(fmt::time::uptime()).boxed()
    };

    tracing_subscriber::registry().with(filter).with(layer).init();

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration using layered approach (defaults -> file -> env -> args)
pub fn load_configuration(args: &InspectArgs) -> Result<ParserConfig> {
    match &args.config_file {
        Some(path) => info!("Using config file: {}", path.display()),
        None => debug!("No config file given, using default location if present"),
    }

    let mut config = ParserConfig::load_layered(args.config_file.as_deref())?;
    apply_cli_overrides(&mut config, args);

    config.validate()?;
    debug!("Parser configuration: {:?}", config);
    Ok(config)
}

/// Apply CLI argument overrides to configuration
pub fn apply_cli_overrides(config: &mut ParserConfig, args: &InspectArgs) {
    if let Some(delimiter) = &args.delimiter {
        config.delimiter = delimiter.clone();
    }
    if let Some(skip_rows) = args.skip_rows {
        config.skip_rows = skip_rows;
    }
    if args.no_squeeze {
        config.squeeze = false;
    }
}

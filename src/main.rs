//! configkit CLI entry point.

use anyhow::Context;
use clap::Parser;

use configkit::cli::{commands, Cli, Commands};
use configkit::infrastructure::logging::LoggerImpl;
use configkit::ConfigLoader;

fn main() {
    let cli = Cli::parse();

    let _logger = match LoggerImpl::init(&cli.log_config()) {
        Ok(logger) => logger,
        Err(err) => configkit::cli::handle_error(err, cli.json),
    };

    // Eager load: nothing runs unless config.yaml is present and parses.
    let holder = match load_config(&cli) {
        Ok(holder) => holder,
        Err(err) => configkit::cli::handle_error(err, cli.json),
    };

    let result = match cli.command {
        Commands::Show(args) => commands::show::execute(args, holder, cli.json),
        Commands::Path => commands::path::execute(holder, cli.json),
        Commands::Copy(args) => commands::copy::execute(args, holder, cli.json),
    };

    if let Err(err) = result {
        configkit::cli::handle_error(err, cli.json);
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<&'static configkit::ConfigHolder> {
    let loader = match &cli.config_dir {
        Some(dir) => ConfigLoader::in_dir(dir)?,
        None => ConfigLoader::beside_executable()?,
    };
    configkit::init_with(&loader)
        .with_context(|| format!("Failed to load configuration from {}", loader.path()))
}

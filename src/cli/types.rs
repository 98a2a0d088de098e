//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::cli::commands::copy::CopyArgs;
use crate::cli::commands::show::ShowArgs;
use crate::infrastructure::logging::{LogConfig, LogFormat};

#[derive(Parser)]
#[command(name = "configkit")]
#[command(about = "Load config.yaml once at startup, print it, or copy it elsewhere", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Directory containing config.yaml (defaults to the executable's directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Log level: trace, debug, info, warn, error
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Log output format on stderr
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,

    /// Also write JSON logs to configkit.log in this directory
    #[arg(long, global = true, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}

impl Cli {
    pub fn log_config(&self) -> LogConfig {
        LogConfig {
            level: self.log_level.clone(),
            format: self.log_format,
            log_dir: self.log_dir.clone(),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the loaded configuration, or a single top-level key
    Show(ShowArgs),

    /// Print the resolved path of config.yaml
    Path,

    /// Copy config.yaml into an existing directory
    Copy(CopyArgs),
}

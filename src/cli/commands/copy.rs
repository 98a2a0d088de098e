//! Implementation of the `configkit copy` command.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::output::{output, CommandOutput};
use crate::infrastructure::config::{ConfigHolder, ConfigLoader};

#[derive(Args, Debug)]
pub struct CopyArgs {
    /// Existing directory to copy config.yaml into
    pub dest: PathBuf,
}

#[derive(Debug, Serialize)]
pub struct CopyOutput {
    pub success: bool,
    pub source: PathBuf,
    pub destination: PathBuf,
}

impl CommandOutput for CopyOutput {
    fn to_human(&self) -> String {
        format!(
            "Copied {} to {}",
            self.source.display(),
            self.destination.display()
        )
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub fn execute(args: CopyArgs, holder: &ConfigHolder, json_mode: bool) -> Result<()> {
    let loader = ConfigLoader::new(holder.path().clone());
    let destination = loader
        .copy_to(&args.dest)
        .with_context(|| format!("Failed to copy configuration to {}", args.dest.display()))?;

    let output_data = CopyOutput {
        success: true,
        source: holder.path().as_path().to_path_buf(),
        destination,
    };
    output(&output_data, json_mode);
    Ok(())
}

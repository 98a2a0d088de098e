//! Implementation of the `configkit path` command.

use anyhow::Result;
use serde::Serialize;

use crate::cli::output::{output, CommandOutput};
use crate::infrastructure::config::ConfigHolder;

#[derive(Debug, Serialize)]
pub struct PathOutput {
    pub path: String,
}

impl CommandOutput for PathOutput {
    fn to_human(&self) -> String {
        self.path.clone()
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub fn execute(holder: &ConfigHolder, json_mode: bool) -> Result<()> {
    let output_data = PathOutput {
        path: holder.path().to_string(),
    };
    output(&output_data, json_mode);
    Ok(())
}

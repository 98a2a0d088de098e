//! Implementation of the `configkit show` command.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::ConfigDocument;
use crate::infrastructure::config::ConfigHolder;

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Top-level key to print instead of the whole document
    pub key: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ShowOutput {
    pub path: String,
    pub key: Option<String>,
    pub value: ConfigDocument,
}

impl CommandOutput for ShowOutput {
    fn to_human(&self) -> String {
        // serde_yaml always ends with a newline; println adds another
        self.value
            .to_yaml_string()
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default()
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub fn execute(args: ShowArgs, holder: &ConfigHolder, json_mode: bool) -> Result<()> {
    let document = holder.get();

    let value = match args.key.as_deref() {
        Some(key) => document
            .get(key)
            .cloned()
            .map(ConfigDocument::from)
            .with_context(|| format!("Key '{key}' not found in {}", holder.path()))?,
        None => ConfigDocument::clone(&document),
    };

    let output_data = ShowOutput {
        path: holder.path().to_string(),
        key: args.key,
        value,
    };
    output(&output_data, json_mode);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_output_is_yaml() {
        let out = ShowOutput {
            path: "/etc/app/config.yaml".to_string(),
            key: None,
            value: ConfigDocument::parse("a: 1\nb:\n- 2\n- 3\n").unwrap(),
        };
        assert_eq!(out.to_human(), "a: 1\nb:\n- 2\n- 3");
    }

    #[test]
    fn test_json_output() {
        let out = ShowOutput {
            path: "/etc/app/config.yaml".to_string(),
            key: Some("b".to_string()),
            value: ConfigDocument::parse("[2, 3]").unwrap(),
        };
        assert_eq!(
            out.to_json(),
            serde_json::json!({
                "path": "/etc/app/config.yaml",
                "key": "b",
                "value": [2, 3],
            })
        );
    }
}

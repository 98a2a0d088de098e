//! Output formatting utilities for the CLI.

use serde::Serialize;

/// Result of a `configkit` command, rendered for a terminal or as JSON.
///
/// Commands build one value and hand it to [`output`], which picks the
/// renderer from the global `--json` flag. Errors never go through here;
/// they are reported on stderr by `handle_error`.
pub trait CommandOutput: Serialize {
    /// Plain text for stdout, without a trailing newline.
    fn to_human(&self) -> String;
    fn to_json(&self) -> serde_json::Value;
}

/// Print `result` to stdout in the selected mode.
pub fn output<T: CommandOutput>(result: &T, json_mode: bool) {
    if json_mode {
        println!("{}", serde_json::to_string_pretty(&result.to_json()).unwrap_or_default());
    } else {
        println!("{}", result.to_human());
    }
}

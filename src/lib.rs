//! configkit - load `config.yaml` once, share it, copy it
//!
//! The configuration file lives next to the deployed executable (or in a
//! directory the caller injects). It is parsed exactly once, at an explicit
//! startup call, and the parsed document is then shared read-only for the
//! rest of the process. A missing or malformed file is a startup failure.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): document model, path resolution, errors, ports
//! - **Infrastructure Layer** (`infrastructure`): loader, holder, filesystem, logging
//! - **CLI Layer** (`cli`): the `configkit` binary's commands
//!
//! # Example
//!
//! ```no_run
//! fn main() -> Result<(), configkit::ConfigError> {
//!     configkit::init()?;
//!
//!     let config = configkit::config()?;
//!     if let Some(dir) = config.get("output_dir").and_then(|v| v.as_str()) {
//!         configkit::copy_config(dir)?;
//!     }
//!     Ok(())
//! }
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

pub mod cli;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use domain::models::{ConfigDocument, ConfigPath, CONFIG_FILE_NAME};
pub use domain::ports::ConfigFileSystem;
pub use domain::{ConfigError, ConfigResult};
pub use infrastructure::config::{ConfigHolder, ConfigLoader};
pub use infrastructure::filesystem::LocalFileSystem;

/// Load `config.yaml` from beside the executable and install it as the
/// process-wide configuration.
pub fn init() -> ConfigResult<&'static ConfigHolder> {
    init_with(&ConfigLoader::beside_executable()?)
}

/// Load `dir/config.yaml` and install it as the process-wide configuration.
pub fn init_in_dir(dir: impl AsRef<Path>) -> ConfigResult<&'static ConfigHolder> {
    init_with(&ConfigLoader::in_dir(dir)?)
}

/// Load through `loader` and install the result as the process-wide
/// configuration. Fails if the load fails or if a configuration is already
/// installed.
pub fn init_with<F: ConfigFileSystem>(
    loader: &ConfigLoader<F>,
) -> ConfigResult<&'static ConfigHolder> {
    infrastructure::config::install(ConfigHolder::init(loader)?)
}

/// The process-wide configuration document.
pub fn config() -> ConfigResult<Arc<ConfigDocument>> {
    Ok(infrastructure::config::global()?.get())
}

/// Copy the process-wide configuration file into `dest_dir`.
pub fn copy_config(dest_dir: impl AsRef<Path>) -> ConfigResult<PathBuf> {
    let holder = infrastructure::config::global()?;
    ConfigLoader::new(holder.path().clone()).copy_to(dest_dir)
}

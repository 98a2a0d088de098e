use std::sync::{Arc, OnceLock};

use tracing::debug;

use crate::domain::error::{ConfigError, ConfigResult};
use crate::domain::models::{ConfigDocument, ConfigPath};
use crate::domain::ports::ConfigFileSystem;

use super::loader::ConfigLoader;

static GLOBAL: OnceLock<ConfigHolder> = OnceLock::new();

/// The configuration document, loaded once and shared for the rest of the
/// process.
///
/// Construction is the load. There is no reload and no staleness check, so
/// edits to the file after `init` are not observed.
#[derive(Debug, Clone)]
pub struct ConfigHolder {
    path: ConfigPath,
    document: Arc<ConfigDocument>,
}

impl ConfigHolder {
    /// Eagerly load the document through `loader`.
    pub fn init<F: ConfigFileSystem>(loader: &ConfigLoader<F>) -> ConfigResult<Self> {
        let document = loader.load()?;
        Ok(Self {
            path: loader.path().clone(),
            document: Arc::new(document),
        })
    }

    /// Shared handle to the cached document. Every call returns the same
    /// allocation.
    pub fn get(&self) -> Arc<ConfigDocument> {
        Arc::clone(&self.document)
    }

    pub fn document(&self) -> &ConfigDocument {
        &self.document
    }

    /// Path the document was loaded from.
    pub const fn path(&self) -> &ConfigPath {
        &self.path
    }
}

/// Make `holder` the process-wide configuration.
///
/// Succeeds once per process; later calls fail with `AlreadyInitialized` and
/// leave the first holder in place.
pub fn install(holder: ConfigHolder) -> ConfigResult<&'static ConfigHolder> {
    GLOBAL
        .set(holder)
        .map_err(|_| ConfigError::AlreadyInitialized)?;
    let installed = global()?;
    debug!(path = %installed.path(), "process-wide configuration installed");
    Ok(installed)
}

/// The process-wide configuration, if `install` has run.
pub fn global() -> ConfigResult<&'static ConfigHolder> {
    GLOBAL.get().ok_or(ConfigError::NotInitialized)
}

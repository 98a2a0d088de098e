//! Domain errors for loading, caching, and copying the configuration file.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while resolving, loading, caching, or copying `config.yaml`.
///
/// Nothing here is recovered locally. Every variant reaches the caller, and
/// the hosting binary treats any of them at startup as fatal.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to parse YAML in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Refusing to copy {} onto itself", path.display())]
    SameFile { path: PathBuf },

    #[error("Cannot determine the executable directory: {0}")]
    ExecutableLocation(#[source] std::io::Error),

    #[error("Process-wide configuration is already initialized")]
    AlreadyInitialized,

    #[error("Process-wide configuration has not been initialized")]
    NotInitialized,
}

pub type ConfigResult<T> = Result<T, ConfigError>;

impl ConfigError {
    /// Classify an `io::Error` raised while touching `path`.
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Io { path, source }
        }
    }

    /// True for the missing-file kind.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

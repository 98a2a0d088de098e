use std::fmt;
use std::path::{Path, PathBuf};

use crate::domain::error::{ConfigError, ConfigResult};

/// File name of the configuration document, both at the source and at every
/// copy destination.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Absolute location of `config.yaml`, fixed once resolved.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfigPath(PathBuf);

impl ConfigPath {
    /// Resolve `config.yaml` inside an explicit base directory.
    ///
    /// A relative `dir` is anchored at the current working directory so the
    /// stored path is always absolute. The directory is not required to exist;
    /// a missing file surfaces when the document is loaded.
    pub fn in_dir(dir: impl AsRef<Path>) -> ConfigResult<Self> {
        let dir = dir.as_ref();
        let base = if dir.is_absolute() {
            dir.to_path_buf()
        } else {
            std::env::current_dir()
                .map_err(|e| ConfigError::from_io(dir, e))?
                .join(dir)
        };
        Ok(Self(base.join(CONFIG_FILE_NAME)))
    }

    /// Resolve `config.yaml` next to the running executable.
    ///
    /// This is the deployment convention: the file ships in the same directory
    /// as the binary. Symlinks to the binary are followed first.
    pub fn beside_executable() -> ConfigResult<Self> {
        let exe = std::env::current_exe().map_err(ConfigError::ExecutableLocation)?;
        let exe = std::fs::canonicalize(&exe).map_err(ConfigError::ExecutableLocation)?;
        let dir = exe.parent().ok_or_else(|| {
            ConfigError::ExecutableLocation(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{} has no parent directory", exe.display()),
            ))
        })?;
        Ok(Self(dir.join(CONFIG_FILE_NAME)))
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Directory the file lives in.
    pub fn dir(&self) -> &Path {
        self.0.parent().unwrap_or_else(|| Path::new("/"))
    }

    /// Where a copy of this file lands inside `dir`.
    pub fn destination_in(dir: impl AsRef<Path>) -> PathBuf {
        dir.as_ref().join(CONFIG_FILE_NAME)
    }
}

impl AsRef<Path> for ConfigPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl fmt::Display for ConfigPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

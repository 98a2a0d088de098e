use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::domain::error::{ConfigError, ConfigResult};
use crate::domain::models::{ConfigDocument, ConfigPath};
use crate::domain::ports::ConfigFileSystem;
use crate::infrastructure::filesystem::LocalFileSystem;

/// Loads and copies a single `config.yaml`.
///
/// The loader performs no caching of its own; every `load` is one read.
/// Keeping the result for the process lifetime is `ConfigHolder`'s job.
#[derive(Debug, Clone)]
pub struct ConfigLoader<F = LocalFileSystem> {
    path: ConfigPath,
    fs: F,
}

impl ConfigLoader<LocalFileSystem> {
    pub const fn new(path: ConfigPath) -> Self {
        Self {
            path,
            fs: LocalFileSystem,
        }
    }

    /// Loader for `config.yaml` next to the running executable.
    pub fn beside_executable() -> ConfigResult<Self> {
        Ok(Self::new(ConfigPath::beside_executable()?))
    }

    /// Loader for `config.yaml` inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> ConfigResult<Self> {
        Ok(Self::new(ConfigPath::in_dir(dir)?))
    }
}

impl<F: ConfigFileSystem> ConfigLoader<F> {
    pub const fn with_filesystem(path: ConfigPath, fs: F) -> Self {
        Self { path, fs }
    }

    pub const fn path(&self) -> &ConfigPath {
        &self.path
    }

    /// Read and parse the file.
    ///
    /// A missing file is `NotFound`, never an empty document.
    pub fn load(&self) -> ConfigResult<ConfigDocument> {
        let path = self.path.as_path();
        debug!(path = %path.display(), "reading configuration");

        let raw = self
            .fs
            .read(path)
            .map_err(|e| ConfigError::from_io(path, e))?;

        let document = ConfigDocument::parse(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        info!(
            path = %path.display(),
            bytes = raw.len(),
            keys = document.keys().len(),
            "configuration loaded"
        );
        Ok(document)
    }

    /// Copy the raw file to `dest_dir/config.yaml`, replacing any file there.
    ///
    /// `dest_dir` must already exist and must not be the directory the file
    /// is loaded from. Returns the destination file path.
    pub fn copy_to(&self, dest_dir: impl AsRef<Path>) -> ConfigResult<PathBuf> {
        let dest_dir = dest_dir.as_ref();
        if !self.fs.is_dir(dest_dir) {
            return Err(ConfigError::NotFound {
                path: dest_dir.to_path_buf(),
            });
        }

        let source = self.path.as_path();
        let dest = ConfigPath::destination_in(dest_dir);

        // Copying a file onto itself truncates it before it is read
        let same = self
            .fs
            .same_file(source, &dest)
            .map_err(|e| ConfigError::from_io(&dest, e))?;
        if same {
            return Err(ConfigError::SameFile { path: dest });
        }

        let bytes = self.fs.copy(source, &dest).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::NotFound {
                    path: source.to_path_buf(),
                }
            } else {
                ConfigError::Io {
                    path: dest.clone(),
                    source: e,
                }
            }
        })?;

        info!(
            source = %source.display(),
            dest = %dest.display(),
            bytes,
            "configuration copied"
        );
        Ok(dest)
    }
}

use std::io;
use std::path::Path;

/// Filesystem operations needed to load and copy the configuration file.
///
/// Errors are plain `io::Error`s; the loader classifies them into
/// `ConfigError` variants together with the path involved.
pub trait ConfigFileSystem: Send + Sync {
    /// Read the whole file as raw bytes. Decoding is the parser's job.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Copy `from` to `to` byte-for-byte, replacing `to` if it exists.
    /// Returns the number of bytes copied.
    fn copy(&self, from: &Path, to: &Path) -> io::Result<u64>;

    /// True when both paths name the same file on disk. A path that does not
    /// exist is never the same file as anything.
    fn same_file(&self, a: &Path, b: &Path) -> io::Result<bool>;

    fn is_dir(&self, path: &Path) -> bool;
}

impl<T: ConfigFileSystem + ?Sized> ConfigFileSystem for std::sync::Arc<T> {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        (**self).read(path)
    }

    fn copy(&self, from: &Path, to: &Path) -> io::Result<u64> {
        (**self).copy(from, to)
    }

    fn same_file(&self, a: &Path, b: &Path) -> io::Result<bool> {
        (**self).same_file(a, b)
    }

    fn is_dir(&self, path: &Path) -> bool {
        (**self).is_dir(path)
    }
}

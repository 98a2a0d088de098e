//! Local disk implementation of the `ConfigFileSystem` port.

use std::io;
use std::path::Path;

use crate::domain::ports::ConfigFileSystem;

/// Reads and copies through `std::fs`, with no buffering or retry.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileSystem;

impl ConfigFileSystem for LocalFileSystem {
    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }

    fn copy(&self, from: &Path, to: &Path) -> io::Result<u64> {
        std::fs::copy(from, to)
    }

    fn same_file(&self, a: &Path, b: &Path) -> io::Result<bool> {
        let (meta_a, meta_b) = match (std::fs::metadata(a), std::fs::metadata(b)) {
            (Ok(meta_a), Ok(meta_b)) => (meta_a, meta_b),
            (Err(e), _) | (_, Err(e)) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
            (Err(e), _) | (_, Err(e)) => return Err(e),
        };

        // Device and inode catch hard links as well as symlinks
        #[cfg(unix)]
        {
            use std::os::unix::fs::MetadataExt;
            Ok(meta_a.dev() == meta_b.dev() && meta_a.ino() == meta_b.ino())
        }
        #[cfg(not(unix))]
        {
            let _ = (meta_a, meta_b);
            Ok(std::fs::canonicalize(a)? == std::fs::canonicalize(b)?)
        }
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_copy_overwrites_existing() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src.yaml");
        let dst = tmp.path().join("dst.yaml");
        std::fs::write(&src, "new: 1\n").unwrap();
        std::fs::write(&dst, "old: contents that are longer\n").unwrap();

        let copied = LocalFileSystem.copy(&src, &dst).unwrap();
        assert_eq!(copied, 7);
        assert_eq!(std::fs::read_to_string(&dst).unwrap(), "new: 1\n");
    }

    #[test]
    fn test_is_dir() {
        let tmp = TempDir::new().unwrap();
        assert!(LocalFileSystem.is_dir(tmp.path()));
        assert!(!LocalFileSystem.is_dir(&tmp.path().join("missing")));
    }

    #[test]
    fn test_same_file() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("config.yaml");
        let other = tmp.path().join("other.yaml");
        std::fs::write(&file, "a: 1\n").unwrap();
        std::fs::write(&other, "a: 1\n").unwrap();

        assert!(LocalFileSystem.same_file(&file, &file).unwrap());
        assert!(LocalFileSystem
            .same_file(&file, &tmp.path().join(".").join("config.yaml"))
            .unwrap());
        assert!(!LocalFileSystem.same_file(&file, &other).unwrap());
        assert!(!LocalFileSystem
            .same_file(&file, &tmp.path().join("missing.yaml"))
            .unwrap());
    }

    #[cfg(unix)]
    #[test]
    fn test_same_file_through_links() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("config.yaml");
        std::fs::write(&file, "a: 1\n").unwrap();

        let hard = tmp.path().join("hard.yaml");
        std::fs::hard_link(&file, &hard).unwrap();
        let soft = tmp.path().join("soft.yaml");
        std::os::unix::fs::symlink(&file, &soft).unwrap();

        assert!(LocalFileSystem.same_file(&file, &hard).unwrap());
        assert!(LocalFileSystem.same_file(&file, &soft).unwrap());
    }
}

//! Port trait definitions (Hexagonal Architecture)
//!
//! - ConfigFileSystem: raw file access used by the configuration loader
//!
//! The loader only talks to the filesystem through this port, which lets
//! tests count reads or substitute an in-memory store.

pub mod config_filesystem;

pub use config_filesystem::ConfigFileSystem;

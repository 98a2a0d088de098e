//! Configuration management infrastructure
//!
//! - Path resolution beside the executable or in an injected directory
//! - One-shot YAML loading through the `ConfigFileSystem` port
//! - The process-wide holder that keeps the parsed document
//! - Raw file copy to another directory

pub mod holder;
pub mod loader;

pub use holder::{global, install, ConfigHolder};
pub use loader::ConfigLoader;

//! Domain layer for configkit
//!
//! Holds the configuration document model, path resolution, the error
//! taxonomy, and the filesystem port the loader reads through.

pub mod error;
pub mod models;
pub mod ports;

pub use error::{ConfigError, ConfigResult};

//! Infrastructure layer module
//!
//! - Configuration loading, caching, and copying
//! - Local filesystem adapter for the domain port
//! - Logging infrastructure

pub mod config;
pub mod filesystem;
pub mod logging;

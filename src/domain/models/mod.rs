pub mod config_path;
pub mod document;

pub use config_path::{ConfigPath, CONFIG_FILE_NAME};
pub use document::ConfigDocument;

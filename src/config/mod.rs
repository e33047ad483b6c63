//! Configuration management for paychat.
//!
//! This module handles loading and saving configuration from `~/.paychat/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{ColorSetting, Config, DatabaseConfig, GeneralConfig, LoggingConfig};

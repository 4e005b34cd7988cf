pub mod app_config;
pub mod parse;
pub mod paths;

pub use app_config::{AppConfig, DefaultsConfig, OutputConfig};
pub use parse::parse_config_content;

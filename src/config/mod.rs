pub mod env;
mod loader;

pub use env::{AppConfig, ClassifierConfig, DirectoryConfig, YouTubeConfig};
pub use loader::load_config;

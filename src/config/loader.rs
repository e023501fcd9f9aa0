use std::{env, str::FromStr};

use super::env::{
    AppConfig, ClassifierConfig, ConfigError, DirectoryConfig, LoggingConfig, ServerConfig,
    YouTubeConfig,
};

pub const DEFAULT_YOUTUBE_API_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";
pub const DEFAULT_CLASSIFIER_API_URL: &str = "https://api-inference.huggingface.co/models";
pub const DEFAULT_CLASSIFIER_MODEL: &str = "facebook/bart-large-mnli";

pub fn load_config() -> Result<AppConfig, ConfigError> {
    AppConfig::from_lookup(|key| env::var(key).ok())
}

impl AppConfig {
    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let youtube = YouTubeConfig {
            api_key: var("YOUTUBE_API_KEY").ok_or(ConfigError::Missing("YOUTUBE_API_KEY"))?,
            base_url: var("YOUTUBE_API_BASE_URL")
                .unwrap_or_else(|| DEFAULT_YOUTUBE_API_BASE_URL.to_string()),
            comment_limit: parse_or(&var, "COMMENT_LIMIT", 100)?,
        };

        let classifier = ClassifierConfig {
            api_url: var("CLASSIFIER_API_URL")
                .unwrap_or_else(|| DEFAULT_CLASSIFIER_API_URL.to_string()),
            model: var("CLASSIFIER_MODEL").unwrap_or_else(|| DEFAULT_CLASSIFIER_MODEL.to_string()),
            api_token: var("CLASSIFIER_API_TOKEN"),
            max_concurrency: parse_or(&var, "CLASSIFIER_MAX_CONCURRENCY", 1)?,
        };
        if classifier.max_concurrency == 0 {
            return Err(ConfigError::Invalid {
                key: "CLASSIFIER_MAX_CONCURRENCY",
                value: "0".to_string(),
            });
        }

        let server = ServerConfig {
            host: var("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse_or(&var, "SERVER_PORT", 5000)?,
        };

        let directories = DirectoryConfig {
            logs_dir: var("LOGS_DIR").unwrap_or_else(|| "logs".to_string()),
        };

        let logging = LoggingConfig {
            level: var("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
        };

        Ok(Self {
            youtube,
            classifier,
            server,
            directories,
            logging,
        })
    }
}

fn parse_or<T, F>(var: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match var(key) {
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { key, value }),
        None => Ok(default),
    }
}

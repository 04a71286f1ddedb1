use figment::{
    providers::{Env, Format, Json, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::YoutubeError;

pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";
const CONFIG_FILE: &str = "youtube.json";
const ENV_PREFIX: &str = "YOUTUBE_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub api_key: String,
    pub base_url: String,
    /// Parts requested by `get_video_by_id` when the caller passes none.
    pub video_parts: Vec<String>,
    /// Parts requested by `get_channel_by_id` when the caller passes none.
    pub channel_parts: Vec<String>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        ServiceConfig {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            video_parts: vec![
                "snippet".to_string(),
                "contentDetails".to_string(),
                "statistics".to_string(),
            ],
            channel_parts: vec!["snippet".to_string()],
        }
    }
}

impl ServiceConfig {
    pub fn new(api_key: impl Into<String>) -> ServiceConfig {
        ServiceConfig {
            api_key: api_key.into(),
            ..ServiceConfig::default()
        }
    }

    /// Defaults, overridden by `youtube.json` in the working directory, then
    /// by `YOUTUBE_*` environment variables.
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(ServiceConfig::default()))
            .merge(Json::file(CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn load() -> Result<ServiceConfig, YoutubeError> {
        ServiceConfig::from_figment(ServiceConfig::figment())
    }

    pub fn from_figment(figment: Figment) -> Result<ServiceConfig, YoutubeError> {
        let config: ServiceConfig = figment.extract()?;

        if config.api_key.trim().is_empty() {
            let error = figment::Error::from("no API key configured, set YOUTUBE_API_KEY".to_string());
            return Err(error.into());
        }

        Ok(config)
    }
}

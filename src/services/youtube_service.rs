use log::{debug, info, warn};
use reqwest::Url;
use serde::Deserialize;
use serde_json::Value;
use std::iter;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::YoutubeError;
use crate::models::{channel::Channel, config::ServiceConfig, video::Video};
use crate::responses::{ChannelListResponse, SearchResponse, VideoListResponse};

use super::transport::{ReqwestTransport, Transport};

const SEARCH_ENDPOINT: &str = "search";
const VIDEOS_ENDPOINT: &str = "videos";
const CHANNELS_ENDPOINT: &str = "channels";

type Query = Vec<(String, String)>;

/// Where the most recent search left off.
#[derive(Debug, Clone)]
struct SearchCursor {
    sequence: u64,
    query: Query,
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GoogleApiErrorResponse {
    error: GoogleApiError,
}

#[derive(Debug, Deserialize)]
struct GoogleApiError {
    message: String,
    #[serde(default)]
    errors: Vec<GoogleApiErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct GoogleApiErrorDetail {
    reason: Option<String>,
}

pub struct YoutubeService {
    config: ServiceConfig,
    transport: Box<dyn Transport>,
    sequence: AtomicU64,
    cursor: Mutex<Option<SearchCursor>>,
}

impl YoutubeService {
    pub fn new(api_key: impl Into<String>) -> YoutubeService {
        YoutubeService::from_config(ServiceConfig::new(api_key))
    }

    pub fn from_config(config: ServiceConfig) -> YoutubeService {
        YoutubeService::with_transport(config, ReqwestTransport::new())
    }

    pub fn with_transport(
        config: ServiceConfig,
        transport: impl Transport + 'static,
    ) -> YoutubeService {
        YoutubeService {
            config,
            transport: Box::new(transport),
            sequence: AtomicU64::new(0),
            cursor: Mutex::new(None),
        }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Searches for videos. Sends `q`, `maxResults`, `part=snippet` and
    /// `type=video`; `type=video` keeps channel and playlist results out,
    /// since those do not map to a [`Video`].
    ///
    /// `extra_params` are added to the query and replace the defaults they
    /// share a name with, so passing `("type", "video,channel")` overrides
    /// the `type=video` default.
    pub async fn search(
        &self,
        query: &str,
        max_results: u32,
        extra_params: &[(&str, &str)],
    ) -> Result<SearchResponse, YoutubeError> {
        let mut params: Query = vec![
            ("q".to_string(), query.to_string()),
            ("maxResults".to_string(), max_results.to_string()),
            ("part".to_string(), "snippet".to_string()),
            ("type".to_string(), "video".to_string()),
        ];
        for (key, value) in extra_params {
            set_param(&mut params, key, value);
        }

        info!("Searching videos for \"{}\"", query);
        self.fetch_search_page(params).await
    }

    /// Fetches the page after the one most recently returned by `search` or
    /// `more_search_results`.
    pub async fn more_search_results(&self) -> Result<SearchResponse, YoutubeError> {
        let params = {
            let cursor = self.lock_cursor();
            let cursor = cursor
                .as_ref()
                .ok_or_else(|| YoutubeError::State("no search has been performed".to_string()))?;
            let page_token = cursor
                .next_page_token
                .as_deref()
                .ok_or_else(|| YoutubeError::State("no more results".to_string()))?;

            let mut params = cursor.query.clone();
            set_param(&mut params, "pageToken", page_token);
            params
        };

        self.fetch_search_page(params).await
    }

    pub fn has_more_results(&self) -> bool {
        self.lock_cursor()
            .as_ref()
            .map_or(false, |cursor| cursor.next_page_token.is_some())
    }

    /// Empty `parts` requests the configured video parts.
    pub async fn list_videos(
        &self,
        id: &str,
        parts: &[&str],
    ) -> Result<VideoListResponse, YoutubeError> {
        let params = vec![
            ("id".to_string(), id.to_string()),
            ("part".to_string(), join_parts(parts, &self.config.video_parts)),
        ];

        let contents = self.fetch(VIDEOS_ENDPOINT, &params).await?;
        Ok(VideoListResponse::new(contents))
    }

    pub async fn get_video_by_id(&self, id: &str, parts: &[&str]) -> Result<Video, YoutubeError> {
        self.list_videos(id, parts).await?.into_video()
    }

    /// Empty `parts` requests the configured channel parts.
    pub async fn list_channels(
        &self,
        id: &str,
        parts: &[&str],
    ) -> Result<ChannelListResponse, YoutubeError> {
        let params = vec![
            ("id".to_string(), id.to_string()),
            ("part".to_string(), join_parts(parts, &self.config.channel_parts)),
        ];

        let contents = self.fetch(CHANNELS_ENDPOINT, &params).await?;
        Ok(ChannelListResponse::new(contents))
    }

    pub async fn get_channel_by_id(
        &self,
        id: &str,
        parts: &[&str],
    ) -> Result<Channel, YoutubeError> {
        self.list_channels(id, parts).await?.into_channel()
    }

    async fn fetch_search_page(&self, params: Query) -> Result<SearchResponse, YoutubeError> {
        let sequence = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;

        let contents = self.fetch(SEARCH_ENDPOINT, &params).await?;
        let response = SearchResponse::new(contents);

        self.remember_page(SearchCursor {
            sequence,
            query: params,
            next_page_token: response.next_page_token().map(str::to_string),
        });

        Ok(response)
    }

    /// Requests may finish out of order; a page only replaces the cursor
    /// when it was requested after the page currently stored.
    fn remember_page(&self, page: SearchCursor) {
        let mut cursor = self.lock_cursor();

        if cursor.as_ref().map_or(true, |current| current.sequence < page.sequence) {
            *cursor = Some(page);
        } else {
            debug!("Discarding cursor of stale search request {}", page.sequence);
        }
    }

    fn lock_cursor(&self) -> MutexGuard<'_, Option<SearchCursor>> {
        self.cursor.lock().unwrap_or_else(PoisonError::into_inner)
    }

    async fn fetch(&self, endpoint: &str, params: &[(String, String)]) -> Result<Value, YoutubeError> {
        let base = format!("{}/{}", self.config.base_url.trim_end_matches('/'), endpoint);
        let key = ("key".to_string(), self.config.api_key.clone());
        let url = Url::parse_with_params(&base, params.iter().chain(iter::once(&key)))
            .map_err(|e| YoutubeError::InvalidUrl(format!("{}: {}", base, e)))?;

        debug!("GET {}?{}", base, describe(params));

        let response = self.transport.get(url).await?;

        if !response.is_success() {
            let error = api_error(response.status, &response.body);
            warn!("YouTube {} request failed: {}", endpoint, error);
            return Err(error);
        }

        let contents = serde_json::from_slice::<Value>(&response.body)?;
        Ok(contents)
    }
}

/// Sets `key`, replacing an existing value in place.
fn set_param(params: &mut Query, key: &str, value: &str) {
    match params.iter_mut().find(|(name, _)| name == key) {
        Some((_, current)) => *current = value.to_string(),
        None => params.push((key.to_string(), value.to_string())),
    }
}

fn join_parts(parts: &[&str], defaults: &[String]) -> String {
    if parts.is_empty() {
        defaults.join(",")
    } else {
        parts.join(",")
    }
}

/// Query for logging; the API key is never part of `params`.
fn describe(params: &[(String, String)]) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&")
}

fn api_error(status: u16, body: &[u8]) -> YoutubeError {
    match serde_json::from_slice::<GoogleApiErrorResponse>(body) {
        Ok(parsed) => YoutubeError::Api {
            status,
            reason: parsed.error.errors.into_iter().find_map(|detail| detail.reason),
            message: parsed.error.message,
        },
        Err(_) => YoutubeError::Api {
            status,
            reason: None,
            message: String::from_utf8_lossy(body).trim().to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::{api_error, join_parts, set_param, Query};
    use crate::error::YoutubeError;

    #[test]
    fn set_param_replaces_or_appends() {
        let mut params: Query = vec![
            ("q".to_string(), "surfing".to_string()),
            ("type".to_string(), "video".to_string()),
        ];

        set_param(&mut params, "type", "channel");
        set_param(&mut params, "order", "date");

        assert_eq!(
            params,
            vec![
                ("q".to_string(), "surfing".to_string()),
                ("type".to_string(), "channel".to_string()),
                ("order".to_string(), "date".to_string()),
            ]
        );
    }

    #[test]
    fn empty_parts_fall_back_to_defaults() {
        let defaults = vec!["snippet".to_string(), "statistics".to_string()];

        assert_eq!(join_parts(&[], &defaults), "snippet,statistics");
        assert_eq!(join_parts(&["id"], &defaults), "id");
    }

    #[test]
    fn google_error_envelope_is_unpacked() {
        let body = br#"{
            "error": {
                "code": 403,
                "message": "The request cannot be completed because you have exceeded your quota.",
                "errors": [{ "message": "quota", "domain": "youtube.quota", "reason": "quotaExceeded" }]
            }
        }"#;

        match api_error(403, body) {
            YoutubeError::Api { status, reason, message } => {
                assert_eq!(status, 403);
                assert_eq!(reason.as_deref(), Some("quotaExceeded"));
                assert!(message.starts_with("The request cannot be completed"));
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn non_json_error_body_is_kept_as_message() {
        match api_error(502, b"  Bad Gateway\n") {
            YoutubeError::Api { reason, message, .. } => {
                assert_eq!(reason, None);
                assert_eq!(message, "Bad Gateway");
            }
            other => panic!("unexpected error {:?}", other),
        }
    }
}

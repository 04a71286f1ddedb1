use serde_json::Value;
use std::sync::OnceLock;

use crate::error::YoutubeError;
use crate::mapper;
use crate::models::video::Video;

use super::items;

/// One page of `search` results.
#[derive(Debug)]
pub struct SearchResponse {
    contents: Value,
    videos: OnceLock<Vec<Video>>,
}

impl SearchResponse {
    pub fn new(contents: Value) -> SearchResponse {
        SearchResponse {
            contents,
            videos: OnceLock::new(),
        }
    }

    /// Videos of this page in the order the API returned them.
    pub fn videos(&self) -> Result<&[Video], YoutubeError> {
        if let Some(videos) = self.videos.get() {
            return Ok(videos.as_slice());
        }

        let videos = mapper::map_videos(items(&self.contents)?)?;
        Ok(self.videos.get_or_init(|| videos).as_slice())
    }

    pub fn next_page_token(&self) -> Option<&str> {
        self.contents.get("nextPageToken").and_then(Value::as_str)
    }

    pub fn prev_page_token(&self) -> Option<&str> {
        self.contents.get("prevPageToken").and_then(Value::as_str)
    }

    pub fn has_next_page(&self) -> bool {
        self.next_page_token().is_some()
    }

    /// Estimated by the API, not an exact count.
    pub fn total_results(&self) -> Option<u64> {
        self.page_info("totalResults")
    }

    pub fn results_per_page(&self) -> Option<u64> {
        self.page_info("resultsPerPage")
    }

    pub fn contents(&self) -> &Value {
        &self.contents
    }

    pub fn into_contents(self) -> Value {
        self.contents
    }

    fn page_info(&self, key: &str) -> Option<u64> {
        self.contents
            .get("pageInfo")
            .and_then(|page_info| page_info.get(key))
            .and_then(Value::as_u64)
    }
}

use serde_json::Value;
use std::sync::OnceLock;

use crate::error::YoutubeError;
use crate::mapper;
use crate::models::video::Video;

use super::first_item;

/// Payload of `videos.list`, mapped on first access.
#[derive(Debug)]
pub struct VideoListResponse {
    contents: Value,
    video: OnceLock<Video>,
}

impl VideoListResponse {
    pub fn new(contents: Value) -> VideoListResponse {
        VideoListResponse {
            contents,
            video: OnceLock::new(),
        }
    }

    /// The first listed video. Mapped once; later calls return the same
    /// instance. `NotFound` when the id matched nothing.
    pub fn video(&self) -> Result<&Video, YoutubeError> {
        if let Some(video) = self.video.get() {
            return Ok(video);
        }

        let video = mapper::map_video(first_item(&self.contents, "video")?)?;
        Ok(self.video.get_or_init(|| video))
    }

    /// Takes the video out of the response, mapping it if that has not
    /// happened yet.
    pub fn into_video(self) -> Result<Video, YoutubeError> {
        match self.video.into_inner() {
            Some(video) => Ok(video),
            None => Ok(mapper::map_video(first_item(&self.contents, "video")?)?),
        }
    }

    pub fn contents(&self) -> &Value {
        &self.contents
    }

    pub fn into_contents(self) -> Value {
        self.contents
    }
}

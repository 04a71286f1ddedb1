use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::utils::duration_utils::parse_iso8601_duration;

use super::thumbnail::{Thumbnail, ThumbnailSize, Thumbnails};

const WATCH_URL: &str = "https://www.youtube.com/watch?v=";

/// A video as returned by `search` or `videos.list`.
///
/// Snippet fields are `None` when the payload carried no `snippet`;
/// `statistics` and `details` are `None` when their part was not requested.
#[derive(Debug, Clone, PartialEq)]
pub struct Video {
    pub(crate) video_id: String,
    pub(crate) title: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) published_at: Option<DateTime<Utc>>,
    pub(crate) channel_id: Option<String>,
    pub(crate) channel_title: Option<String>,
    pub(crate) tags: Vec<String>,
    pub(crate) category_id: Option<String>,
    pub(crate) default_language: Option<String>,
    pub(crate) default_audio_language: Option<String>,
    pub(crate) live_broadcast_content: Option<String>,
    pub(crate) thumbnails: Thumbnails,
    pub(crate) statistics: Option<VideoStatistics>,
    pub(crate) details: Option<VideoContentDetails>,
}

impl Video {
    pub fn video_id(&self) -> &str {
        &self.video_id
    }

    pub fn url(&self) -> String {
        format!("{}{}", WATCH_URL, self.video_id)
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        self.published_at
    }

    pub fn channel_id(&self) -> Option<&str> {
        self.channel_id.as_deref()
    }

    pub fn channel_title(&self) -> Option<&str> {
        self.channel_title.as_deref()
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn category_id(&self) -> Option<&str> {
        self.category_id.as_deref()
    }

    pub fn default_language(&self) -> Option<&str> {
        self.default_language.as_deref()
    }

    pub fn default_audio_language(&self) -> Option<&str> {
        self.default_audio_language.as_deref()
    }

    /// `none`, `upcoming` or `live`.
    pub fn live_broadcast_content(&self) -> Option<&str> {
        self.live_broadcast_content.as_deref()
    }

    pub fn thumbnails(&self) -> &Thumbnails {
        &self.thumbnails
    }

    pub fn thumbnail(&self, size: ThumbnailSize) -> Option<&Thumbnail> {
        self.thumbnails.get(size.as_str())
    }

    pub fn thumbnail_by_label(&self, label: &str) -> Option<&Thumbnail> {
        self.thumbnails.get(label)
    }

    pub fn statistics(&self) -> Option<&VideoStatistics> {
        self.statistics.as_ref()
    }

    pub fn details(&self) -> Option<&VideoContentDetails> {
        self.details.as_ref()
    }
}

/// Engagement counters. A counter the API left out is `None`, which is not
/// the same as a reported zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoStatistics {
    pub(crate) view_count: Option<u64>,
    pub(crate) like_count: Option<u64>,
    pub(crate) dislike_count: Option<u64>,
    pub(crate) favorite_count: Option<u64>,
    pub(crate) comment_count: Option<u64>,
}

impl VideoStatistics {
    pub fn view_count(&self) -> Option<u64> {
        self.view_count
    }

    pub fn like_count(&self) -> Option<u64> {
        self.like_count
    }

    pub fn dislike_count(&self) -> Option<u64> {
        self.dislike_count
    }

    pub fn favorite_count(&self) -> Option<u64> {
        self.favorite_count
    }

    pub fn comment_count(&self) -> Option<u64> {
        self.comment_count
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoContentDetails {
    pub(crate) duration: VideoDuration,
    pub(crate) dimension: Option<String>,
    pub(crate) definition: Option<String>,
    pub(crate) caption: Option<String>,
    pub(crate) licensed_content: Option<bool>,
    pub(crate) projection: Option<String>,
}

impl VideoContentDetails {
    pub fn duration(&self) -> &VideoDuration {
        &self.duration
    }

    /// `2d` or `3d`.
    pub fn dimension(&self) -> Option<&str> {
        self.dimension.as_deref()
    }

    /// `hd` or `sd`.
    pub fn definition(&self) -> Option<&str> {
        self.definition.as_deref()
    }

    /// The caption flag exactly as sent, `"true"` or `"false"`.
    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    /// Parsed caption flag; `None` when absent or not a boolean literal.
    pub fn has_captions(&self) -> Option<bool> {
        match self.caption.as_deref() {
            Some("true") => Some(true),
            Some("false") => Some(false),
            _ => None,
        }
    }

    pub fn licensed_content(&self) -> Option<bool> {
        self.licensed_content
    }

    pub fn is_licensed_content(&self) -> bool {
        self.licensed_content.unwrap_or(false)
    }

    /// `rectangular` or `360`.
    pub fn projection(&self) -> Option<&str> {
        self.projection.as_deref()
    }
}

/// Video length, kept in the components the API reported it in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VideoDuration {
    days: u64,
    hours: u64,
    minutes: u64,
    seconds: u64,
}

impl VideoDuration {
    pub fn days(&self) -> u64 {
        self.days
    }

    pub fn hours(&self) -> u64 {
        self.hours
    }

    pub fn minutes(&self) -> u64 {
        self.minutes
    }

    pub fn seconds(&self) -> u64 {
        self.seconds
    }

    pub fn total_seconds(&self) -> u64 {
        ((self.days * 24 + self.hours) * 60 + self.minutes) * 60 + self.seconds
    }

    pub fn as_std(&self) -> Duration {
        Duration::from_secs(self.total_seconds())
    }
}

impl FromStr for VideoDuration {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (days, hours, minutes, seconds) = parse_iso8601_duration(value)
            .ok_or_else(|| "not an ISO-8601 duration".to_string())?;

        Ok(VideoDuration {
            days,
            hours,
            minutes,
            seconds,
        })
    }
}

/// Formats as `H:MM:SS`, or `M:SS` below one hour.
impl fmt::Display for VideoDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.total_seconds();
        let (hours, minutes, seconds) = (total / 3600, total / 60 % 60, total % 60);

        if hours > 0 {
            write!(f, "{}:{:02}:{:02}", hours, minutes, seconds)
        } else {
            write!(f, "{}:{:02}", minutes, seconds)
        }
    }
}

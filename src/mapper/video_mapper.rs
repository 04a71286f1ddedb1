use chrono::{DateTime, Utc};
use log::debug;
use serde_json::Value;

use crate::error::MappingError;
use crate::models::thumbnail::Thumbnails;
use crate::models::video::{Video, VideoContentDetails, VideoDuration, VideoStatistics};

use super::fields::Fields;
use super::map_thumbnails;

#[derive(Default)]
struct VideoSnippet {
    title: Option<String>,
    description: Option<String>,
    published_at: Option<DateTime<Utc>>,
    channel_id: Option<String>,
    channel_title: Option<String>,
    tags: Vec<String>,
    category_id: Option<String>,
    default_language: Option<String>,
    default_audio_language: Option<String>,
    live_broadcast_content: Option<String>,
    thumbnails: Thumbnails,
}

/// Maps a search result or a `videos.list` item.
pub fn map_video(item: &Value) -> Result<Video, MappingError> {
    let item = Fields::new("item", item)?;

    let snippet = match item.object("snippet")? {
        Some(snippet) => map_snippet(&snippet)?,
        None => VideoSnippet::default(),
    };

    let video_id = map_video_id(&item)?;

    // contentDetails and statistics sit next to snippet, not inside it
    let statistics = item
        .object("statistics")?
        .map(|statistics| map_statistics(&statistics))
        .transpose()?;
    let details = item
        .object("contentDetails")?
        .map(|details| map_content_details(&details))
        .transpose()?;

    Ok(Video {
        video_id,
        title: snippet.title,
        description: snippet.description,
        published_at: snippet.published_at,
        channel_id: snippet.channel_id,
        channel_title: snippet.channel_title,
        tags: snippet.tags,
        category_id: snippet.category_id,
        default_language: snippet.default_language,
        default_audio_language: snippet.default_audio_language,
        live_broadcast_content: snippet.live_broadcast_content,
        thumbnails: snippet.thumbnails,
        statistics,
        details,
    })
}

/// Maps every item in order; the first failing item fails the list.
pub fn map_videos(items: &[Value]) -> Result<Vec<Video>, MappingError> {
    let videos = items.iter().map(map_video).collect::<Result<Vec<_>, _>>()?;
    debug!("Mapped {} videos", videos.len());

    Ok(videos)
}

/// `videos.list` returns the id as a bare string, `search` nests it as
/// `{ "kind": ..., "videoId": ... }`.
fn map_video_id(item: &Fields) -> Result<String, MappingError> {
    match item.get("id") {
        Some(Value::String(id)) => Ok(id.clone()),
        Some(id @ Value::Object(_)) => {
            Fields::new(item.field_path("id"), id)?.required_string("videoId")
        }
        Some(other) => Err(item.mismatch("id", "a string or an object", other)),
        None => Err(item.missing("id")),
    }
}

fn map_snippet(snippet: &Fields) -> Result<VideoSnippet, MappingError> {
    let thumbnails = match snippet.object("thumbnails")? {
        Some(thumbnails) => map_thumbnails(&thumbnails)?,
        None => Thumbnails::new(),
    };

    Ok(VideoSnippet {
        title: Some(snippet.required_string("title")?),
        description: snippet.string("description")?,
        published_at: Some(snippet.required_timestamp("publishedAt")?),
        channel_id: snippet.string("channelId")?,
        channel_title: snippet.string("channelTitle")?,
        tags: snippet.strings("tags")?,
        category_id: snippet.string("categoryId")?,
        default_language: snippet.string("defaultLanguage")?,
        default_audio_language: snippet.string("defaultAudioLanguage")?,
        live_broadcast_content: snippet.string("liveBroadcastContent")?,
        thumbnails,
    })
}

fn map_statistics(statistics: &Fields) -> Result<VideoStatistics, MappingError> {
    Ok(VideoStatistics {
        view_count: statistics.u64("viewCount")?,
        like_count: statistics.u64("likeCount")?,
        dislike_count: statistics.u64("dislikeCount")?,
        favorite_count: statistics.u64("favoriteCount")?,
        comment_count: statistics.u64("commentCount")?,
    })
}

fn map_content_details(details: &Fields) -> Result<VideoContentDetails, MappingError> {
    let duration = details
        .parsed::<VideoDuration>("duration")?
        .ok_or_else(|| details.missing("duration"))?;

    Ok(VideoContentDetails {
        duration,
        dimension: details.string("dimension")?,
        definition: details.string("definition")?,
        caption: details.string("caption")?,
        licensed_content: details.bool("licensedContent")?,
        projection: details.string("projection")?,
    })
}

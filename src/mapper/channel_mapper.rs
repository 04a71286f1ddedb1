use serde_json::Value;
use std::collections::BTreeMap;

use crate::error::MappingError;
use crate::models::channel::{
    Channel, ChannelBrandingSettings, ChannelContentDetails, ChannelImage, ChannelStatistics,
};
use crate::models::thumbnail::Thumbnails;
use crate::utils::keyword_utils;

use super::fields::Fields;
use super::map_thumbnails;

/// Maps a `channels.list` item.
pub fn map_channel(item: &Value) -> Result<Channel, MappingError> {
    let item = Fields::new("item", item)?;

    let mut channel = Channel {
        id: String::new(),
        title: None,
        description: None,
        custom_url: None,
        published_at: None,
        country: None,
        thumbnails: Thumbnails::new(),
        statistics: None,
        content_details: None,
        branding_settings: None,
    };

    if let Some(snippet) = item.object("snippet")? {
        channel.title = Some(snippet.required_string("title")?);
        channel.description = snippet.string("description")?;
        channel.custom_url = snippet.string("customUrl")?;
        channel.published_at = Some(snippet.required_timestamp("publishedAt")?);
        channel.country = snippet.string("country")?;
        if let Some(thumbnails) = snippet.object("thumbnails")? {
            channel.thumbnails = map_thumbnails(&thumbnails)?;
        }
    }

    channel.id = map_channel_id(&item)?;

    if let Some(statistics) = item.object("statistics")? {
        channel.statistics = Some(ChannelStatistics {
            view_count: statistics.u64("viewCount")?,
            subscriber_count: statistics.u64("subscriberCount")?,
            video_count: statistics.u64("videoCount")?,
            hidden_subscriber_count: statistics.bool("hiddenSubscriberCount")?.unwrap_or(false),
        });
    }

    if let Some(details) = item.object("contentDetails")? {
        channel.content_details = Some(map_content_details(&details)?);
    }

    if let Some(branding) = item.object("brandingSettings")? {
        channel.branding_settings = Some(map_branding_settings(&branding)?);
    }

    Ok(channel)
}

/// Same two shapes as for videos: a bare string from `channels.list`, an
/// object carrying `channelId` from `search`.
fn map_channel_id(item: &Fields) -> Result<String, MappingError> {
    match item.get("id") {
        Some(Value::String(id)) => Ok(id.clone()),
        Some(id @ Value::Object(_)) => {
            Fields::new(item.field_path("id"), id)?.required_string("channelId")
        }
        Some(other) => Err(item.mismatch("id", "a string or an object", other)),
        None => Err(item.missing("id")),
    }
}

fn map_content_details(details: &Fields) -> Result<ChannelContentDetails, MappingError> {
    let mut related_playlists = BTreeMap::new();

    if let Some(playlists) = details.object("relatedPlaylists")? {
        for (name, _) in playlists.entries() {
            if let Some(id) = playlists.string(name)? {
                related_playlists.insert(name.clone(), id);
            }
        }
    }

    Ok(ChannelContentDetails { related_playlists })
}

fn map_branding_settings(branding: &Fields) -> Result<ChannelBrandingSettings, MappingError> {
    let mut settings = ChannelBrandingSettings::default();

    if let Some(channel) = branding.object("channel")? {
        settings.title = channel.string("title")?;
        settings.description = channel.string("description")?;
        settings.keywords = channel
            .str("keywords")?
            .map(keyword_utils::parse_keywords)
            .unwrap_or_default();
        settings.profile_color = channel.string("profileColor")?;
        settings.unsubscribed_trailer = channel.string("unsubscribedTrailer")?;
        settings.default_language = channel.string("defaultLanguage")?;
        settings.country = channel.string("country")?;
    }

    if let Some(image) = branding.object("image")? {
        for (field, value) in image.entries() {
            let url = map_image_url(&image, field, value)?;
            settings.images.insert(
                field.clone(),
                ChannelImage {
                    image_type: field.clone(),
                    url,
                },
            );
        }
    }

    Ok(settings)
}

/// Image fields are plain URLs, except for older localized ones shaped
/// `{ "default": url, "localized": [...] }`.
fn map_image_url(image: &Fields, field: &str, value: &Value) -> Result<String, MappingError> {
    match value {
        Value::String(url) => Ok(url.clone()),
        Value::Object(_) => Fields::new(image.field_path(field), value)?.required_string("default"),
        other => Err(image.mismatch(field, "a string or a localized object", other)),
    }
}

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::fmt;

use super::thumbnail::{Thumbnail, ThumbnailSize, Thumbnails};

const CHANNEL_URL: &str = "https://www.youtube.com/channel/";

#[derive(Debug, Clone, PartialEq)]
pub struct Channel {
    pub(crate) id: String,
    pub(crate) title: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) custom_url: Option<String>,
    pub(crate) published_at: Option<DateTime<Utc>>,
    pub(crate) country: Option<String>,
    pub(crate) thumbnails: Thumbnails,
    pub(crate) statistics: Option<ChannelStatistics>,
    pub(crate) content_details: Option<ChannelContentDetails>,
    pub(crate) branding_settings: Option<ChannelBrandingSettings>,
}

impl Channel {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn url(&self) -> String {
        format!("{}{}", CHANNEL_URL, self.id)
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn custom_url(&self) -> Option<&str> {
        self.custom_url.as_deref()
    }

    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        self.published_at
    }

    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
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

    pub fn statistics(&self) -> Option<&ChannelStatistics> {
        self.statistics.as_ref()
    }

    pub fn content_details(&self) -> Option<&ChannelContentDetails> {
        self.content_details.as_ref()
    }

    pub fn branding_settings(&self) -> Option<&ChannelBrandingSettings> {
        self.branding_settings.as_ref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelStatistics {
    pub(crate) view_count: Option<u64>,
    pub(crate) subscriber_count: Option<u64>,
    pub(crate) video_count: Option<u64>,
    pub(crate) hidden_subscriber_count: bool,
}

impl ChannelStatistics {
    pub fn view_count(&self) -> Option<u64> {
        self.view_count
    }

    /// Rounded by the API; `None` when the owner hides it.
    pub fn subscriber_count(&self) -> Option<u64> {
        self.subscriber_count
    }

    pub fn video_count(&self) -> Option<u64> {
        self.video_count
    }

    pub fn hidden_subscriber_count(&self) -> bool {
        self.hidden_subscriber_count
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelContentDetails {
    pub(crate) related_playlists: BTreeMap<String, String>,
}

impl ChannelContentDetails {
    pub fn related_playlists(&self) -> &BTreeMap<String, String> {
        &self.related_playlists
    }

    pub fn related_playlist(&self, name: &str) -> Option<&str> {
        self.related_playlists.get(name).map(String::as_str)
    }

    pub fn uploads(&self) -> Option<&str> {
        self.related_playlist("uploads")
    }

    pub fn likes(&self) -> Option<&str> {
        self.related_playlist("likes")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelBrandingSettings {
    pub(crate) title: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) keywords: Vec<String>,
    pub(crate) profile_color: Option<String>,
    pub(crate) unsubscribed_trailer: Option<String>,
    pub(crate) default_language: Option<String>,
    pub(crate) country: Option<String>,
    pub(crate) images: BTreeMap<String, ChannelImage>,
}

impl ChannelBrandingSettings {
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Hex color such as `#000000`.
    pub fn profile_color(&self) -> Option<&str> {
        self.profile_color.as_deref()
    }

    /// Video id of the trailer shown to non-subscribers.
    pub fn unsubscribed_trailer(&self) -> Option<&str> {
        self.unsubscribed_trailer.as_deref()
    }

    pub fn default_language(&self) -> Option<&str> {
        self.default_language.as_deref()
    }

    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    /// Branding images keyed by their type tag.
    pub fn images(&self) -> &BTreeMap<String, ChannelImage> {
        &self.images
    }

    pub fn image_by_type(&self, image_type: impl AsRef<str>) -> Option<&ChannelImage> {
        self.images.get(image_type.as_ref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelImage {
    pub(crate) image_type: String,
    pub(crate) url: String,
}

impl ChannelImage {
    /// Name of the `brandingSettings.image` field the image came from.
    pub fn image_type(&self) -> &str {
        &self.image_type
    }

    pub fn known_type(&self) -> Option<ChannelImageType> {
        ChannelImageType::from_field(&self.image_type)
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Image fields of `brandingSettings.image`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelImageType {
    BannerImageUrl,
    BannerMobileImageUrl,
    WatchIconImageUrl,
    TrackingImageUrl,
    BannerTabletLowImageUrl,
    BannerTabletImageUrl,
    BannerTabletHdImageUrl,
    BannerTabletExtraHdImageUrl,
    BannerMobileLowImageUrl,
    BannerMobileMediumHdImageUrl,
    BannerMobileHdImageUrl,
    BannerMobileExtraHdImageUrl,
    BannerTvImageUrl,
    BannerTvLowImageUrl,
    BannerTvMediumImageUrl,
    BannerTvHighImageUrl,
    BannerExternalUrl,
}

impl ChannelImageType {
    pub const ALL: [ChannelImageType; 17] = [
        ChannelImageType::BannerImageUrl,
        ChannelImageType::BannerMobileImageUrl,
        ChannelImageType::WatchIconImageUrl,
        ChannelImageType::TrackingImageUrl,
        ChannelImageType::BannerTabletLowImageUrl,
        ChannelImageType::BannerTabletImageUrl,
        ChannelImageType::BannerTabletHdImageUrl,
        ChannelImageType::BannerTabletExtraHdImageUrl,
        ChannelImageType::BannerMobileLowImageUrl,
        ChannelImageType::BannerMobileMediumHdImageUrl,
        ChannelImageType::BannerMobileHdImageUrl,
        ChannelImageType::BannerMobileExtraHdImageUrl,
        ChannelImageType::BannerTvImageUrl,
        ChannelImageType::BannerTvLowImageUrl,
        ChannelImageType::BannerTvMediumImageUrl,
        ChannelImageType::BannerTvHighImageUrl,
        ChannelImageType::BannerExternalUrl,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChannelImageType::BannerImageUrl => "bannerImageUrl",
            ChannelImageType::BannerMobileImageUrl => "bannerMobileImageUrl",
            ChannelImageType::WatchIconImageUrl => "watchIconImageUrl",
            ChannelImageType::TrackingImageUrl => "trackingImageUrl",
            ChannelImageType::BannerTabletLowImageUrl => "bannerTabletLowImageUrl",
            ChannelImageType::BannerTabletImageUrl => "bannerTabletImageUrl",
            ChannelImageType::BannerTabletHdImageUrl => "bannerTabletHdImageUrl",
            ChannelImageType::BannerTabletExtraHdImageUrl => "bannerTabletExtraHdImageUrl",
            ChannelImageType::BannerMobileLowImageUrl => "bannerMobileLowImageUrl",
            ChannelImageType::BannerMobileMediumHdImageUrl => "bannerMobileMediumHdImageUrl",
            ChannelImageType::BannerMobileHdImageUrl => "bannerMobileHdImageUrl",
            ChannelImageType::BannerMobileExtraHdImageUrl => "bannerMobileExtraHdImageUrl",
            ChannelImageType::BannerTvImageUrl => "bannerTvImageUrl",
            ChannelImageType::BannerTvLowImageUrl => "bannerTvLowImageUrl",
            ChannelImageType::BannerTvMediumImageUrl => "bannerTvMediumImageUrl",
            ChannelImageType::BannerTvHighImageUrl => "bannerTvHighImageUrl",
            ChannelImageType::BannerExternalUrl => "bannerExternalUrl",
        }
    }

    pub fn from_field(field: &str) -> Option<ChannelImageType> {
        ChannelImageType::ALL
            .into_iter()
            .find(|image_type| image_type.as_str() == field)
    }
}

impl AsRef<str> for ChannelImageType {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ChannelImageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Thumbnails of a video or channel, keyed by resolution label.
pub type Thumbnails = BTreeMap<String, Thumbnail>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    pub(crate) url: String,
    pub(crate) width: Option<u32>,
    pub(crate) height: Option<u32>,
}

impl Thumbnail {
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Not every payload reports the dimensions, only the url.
    pub fn width(&self) -> Option<u32> {
        self.width
    }

    pub fn height(&self) -> Option<u32> {
        self.height
    }
}

/// Resolution labels the API is known to use. Payloads may carry others,
/// which stay reachable by their raw label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThumbnailSize {
    Default,
    Medium,
    High,
    Standard,
    Maxres,
}

impl ThumbnailSize {
    pub const ALL: [ThumbnailSize; 5] = [
        ThumbnailSize::Default,
        ThumbnailSize::Medium,
        ThumbnailSize::High,
        ThumbnailSize::Standard,
        ThumbnailSize::Maxres,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ThumbnailSize::Default => "default",
            ThumbnailSize::Medium => "medium",
            ThumbnailSize::High => "high",
            ThumbnailSize::Standard => "standard",
            ThumbnailSize::Maxres => "maxres",
        }
    }
}

impl fmt::Display for ThumbnailSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThumbnailSize {
    type Err = String;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        ThumbnailSize::ALL
            .into_iter()
            .find(|size| size.as_str() == label)
            .ok_or_else(|| format!("unknown thumbnail size `{}`", label))
    }
}

#[cfg(test)]
mod tests {
    use super::ThumbnailSize;

    #[test]
    fn labels_round_trip_through_from_str() {
        for size in ThumbnailSize::ALL {
            assert_eq!(size.as_str().parse::<ThumbnailSize>(), Ok(size));
        }
    }

    #[test]
    fn unknown_label_is_rejected() {
        assert!("tiny".parse::<ThumbnailSize>().is_err());
    }
}

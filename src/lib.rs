//! Typed client for the YouTube Data v3 API.
//!
//! ```no_run
//! use youtube_data::YoutubeService;
//!
//! # async fn example() -> Result<(), youtube_data::YoutubeError> {
//! let youtube = YoutubeService::new("api key");
//!
//! let page = youtube.search("surfing", 5, &[]).await?;
//! for video in page.videos()? {
//!     println!("{} {}", video.video_id(), video.title().unwrap_or_default());
//! }
//!
//! let next = youtube.more_search_results().await?;
//! let video = youtube.get_video_by_id("Ks-_Mh1QhMc", &[]).await?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod mapper;
pub mod models;
pub mod responses;
pub mod services;
pub mod utils;

pub use error::{MappingError, YoutubeError};
pub use models::channel::{
    Channel, ChannelBrandingSettings, ChannelContentDetails, ChannelImage, ChannelImageType,
    ChannelStatistics,
};
pub use models::config::ServiceConfig;
pub use models::thumbnail::{Thumbnail, ThumbnailSize, Thumbnails};
pub use models::video::{Video, VideoContentDetails, VideoDuration, VideoStatistics};
pub use responses::{ChannelListResponse, SearchResponse, VideoListResponse};
pub use services::transport::{ReqwestTransport, Transport, TransportResponse};
pub use services::youtube_service::YoutubeService;

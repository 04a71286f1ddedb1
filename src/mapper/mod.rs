//! Turns decoded API payloads into models.
//!
//! Every sub-object of an item (`snippet`, `id`, `statistics`, ...) is only
//! read when it is present; an absent sub-object leaves the matching model
//! field unset. A present sub-object that lacks a required field, or any
//! value of the wrong JSON type, fails the whole item with a
//! [`MappingError`]. Unknown fields are ignored.

mod channel_mapper;
mod fields;
mod video_mapper;

pub use channel_mapper::map_channel;
pub use video_mapper::{map_video, map_videos};

pub(crate) use fields::kind_of;

use crate::error::MappingError;
use crate::models::thumbnail::{Thumbnail, Thumbnails};

use fields::Fields;

/// Every label under `thumbnails` becomes one entry; the label set is open.
/// Only `url` is required.
fn map_thumbnails(thumbnails: &Fields) -> Result<Thumbnails, MappingError> {
    thumbnails
        .entries()
        .map(|(label, value)| {
            let thumbnail = Fields::new(thumbnails.field_path(label), value)?;
            Ok((
                label.clone(),
                Thumbnail {
                    url: thumbnail.required_string("url")?,
                    width: thumbnail.u32("width")?,
                    height: thumbnail.u32("height")?,
                },
            ))
        })
        .collect()
}

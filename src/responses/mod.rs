mod channel_list_response;
mod search_response;
mod video_list_response;

pub use channel_list_response::ChannelListResponse;
pub use search_response::SearchResponse;
pub use video_list_response::VideoListResponse;

use serde_json::Value;

use crate::error::{MappingError, YoutubeError};
use crate::mapper;

/// The `items` array of a list payload. A payload without `items` has none.
fn items(contents: &Value) -> Result<&[Value], MappingError> {
    match contents.get("items") {
        None | Some(Value::Null) => Ok(&[]),
        Some(Value::Array(items)) => Ok(items.as_slice()),
        Some(other) => Err(MappingError::TypeMismatch {
            field: "items".to_string(),
            expected: "an array",
            found: mapper::kind_of(other),
        }),
    }
}

fn first_item<'a>(contents: &'a Value, resource: &str) -> Result<&'a Value, YoutubeError> {
    items(contents)?
        .first()
        .ok_or_else(|| YoutubeError::NotFound(format!("no {} in response", resource)))
}

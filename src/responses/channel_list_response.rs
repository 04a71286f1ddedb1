use serde_json::Value;
use std::sync::OnceLock;

use crate::error::YoutubeError;
use crate::mapper;
use crate::models::channel::Channel;

use super::first_item;

/// Payload of `channels.list`, mapped on first access.
#[derive(Debug)]
pub struct ChannelListResponse {
    contents: Value,
    channel: OnceLock<Channel>,
}

impl ChannelListResponse {
    pub fn new(contents: Value) -> ChannelListResponse {
        ChannelListResponse {
            contents,
            channel: OnceLock::new(),
        }
    }

    pub fn channel(&self) -> Result<&Channel, YoutubeError> {
        if let Some(channel) = self.channel.get() {
            return Ok(channel);
        }

        let channel = mapper::map_channel(first_item(&self.contents, "channel")?)?;
        Ok(self.channel.get_or_init(|| channel))
    }

    /// Takes the channel out of the response, mapping it if that has not
    /// happened yet.
    pub fn into_channel(self) -> Result<Channel, YoutubeError> {
        match self.channel.into_inner() {
            Some(channel) => Ok(channel),
            None => Ok(mapper::map_channel(first_item(&self.contents, "channel")?)?),
        }
    }

    pub fn contents(&self) -> &Value {
        &self.contents
    }

    pub fn into_contents(self) -> Value {
        self.contents
    }
}

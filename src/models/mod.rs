pub mod channel;
pub mod config;
pub mod thumbnail;
pub mod video;

pub mod transport;
pub mod youtube_service;

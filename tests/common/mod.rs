use async_trait::async_trait;
use log::LevelFilter;
use reqwest::Url;
use simple_logger::SimpleLogger;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use youtube_data::{ServiceConfig, Transport, TransportResponse, YoutubeError, YoutubeService};

pub const API_KEY: &str = "some_key";

pub fn fixture(name: &str) -> String {
    let path = format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("cannot read {}: {}", path, e))
}

pub fn init_logger() {
    // several tests share the process, only the first one installs it
    let _ = SimpleLogger::new().with_level(LevelFilter::Debug).init();
}

/// Replays queued responses and records every requested URL.
#[derive(Clone, Default)]
pub struct MockTransport {
    responses: Arc<Mutex<VecDeque<TransportResponse>>>,
    requests: Arc<Mutex<Vec<Url>>>,
}

impl MockTransport {
    pub fn add_response(&self, status: u16, body: impl Into<Vec<u8>>) {
        self.responses
            .lock()
            .unwrap()
            .push_back(TransportResponse::new(status, body));
    }

    pub fn add_fixture(&self, name: &str) {
        self.add_response(200, fixture(name));
    }

    pub fn requests(&self) -> Vec<Url> {
        self.requests.lock().unwrap().clone()
    }

    /// Query of the most recent request, as a map.
    pub fn last_query(&self) -> HashMap<String, String> {
        let requests = self.requests.lock().unwrap();
        let url = requests.last().expect("no request was sent");
        url.query_pairs().into_owned().collect()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get(&self, url: Url) -> Result<TransportResponse, YoutubeError> {
        self.requests.lock().unwrap().push(url);
        let response = self.responses.lock().unwrap().pop_front();
        Ok(response.expect("no response queued"))
    }
}

pub fn service(transport: &MockTransport) -> YoutubeService {
    init_logger();
    YoutubeService::with_transport(ServiceConfig::new(API_KEY), transport.clone())
}

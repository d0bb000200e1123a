// src/live/transport.rs
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::ACCEPT;

use super::FetchError;
use crate::config::consts::USER_AGENT;

/// One GET, body as text. Implementations must be shareable across the
/// two fetch threads of a comparison.
pub trait Transport: Send + Sync {
    fn get(&self, url: &str) -> Result<String, FetchError>;
}

pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<String, FetchError> {
        logd!("HTTP: GET {url}");
        let resp = self
            .client
            .get(url)
            .header(ACCEPT, "application/json, text/html")
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status { status: status.as_u16(), url: s!(url) });
        }
        Ok(resp.text()?)
    }
}

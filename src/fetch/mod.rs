// src/fetch/mod.rs

use reqwest::blocking::Client;
use std::time::Duration;
use tracing::{debug, instrument};
use url::Url;

use crate::config::Config;
use crate::error::FetchError;

/// Raw HTTP outcome. The pipeline only checks whether `status` is a success.
#[derive(Debug, Clone)]
pub struct FetchResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl FetchResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Anything that can GET a URL. Implemented over HTTP here and by fakes in tests.
pub trait Fetcher {
    fn fetch(&self, url: &Url) -> Result<FetchResponse, FetchError>;
}

impl<F: Fetcher + ?Sized> Fetcher for &F {
    fn fetch(&self, url: &Url) -> Result<FetchResponse, FetchError> {
        (**self).fetch(url)
    }
}

/// Blocking reqwest client carrying the configured user agent and timeout.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(cfg: &Config) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(cfg.user_agent.clone())
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .gzip(true)
            .build()?;
        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    #[instrument(level = "debug", skip(self), fields(url = %url))]
    fn fetch(&self, url: &Url) -> Result<FetchResponse, FetchError> {
        let resp = self.client.get(url.clone()).send()?;
        let status = resp.status().as_u16();
        let body = resp.bytes()?.to_vec();
        debug!(status, bytes = body.len(), "fetched");
        Ok(FetchResponse { status, body })
    }
}

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::{
    error::ShortenError,
    types::{ShortenRequest, ShortenResponse},
};

#[async_trait]
pub trait Shortener: Send + Sync {
    async fn shorten(&self, request: &ShortenRequest) -> Result<ShortenResponse, ShortenError>;
}

#[derive(Debug, Clone)]
pub struct HttpShortener {
    client: Client,
    endpoint: Url,
}

impl HttpShortener {
    pub fn new(endpoint: Url) -> Self {
        Self::with_client(Client::new(), endpoint)
    }

    pub fn with_client(client: Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl Shortener for HttpShortener {
    #[instrument(skip(self, request), fields(endpoint = %self.endpoint))]
    async fn shorten(&self, request: &ShortenRequest) -> Result<ShortenResponse, ShortenError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await?;

        // the body decides the outcome, whatever the status says
        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, "Shortening service returned non-success status");
        }

        let body = response.bytes().await?;
        debug!(status = %status, bytes = body.len(), "Received shortening response");

        Ok(ShortenResponse::from_body(&body)?)
    }
}

use super::{BareHttpClient, BareRequest, BareResponse, HttpClientError};
use async_trait::async_trait;
use log::trace;
use reqwest::{Client, ClientBuilder};

/// An HTTP session based on [`reqwest`].
///
/// Connection pooling, TLS, and redirect handling are left to reqwest's
/// defaults.
#[derive(Debug, Default)]
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    /// Creates an HTTP session.
    pub fn new() -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: ClientBuilder::new().build()?,
        })
    }
}

#[async_trait]
impl BareHttpClient for ReqwestHttpClient {
    async fn get(&self, request: &BareRequest) -> Result<BareResponse, HttpClientError> {
        trace!("sending a request to {}", &request.url);

        let response = self
            .client
            .get(request.url.clone())
            .headers(request.headers.clone())
            .send()
            .await?;

        trace!("got {} response from {}", response.status(), &request.url);

        Ok(BareResponse {
            url: response.url().clone(),
            status: response.status(),
            headers: response.headers().clone(),
            body: response.bytes().await?.to_vec(),
        })
    }
}

impl From<reqwest::Error> for HttpClientError {
    fn from(error: reqwest::Error) -> Self {
        Self::Http(error.to_string().into())
    }
}

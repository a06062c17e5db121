use super::HttpClientError;
use async_trait::async_trait;
use http::{HeaderMap, StatusCode};
use url::Url;

/// An HTTP session that can execute a single GET request.
///
/// This is the injection point for transports. Production code uses
/// [`ReqwestHttpClient`](super::ReqwestHttpClient); tests swap in a
/// [`MockHttpClient`](crate::MockHttpClient) built from registered rules.
#[async_trait]
pub trait BareHttpClient: Send + Sync {
    /// Executes a GET request and resolves once the transport completes.
    async fn get(&self, request: &BareRequest) -> Result<BareResponse, HttpClientError>;
}

/// A GET request described as plain data.
#[derive(Clone, Debug)]
pub struct BareRequest {
    pub url: Url,
    pub headers: HeaderMap,
}

impl BareRequest {
    pub const fn new(url: Url, headers: HeaderMap) -> Self {
        Self { url, headers }
    }
}

/// A raw transport response before any JSON interpretation.
#[derive(Clone, Debug, PartialEq)]
pub struct BareResponse {
    pub url: Url,
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

use crate::http_client::{BareHttpClient, BareRequest, BareResponse, HttpClientError};
use async_trait::async_trait;
use http::StatusCode;
use scc::{HashMap, hash_map::Entry};
use url::Url;

/// A canned GET response registered against a URL.
///
/// Rules default to status 200 with no payload. A rule carrying a synthetic
/// error surfaces that error through the transport while keeping the payload
/// inspectable via [`payload`](Self::payload).
#[derive(Clone, Debug)]
pub struct MockRule {
    url: Url,
    ignore_query: bool,
    status: StatusCode,
    payload: Option<Vec<u8>>,
    error: Option<String>,
}

impl MockRule {
    /// Creates a rule matching the given URL.
    pub const fn new(url: Url) -> Self {
        Self {
            url,
            ignore_query: false,
            status: StatusCode::OK,
            payload: None,
            error: None,
        }
    }

    /// Sets the status code of the canned response.
    pub const fn set_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    /// Sets the payload bytes of the canned response.
    pub fn set_payload(mut self, payload: Vec<u8>) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Attaches a synthetic error surfaced to the caller instead of the
    /// canned response.
    pub fn set_error(mut self, message: impl Into<String>) -> Self {
        self.error = Some(message.into());
        self
    }

    /// Makes the rule match any query string on its URL.
    pub const fn set_ignore_query(mut self, ignore_query: bool) -> Self {
        self.ignore_query = ignore_query;
        self
    }

    /// Returns the canned payload, if any.
    pub fn payload(&self) -> Option<&[u8]> {
        self.payload.as_deref()
    }

    /// Returns the canned status code.
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Returns the URL the rule is keyed by, with the query stripped when
    /// the rule ignores it.
    fn canonical_url(&self) -> Url {
        let mut url = self.url.clone();

        if self.ignore_query {
            url.set_query(None);
        }

        url
    }

    fn respond(&self, url: &Url) -> Result<BareResponse, HttpClientError> {
        if let Some(message) = &self.error {
            return Err(HttpClientError::Mock {
                status: Some(self.status.as_u16()),
                message: message.as_str().into(),
            });
        }

        Ok(BareResponse {
            url: url.clone(),
            status: self.status,
            headers: Default::default(),
            body: self.payload.clone().unwrap_or_default(),
        })
    }
}

/// A set of mock rules from which a deterministic session is built.
///
/// Registration state is explicit and session-scoped; nothing is installed
/// globally.
#[derive(Debug, Default)]
pub struct MockRegistry {
    rules: HashMap<String, MockRule>,
}

impl MockRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a rule under its canonicalized URL.
    ///
    /// Re-registering the same URL replaces the prior rule.
    pub fn register(&self, rule: MockRule) {
        let key = rule.canonical_url().to_string();

        match self.rules.entry_sync(key) {
            Entry::Occupied(mut entry) => {
                *entry.get_mut() = rule;
            }
            Entry::Vacant(entry) => {
                entry.insert_entry(rule);
            }
        }
    }

    /// Consumes the registry into a session satisfying the registered rules
    /// instead of performing network I/O.
    pub fn build_session(self) -> MockHttpClient {
        MockHttpClient { rules: self.rules }
    }
}

/// An HTTP session whose transport is intercepted by mock rules.
///
/// Requests with no matching rule fail with
/// [`HttpClientError::UnhandledRequest`].
#[derive(Debug)]
pub struct MockHttpClient {
    rules: HashMap<String, MockRule>,
}

#[async_trait]
impl BareHttpClient for MockHttpClient {
    async fn get(&self, request: &BareRequest) -> Result<BareResponse, HttpClientError> {
        if let Some(entry) = self.rules.get_async(request.url.as_str()).await {
            return entry.get().respond(&request.url);
        }

        let mut stripped = request.url.clone();
        stripped.set_query(None);

        if let Some(entry) = self.rules.get_async(stripped.as_str()).await
            && entry.get().ignore_query
        {
            return entry.get().respond(&request.url);
        }

        Err(HttpClientError::UnhandledRequest(
            request.url.to_string().into(),
        ))
    }
}

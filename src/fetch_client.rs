use crate::{
    dispatch::{FailureHandler, Fetcher, SuccessHandler, dispatch},
    http_client::{BareHttpClient, BareRequest},
    outcome::FetchOutcome,
};
use alloc::sync::Arc;
use http::HeaderMap;
use log::debug;
use serde_json::Value;
use std::collections::BTreeMap;
use tokio::task::JoinHandle;
use url::Url;

/// A client that issues a single configured GET request and reports the
/// outcome through callbacks.
///
/// Configure the client with [`set_query_parameters`](Self::set_query_parameters)
/// and [`set_headers`](Self::set_headers), register [`on_success`](Self::on_success)
/// and [`on_failure`](Self::on_failure) callbacks, then call
/// [`fetch`](Self::fetch). Exactly one callback fires per call; an outcome
/// whose callback slot is unset is dropped.
pub struct FetchClient {
    session: Arc<dyn BareHttpClient>,
    base_url: Url,
    query_parameters: BTreeMap<String, String>,
    headers: HeaderMap,
    on_success: Option<SuccessHandler>,
    on_failure: Option<FailureHandler>,
}

impl FetchClient {
    /// Creates a client for the given session and endpoint.
    ///
    /// The base URL is parsed up front, so a malformed endpoint is rejected
    /// here rather than discovered when a request is dispatched.
    pub fn new(session: impl BareHttpClient + 'static, base_url: Url) -> Self {
        Self {
            session: Arc::new(session),
            base_url,
            query_parameters: Default::default(),
            headers: Default::default(),
            on_success: None,
            on_failure: None,
        }
    }

    /// Replaces the query parameters appended to the request URL.
    ///
    /// The previous mapping is discarded wholesale. An empty mapping
    /// contributes no query string at all.
    pub fn set_query_parameters(&mut self, parameters: BTreeMap<String, String>) {
        self.query_parameters = parameters;
    }

    /// Replaces the headers sent with the request.
    pub fn set_headers(&mut self, headers: HeaderMap) {
        self.headers = headers;
    }

    /// Registers the callback invoked with the parsed JSON body of a
    /// successful response. Malformed JSON arrives as `None`.
    pub fn on_success(&mut self, callback: impl Fn(Option<Value>) + Send + Sync + 'static) {
        self.on_success = Some(Arc::new(callback));
    }

    /// Registers the callback invoked with the status code and message of a
    /// failed request. The status code is absent for failures that happen
    /// before any response arrives.
    pub fn on_failure(
        &mut self,
        callback: impl Fn(Option<u16>, Option<String>) + Send + Sync + 'static,
    ) {
        self.on_failure = Some(Arc::new(callback));
    }

    /// Dispatches the GET request and returns immediately.
    ///
    /// The request runs on the ambient tokio runtime and the outcome is
    /// delivered to the registered callbacks from the spawned task. The
    /// returned handle resolves once the callback has run; callers that do
    /// not care may drop it.
    ///
    /// # Panics
    ///
    /// Panics if called from outside a tokio runtime context.
    pub fn fetch(&self) -> JoinHandle<()> {
        let request = self.build_request();
        let session = self.session.clone();
        let on_success = self.on_success.clone();
        let on_failure = self.on_failure.clone();

        debug!("dispatching GET request to {}", request.url);

        tokio::spawn(async move {
            let result = session.get(&request).await;

            dispatch(
                FetchOutcome::from_result(result),
                on_success.as_ref(),
                on_failure.as_ref(),
            );
        })
    }

    /// Serializes the base URL and query parameters into one request.
    ///
    /// Query pairs are appended in key order and percent-encoded by the
    /// `url` crate.
    fn build_request(&self) -> BareRequest {
        let mut url = self.base_url.clone();

        if !self.query_parameters.is_empty() {
            url.query_pairs_mut().extend_pairs(&self.query_parameters);
        }

        BareRequest::new(url, self.headers.clone())
    }
}

impl Fetcher for FetchClient {
    fn fetch(&self) -> JoinHandle<()> {
        Self::fetch(self)
    }
}

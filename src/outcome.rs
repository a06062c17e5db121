use crate::http_client::{BareResponse, HttpClientError};
use serde_json::Value;

/// The result of one fetch.
///
/// Exactly one outcome is produced per [`fetch`](crate::FetchClient::fetch)
/// call. A 2xx response is a success even when its body is not valid JSON;
/// the parsed value is `None` in that case.
#[derive(Clone, Debug, PartialEq)]
pub enum FetchOutcome {
    /// The transport succeeded with a 2xx status.
    Success(Option<Value>),
    /// The transport failed, or the status was not 2xx. The status code is
    /// absent for failures that happen before any response arrives.
    Failure {
        status: Option<u16>,
        message: Option<String>,
    },
}

impl FetchOutcome {
    /// Translates a raw transport result into an outcome.
    pub fn from_result(result: Result<BareResponse, HttpClientError>) -> Self {
        match result {
            Ok(response) if response.status.is_success() => {
                Self::Success(serde_json::from_slice(&response.body).ok())
            }
            Ok(response) => Self::Failure {
                status: Some(response.status.as_u16()),
                message: response.status.canonical_reason().map(Into::into),
            },
            Err(HttpClientError::Mock { status, message }) => Self::Failure {
                status,
                message: Some(message.to_string()),
            },
            Err(error) => Self::Failure {
                status: None,
                message: Some(error.to_string()),
            },
        }
    }
}

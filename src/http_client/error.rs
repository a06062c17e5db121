use alloc::sync::Arc;
use core::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// An error raised by a [`BareHttpClient`](super::BareHttpClient)
/// implementation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum HttpClientError {
    /// The underlying transport failed before or during the request.
    Http(Arc<str>),
    /// A mock rule injected a synthetic failure, optionally carrying the
    /// HTTP status it was registered with.
    Mock {
        status: Option<u16>,
        message: Arc<str>,
    },
    /// A request reached a mock session with no matching rule.
    UnhandledRequest(Arc<str>),
}

impl Error for HttpClientError {}

impl Display for HttpClientError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(error) => write!(formatter, "{error}"),
            Self::Mock { message, .. } => write!(formatter, "{message}"),
            Self::UnhandledRequest(url) => write!(formatter, "unhandled request: {url}"),
        }
    }
}

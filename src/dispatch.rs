use crate::outcome::FetchOutcome;
use alloc::sync::Arc;
use log::trace;
use serde_json::Value;
use tokio::task::JoinHandle;

/// A callback invoked with the parsed JSON body of a successful response.
pub type SuccessHandler = Arc<dyn Fn(Option<Value>) + Send + Sync>;

/// A callback invoked with the status code and message of a failed request.
pub type FailureHandler = Arc<dyn Fn(Option<u16>, Option<String>) + Send + Sync>;

/// A client that can issue one configured GET request.
pub trait Fetcher {
    /// Dispatches the request and returns immediately. The outcome is
    /// delivered to the registered callbacks once the transport completes.
    ///
    /// Implementations backed by [`tokio::spawn`] panic when called from
    /// outside a runtime context.
    fn fetch(&self) -> JoinHandle<()>;
}

/// Routes an outcome to the matching callback.
///
/// At most one callback is invoked. An outcome whose callback slot is unset
/// is dropped silently.
pub fn dispatch(
    outcome: FetchOutcome,
    on_success: Option<&SuccessHandler>,
    on_failure: Option<&FailureHandler>,
) {
    match outcome {
        FetchOutcome::Success(value) => {
            if let Some(on_success) = on_success {
                on_success(value);
            } else {
                trace!("dropping successful outcome with no callback");
            }
        }
        FetchOutcome::Failure { status, message } => {
            if let Some(on_failure) = on_failure {
                on_failure(status, message);
            } else {
                trace!("dropping failed outcome with no callback");
            }
        }
    }
}

//! Logging and request-level observability.

use thiserror::Error;
use tracing_subscriber::util::TryInitError;

pub(crate) mod logging;
pub(crate) mod request;

/// Failure while wiring up observability at startup.
#[derive(Debug, Error)]
pub(crate) enum ObservabilityError {
    #[error("failed to initialize logging subscriber: {0}")]
    Subscriber(#[from] TryInitError),
}

//! Storefront API Root Banner Handler

use salvo::prelude::*;

/// Root banner handler
///
/// Serves a plain-text banner confirming the API is up. Doubles as the
/// liveness probe target since it touches no collection.
#[handler]
pub(crate) async fn handler() -> &'static str {
    "Storefront API is running"
}

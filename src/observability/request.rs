//! Request logging middleware: request IDs, per-request spans, slow-request warnings.

use std::{sync::OnceLock, time::Instant};

use mongodb::bson::oid::ObjectId;
use salvo::{
    Request, handler,
    http::{StatusCode, header::HeaderValue},
    prelude::{Depot, FlowCtrl, Response},
};
use tracing::{Instrument as _, error, info, warn};
use uuid::Uuid;

use crate::config::ServerConfig;

pub(crate) const REQUEST_ID_HEADER: &str = "x-request-id";

const DEFAULT_SLOW_REQUEST_THRESHOLD_MS: u64 = 1_000;

static SLOW_REQUEST_THRESHOLD_MS: OnceLock<u64> = OnceLock::new();

/// Record runtime observability settings before the server starts.
pub(crate) fn apply_runtime_config(config: &ServerConfig) {
    _ = SLOW_REQUEST_THRESHOLD_MS.set(config.logging.slow_request_threshold_ms);
}

fn slow_request_threshold_ms() -> u64 {
    SLOW_REQUEST_THRESHOLD_MS
        .get()
        .copied()
        .unwrap_or(DEFAULT_SLOW_REQUEST_THRESHOLD_MS)
}

#[handler]
pub(crate) async fn request_logging(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    let started = Instant::now();

    let request_id = resolve_request_id(req.header::<String>(REQUEST_ID_HEADER));

    set_request_id_header(res, &request_id);

    let method = req.method().to_string();
    let path = req.uri().path().to_owned();
    let route = normalise_route(&path);

    let span = tracing::info_span!(
        "http.request",
        request_id = %request_id,
        method = %method,
        route = %route,
        status = tracing::field::Empty,
        duration_ms = tracing::field::Empty
    );

    ctrl.call_next(req, depot, res)
        .instrument(span.clone())
        .await;

    let duration_ms = started.elapsed().as_millis();
    let status = res.status_code.unwrap_or(StatusCode::OK);
    let threshold_ms = u128::from(slow_request_threshold_ms());

    span.record("status", status.as_u16());
    span.record("duration_ms", duration_ms);

    span.in_scope(|| {
        info!(status = status.as_u16(), duration_ms, "request.completed");

        if status.is_server_error() {
            error!(
                status = status.as_u16(),
                method = %method,
                path = %path,
                request_id = %request_id,
                "server error response"
            );
        } else if status.is_client_error() {
            warn!(
                status = status.as_u16(),
                method = %method,
                path = %path,
                request_id = %request_id,
                "client error response"
            );
        }

        if duration_ms > threshold_ms {
            warn!(
                method = %method,
                path = %path,
                request_id = %request_id,
                duration_ms,
                threshold_ms,
                "slow request detected"
            );
        }
    });
}

fn resolve_request_id(header_value: Option<String>) -> String {
    header_value
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| Uuid::now_v7().to_string())
}

fn set_request_id_header(res: &mut Response, request_id: &str) {
    let header_value = match HeaderValue::from_str(request_id) {
        Ok(value) => value,
        Err(source) => {
            warn!(
                request_id,
                "could not encode request id for response header: {source}"
            );

            return;
        }
    };

    res.headers_mut().insert(REQUEST_ID_HEADER, header_value);
}

/// Collapse document ids so all requests for one route share a span name.
fn normalise_route(path: &str) -> String {
    if path == "/" {
        return "/".to_owned();
    }

    let mut normalised = String::new();

    for segment in path.trim_start_matches('/').split('/') {
        normalised.push('/');

        if ObjectId::parse_str(segment).is_ok() {
            normalised.push_str("{id}");
        } else {
            normalised.push_str(segment);
        }
    }

    normalised
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incoming_request_id_is_kept() {
        let request_id = resolve_request_id(Some("abc-123".to_owned()));

        assert_eq!(request_id, "abc-123");
    }

    #[test]
    fn test_blank_request_id_is_replaced() {
        let request_id = resolve_request_id(Some("   ".to_owned()));

        assert!(!request_id.trim().is_empty());
    }

    #[test]
    fn test_missing_request_id_is_generated() {
        let request_id = resolve_request_id(None);

        assert!(Uuid::parse_str(&request_id).is_ok());
    }

    #[test]
    fn test_document_ids_are_collapsed_in_route() {
        let route = normalise_route("/api/products/65f0a1b2c3d4e5f6a7b8c9d0");

        assert_eq!(route, "/api/products/{id}");
    }

    #[test]
    fn test_plain_segments_are_untouched() {
        let route = normalise_route("/api/categories/products/laptops");

        assert_eq!(route, "/api/categories/products/laptops");
    }

    #[test]
    fn test_root_route_is_preserved() {
        assert_eq!(normalise_route("/"), "/");
    }
}

//! Middleware stack for the API server
//!
//! Request ids, one tracing span per request, a request deadline, and CORS
//! that exposes the pagination headers.

use std::time::Duration;

use axum::{
    body::Body,
    http::{header, HeaderName, HeaderValue, Method, Request, Response, StatusCode},
    Router,
};
use logins_common::CorsConfig;
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{info, info_span, warn, Span};

use crate::response::{PAGINATION_COUNT_HEADER, PAGINATION_LIMIT_HEADER, PAGINATION_PAGE_HEADER};
use crate::state::AppState;

/// Header name for request ID
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Deadline for a whole request; dropping the handler cancels its query
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Wrap the router with the request id, tracing, timeout and CORS layers
pub fn apply_middleware(
    router: Router<AppState>,
    cors_config: &CorsConfig,
    is_production: bool,
) -> Router<AppState> {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    router.layer(
        ServiceBuilder::new()
            .layer(SetRequestIdLayer::new(request_id.clone(), MakeRequestUuid))
            .layer(PropagateRequestIdLayer::new(request_id))
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(request_span)
                    .on_request(|_: &Request<Body>, _: &Span| {})
                    .on_response(log_response),
            )
            .layer(TimeoutLayer::with_status_code(
                StatusCode::SERVICE_UNAVAILABLE,
                REQUEST_TIMEOUT,
            ))
            .layer(create_cors_layer(cors_config, is_production)),
    )
}

fn request_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown");

    info_span!(
        "http_request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = %request_id,
    )
}

fn log_response(response: &Response<Body>, latency: Duration, _span: &Span) {
    let status = response.status().as_u16();
    let latency_ms = latency.as_millis();

    if response.status().is_server_error() {
        warn!(status, latency_ms, "request failed");
    } else {
        info!(status, latency_ms, "request finished");
    }
}

fn create_cors_layer(config: &CorsConfig, is_production: bool) -> CorsLayer {
    CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::ACCEPT,
            HeaderName::from_static(REQUEST_ID_HEADER),
            HeaderName::from_static(PAGINATION_PAGE_HEADER),
            HeaderName::from_static(PAGINATION_LIMIT_HEADER),
        ])
        .expose_headers([
            HeaderName::from_static(REQUEST_ID_HEADER),
            HeaderName::from_static(PAGINATION_COUNT_HEADER),
            HeaderName::from_static(PAGINATION_PAGE_HEADER),
            HeaderName::from_static(PAGINATION_LIMIT_HEADER),
        ])
        .allow_origin(allowed_origins(config, is_production))
}

/// Configured origins when any are set. Otherwise any origin in
/// development and none in production.
fn allowed_origins(config: &CorsConfig, is_production: bool) -> AllowOrigin {
    if config.allowed_origins.is_empty() {
        if is_production {
            warn!("CORS: no allowed origins configured; browser requests will be blocked");
            return AllowOrigin::list(Vec::<HeaderValue>::new());
        }
        warn!("CORS: allowing any origin. Set CORS_ALLOWED_ORIGINS to restrict it");
        return Any.into();
    }

    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "CORS: ignoring invalid origin");
                None
            }
        })
        .collect();

    info!(count = origins.len(), "CORS: allowing configured origins");
    AllowOrigin::list(origins)
}

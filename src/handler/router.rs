//! Request routing dispatch module
//!
//! Entry point for HTTP request processing. Routes are evaluated in order:
//! the contact endpoint, health probes, then static assets with the index
//! fallback as the terminal rule.

use crate::config::AppState;
use crate::contact;
use crate::handler::static_files::{self, RequestContext};
use crate::http;
use crate::logger;
use http_body_util::{BodyExt, Full};
use hyper::body::{Body, Bytes};
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = dispatch(req, &state).await;

    if state.config.logging.access_log {
        logger::log_access(
            method.as_str(),
            &path,
            response.status().as_u16(),
            response_body_bytes(&response),
        );
    }

    Ok(response)
}

/// Body length for the access log. `Full` bodies always have an exact size.
fn response_body_bytes(response: &Response<Full<Bytes>>) -> u64 {
    response.body().size_hint().exact().unwrap_or(0)
}

async fn dispatch(
    req: Request<hyper::body::Incoming>,
    state: &Arc<AppState>,
) -> Response<Full<Bytes>> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    // 1. Contact endpoint
    if method == Method::POST && path == "/api/contact" {
        if let Some(resp) = check_body_size(&req, state.config.http.max_body_size) {
            return resp;
        }

        let body = match req.collect().await {
            Ok(collected) => collected.to_bytes(),
            Err(e) => {
                logger::log_warning(&format!("Failed to read request body: {e}"));
                return http::build_json_response(
                    hyper::StatusCode::BAD_REQUEST,
                    &serde_json::json!({ "ok": false, "error": contact::handler::VALIDATION_ERROR }),
                );
            }
        };

        return contact::handle_contact(body, state).await;
    }

    // 2. Health probes
    if state.config.http.health_probes
        && method == Method::GET
        && (path == "/healthz" || path == "/readyz")
    {
        return http::build_health_response("ok");
    }

    // 3. Static assets, with the index fallback as the terminal rule.
    // Any method lands here so client-side routes resolve regardless.
    let ctx = RequestContext {
        path: &path,
        is_head: method == Method::HEAD,
        if_none_match: req
            .headers()
            .get("if-none-match")
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string),
    };

    static_files::serve(&ctx, &state.config.assets).await
}

/// Validate the Content-Length header and return 413 if exceeded
fn check_body_size(
    req: &Request<hyper::body::Incoming>,
    max_body_size: u64,
) -> Option<Response<Full<Bytes>>> {
    let content_length = req.headers().get("content-length")?;
    content_length.to_str().map_or_else(
        |_| {
            logger::log_warning("Content-Length header contains non-ASCII characters");
            None
        },
        |size_str| match size_str.parse::<u64>() {
            Ok(size) if size > max_body_size => {
                logger::log_error(&format!(
                    "Request body too large: {size} bytes (max: {max_body_size})"
                ));
                Some(http::build_413_response())
            }
            Err(_) => {
                logger::log_warning(&format!(
                    "Invalid Content-Length value: '{size_str}', skipping size check"
                ));
                None
            }
            _ => None,
        },
    )
}

use axum::{
    body::Body,
    extract::{ConnectInfo, State},
    http::{header, HeaderMap, HeaderValue, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

use crate::utils::rate_limiter::RateDecision;
use crate::AppState;

pub const RATE_LIMIT_MESSAGE: &str =
    "Too many requests received from your end, please do-not bother...";

// Longest textual IPv6 address, including an embedded IPv4 tail.
const MAX_FORWARDED_HOP_LEN: usize = 45;

pub async fn limit_contact_requests(
    State(state): State<Arc<AppState>>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, RateLimitError> {
    let client = client_key(
        request.headers(),
        request.extensions().get::<ConnectInfo<SocketAddr>>(),
        state.config.trust_forwarded_for,
    );

    match state.rate_limiter.check(&client) {
        RateDecision::Allowed => Ok(next.run(request).await),
        RateDecision::Limited { retry_after } => {
            warn!(client = %client, ?retry_after, "Contact request rate limited");
            Err(RateLimitError { retry_after })
        }
    }
}

/// Peer address of the connection. The first `X-Forwarded-For` hop is used
/// instead only when the relay sits behind a trusted proxy.
pub fn client_key(
    headers: &HeaderMap,
    peer: Option<&ConnectInfo<SocketAddr>>,
    trust_forwarded_for: bool,
) -> String {
    trust_forwarded_for
        .then(|| normalized_forwarded_for(headers))
        .flatten()
        .or_else(|| peer.map(|ConnectInfo(addr)| addr.ip().to_string()))
        .unwrap_or_else(|| "unknown".to_string())
}

fn normalized_forwarded_for(headers: &HeaderMap) -> Option<String> {
    let raw = headers.get("x-forwarded-for")?.to_str().ok()?;
    let first = raw.split(',').next()?.trim();
    if first.is_empty() || first.len() > MAX_FORWARDED_HOP_LEN {
        return None;
    }
    first.parse::<IpAddr>().ok().map(|ip| ip.to_string())
}

#[derive(Debug)]
pub struct RateLimitError {
    pub retry_after: Duration,
}

impl IntoResponse for RateLimitError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "success": false,
            "error": RATE_LIMIT_MESSAGE,
        }));

        let mut response = (StatusCode::TOO_MANY_REQUESTS, body).into_response();
        // round up so clients never retry a moment too early
        let secs = self.retry_after.as_secs() + u64::from(self.retry_after.subsec_nanos() > 0);
        response
            .headers_mut()
            .insert(header::RETRY_AFTER, HeaderValue::from(secs));
        response
    }
}

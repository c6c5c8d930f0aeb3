use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tracing::debug;

const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Redirects plain-HTTP requests to the same host and path over HTTPS.
///
/// The service itself only speaks HTTP, so a request counts as secure when a
/// fronting proxy marks it with `X-Forwarded-Proto: https`.
#[derive(Debug, Clone, Copy)]
pub struct HttpsRedirect {
    pub port: u16,
}

impl HttpsRedirect {
    pub fn new(port: u16) -> Self {
        Self { port }
    }

    fn target(&self, host: &str, path_and_query: &str) -> String {
        let host = strip_port(host);
        match self.port {
            443 => format!("https://{}{}", host, path_and_query),
            port => format!("https://{}:{}{}", host, port, path_and_query),
        }
    }
}

fn strip_port(host: &str) -> &str {
    // Bracketed IPv6 literals keep their colons.
    if let Some(end) = host.rfind(']') {
        return &host[..=end];
    }
    host.split(':').next().unwrap_or(host)
}

fn is_secure(req: &Request) -> bool {
    req.headers()
        .get(FORWARDED_PROTO)
        .and_then(|v| v.to_str().ok())
        .map(|proto| proto.trim().eq_ignore_ascii_case("https"))
        .unwrap_or(false)
}

pub async fn redirect_to_https(
    State(redirect): State<HttpsRedirect>,
    req: Request,
    next: Next,
) -> Response {
    if is_secure(&req) {
        return next.run(req).await;
    }

    let host = req
        .headers()
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);

    let Some(host) = host else {
        debug!(uri = %req.uri(), "No Host header, skipping HTTPS redirect");
        return next.run(req).await;
    };

    let path_and_query = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");
    let location = redirect.target(&host, path_and_query);

    debug!(%location, "Redirecting to HTTPS");
    Redirect::temporary(&location).into_response()
}

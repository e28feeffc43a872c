//! Response headers applied to every route.

use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};

/// Adds caching and framing headers to all responses.
///
/// Session state changes on every login and logout, so nothing is cached.
/// The dashboard is never embedded in frames and does not leak its URLs
/// through the Referer header.
///
/// ```rust,no_run
/// use axum::Router;
/// use axum::middleware;
/// use predictor_session::middleware::security_headers;
///
/// let app: Router = Router::new()
///     .layer(middleware::from_fn(security_headers));
/// ```
pub async fn security_headers(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    headers.insert("cache-control", HeaderValue::from_static("no-store"));
    headers.insert("referrer-policy", HeaderValue::from_static("no-referrer"));
    headers.insert(
        "x-content-type-options",
        HeaderValue::from_static("nosniff"),
    );
    headers.insert("x-frame-options", HeaderValue::from_static("DENY"));

    response
}

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode, Uri};
use axum::middleware::Next;
use axum::response::Response;
use std::time::Duration;

use crate::shared::format::format_number;

/// One console line per request: time, duration, response size, status, method, path.
///
/// Successful responses get a cyan timestamp, everything else brown.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    // Body is buffered to report its real size
    match to_bytes(body, usize::MAX).await {
        Ok(bytes) => {
            print_line(
                parts.status,
                start.elapsed(),
                &format_number(bytes.len()),
                &method,
                &uri,
            );
            Response::from_parts(parts, Body::from(bytes))
        }
        Err(e) => {
            tracing::warn!("Failed to buffer response body for {} {}: {}", method, uri.path(), e);
            print_line(parts.status, start.elapsed(), "error", &method, &uri);
            Response::from_parts(parts, Body::default())
        }
    }
}

fn print_line(status: StatusCode, duration: Duration, size: &str, method: &Method, uri: &Uri) {
    let color_code = if status.is_success() { "36" } else { "33" };
    println!(
        "\x1b[{}m{}\x1b[0m | {:>5}ms | {:>12} | {} {:>6} {}",
        color_code,
        chrono::Local::now().format("%H:%M:%S"),
        duration.as_millis(),
        size,
        status.as_u16(),
        method,
        uri.path()
    );
}

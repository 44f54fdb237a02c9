use axum::{extract::Request, middleware::Next, response::Response};
use tracing::{info, warn};

/// Logs every request with its query string and the resulting status.
pub async fn trace_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let query = request.uri().query().unwrap_or_default().to_owned();

    let response = next.run(request).await;
    let status = response.status();

    if status.is_client_error() || status.is_server_error() {
        warn!(%method, %path, %query, status = status.as_u16(), "Request rejected");
    } else {
        info!(%method, %path, %query, status = status.as_u16(), "Request handled");
    }

    response
}

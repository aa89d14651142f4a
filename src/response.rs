use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Response, StatusCode};

const SERVER_NAME: &str = "campus-web/0.1";

/// Build a rendered HTML page response, with any handler-supplied headers.
pub fn build_page_response(
    status: StatusCode,
    html: String,
    extra_headers: &[(&'static str, String)],
) -> Response<Full<Bytes>> {
    let mut builder = Response::builder()
        .status(status)
        .header("Content-Type", "text/html; charset=utf-8")
        .header("Server", SERVER_NAME);

    for (name, value) in extra_headers {
        builder = builder.header(*name, value);
    }

    builder
        .body(Full::new(Bytes::from(html)))
        .expect("Failed to build response")
}

pub fn build_redirect_response(target: &str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::FOUND)
        .header("Location", target)
        .header("Server", SERVER_NAME)
        .body(Full::new(Bytes::new()))
        .expect("Failed to build redirect response")
}

/// Last-resort error body, used when the error page template itself fails.
pub fn build_fallback_error_response(status: StatusCode) -> Response<Full<Bytes>> {
    let body = format!(
        "<h1>Error {}</h1><p>An error occurred.</p>",
        status.as_u16()
    );
    Response::builder()
        .status(status)
        .header("Content-Type", "text/html; charset=utf-8")
        .header("Server", SERVER_NAME)
        .body(Full::new(Bytes::from(body)))
        .expect("Failed to build fallback error response")
}

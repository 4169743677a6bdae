//! HTTP response building module
//!
//! Builders for the handful of responses the mock ever sends.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::header::{
    HeaderValue, ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_LENGTH, CONTENT_TYPE, SERVER,
};
use hyper::{Response, StatusCode};

/// Options applied to every response
#[derive(Debug, Clone, Copy)]
pub struct ResponseOptions<'a> {
    pub server_name: &'a str,
    pub enable_cors: bool,
    /// HEAD requests keep headers but drop the body
    pub is_head: bool,
}

/// Build 200 JSON response from an already-serialized body
pub fn build_json_response(body: Vec<u8>, opts: ResponseOptions<'_>) -> Response<Full<Bytes>> {
    let mut builder = Response::builder()
        .status(StatusCode::OK)
        .header(CONTENT_TYPE, "application/json")
        .header(CONTENT_LENGTH, body.len())
        .header(SERVER, server_header(opts.server_name));

    if opts.enable_cors {
        builder = builder.header(ACCESS_CONTROL_ALLOW_ORIGIN, "*");
    }

    builder
        .body(Full::new(body_unless_head(body, opts.is_head)))
        .unwrap_or_else(|e| {
            log_build_error("JSON", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 200 image response
pub fn build_image_response(data: Vec<u8>, opts: ResponseOptions<'_>) -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::OK)
        .header(CONTENT_TYPE, "image/png")
        .header(CONTENT_LENGTH, data.len())
        .header(SERVER, server_header(opts.server_name))
        .body(Full::new(body_unless_head(data, opts.is_head)))
        .unwrap_or_else(|e| {
            log_build_error("image", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 404 Not Found response with an empty body
pub fn build_404_response() -> Response<Full<Bytes>> {
    build_empty_response(StatusCode::NOT_FOUND)
}

/// Build 501 Not Implemented response for methods the mock does not serve
pub fn build_501_response() -> Response<Full<Bytes>> {
    build_empty_response(StatusCode::NOT_IMPLEMENTED)
}

/// Build 500 response used when a fixture fails to serialize or a request
/// runs past its time limit
pub fn build_500_response() -> Response<Full<Bytes>> {
    build_empty_response(StatusCode::INTERNAL_SERVER_ERROR)
}

fn build_empty_response(status: StatusCode) -> Response<Full<Bytes>> {
    Response::builder()
        .status(status)
        .header(CONTENT_LENGTH, 0)
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error(status.as_str(), &e);
            let mut resp = Response::new(Full::new(Bytes::new()));
            *resp.status_mut() = status;
            resp
        })
}

fn body_unless_head(data: Vec<u8>, is_head: bool) -> Bytes {
    if is_head {
        Bytes::new()
    } else {
        Bytes::from(data)
    }
}

fn server_header(name: &str) -> HeaderValue {
    HeaderValue::from_str(name).unwrap_or_else(|_| HeaderValue::from_static("seerr-mock"))
}

/// Log response build error
fn log_build_error(kind: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {kind} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;

    const OPTS: ResponseOptions<'static> = ResponseOptions {
        server_name: "seerr-mock",
        enable_cors: true,
        is_head: false,
    };

    #[test]
    fn test_json_response_headers() {
        let resp = build_json_response(b"{}".to_vec(), OPTS);
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()[CONTENT_TYPE], "application/json");
        assert_eq!(resp.headers()[ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(resp.headers()[CONTENT_LENGTH], "2");
        assert_eq!(resp.headers()[SERVER], "seerr-mock");
    }

    #[test]
    fn test_json_response_without_cors() {
        let opts = ResponseOptions {
            enable_cors: false,
            ..OPTS
        };
        let resp = build_json_response(b"[]".to_vec(), opts);
        assert!(resp.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
    }

    #[test]
    fn test_image_response_has_no_cors() {
        let resp = build_image_response(vec![0x89, b'P', b'N', b'G'], OPTS);
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()[CONTENT_TYPE], "image/png");
        assert_eq!(resp.headers()[CONTENT_LENGTH], "4");
        assert!(resp.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
    }

    #[test]
    fn test_empty_error_responses() {
        let resp = build_404_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(resp.headers()[CONTENT_LENGTH], "0");

        assert_eq!(build_501_response().status(), StatusCode::NOT_IMPLEMENTED);
        assert_eq!(
            build_500_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_invalid_server_name_falls_back() {
        let opts = ResponseOptions {
            server_name: "bad\nname",
            ..OPTS
        };
        let resp = build_json_response(Vec::new(), opts);
        assert_eq!(resp.headers()[SERVER], "seerr-mock");
    }
}

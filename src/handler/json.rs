//! JSON fixture responder

use crate::handler::router::RequestContext;
use crate::http;
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use serde::Serialize;

/// Serialize a fixture into a 200 JSON response
///
/// Bodies are compact JSON, identical on every call for the same fixture.
pub fn respond<T: Serialize + ?Sized>(ctx: &RequestContext<'_>, body: &T) -> Response<Full<Bytes>> {
    match serde_json::to_vec(body) {
        Ok(json) => http::build_json_response(json, ctx.opts),
        Err(e) => {
            logger::log_error(&format!("Failed to serialize response for {}: {e}", ctx.path));
            http::build_500_response()
        }
    }
}

//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method check, route lookup, dispatch.

use crate::config::AppState;
use crate::fixtures::{
    self, PagedResults, PlexAuth, StatusInfo, ACCEPTED, API_KEY, EMPTY_REQUESTS, MEDIA, QUOTA,
    STATS, USER,
};
use crate::handler::{images, json};
use crate::http::{self, ResponseOptions};
use crate::logger;
use crate::routing::{self, GetAction, PostAction};
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::sync::Arc;

/// Request context encapsulating information needed for request processing
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub state: &'a AppState,
    pub opts: ResponseOptions<'a>,
}

/// Main entry point for HTTP request handling
pub async fn handle_request<B>(
    req: Request<B>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    Ok(dispatch(req.method(), req.uri().path(), &state).await)
}

/// Resolve one request to its canned response
///
/// The request body is never read; only method and path take part.
pub async fn dispatch(method: &Method, path: &str, state: &AppState) -> Response<Full<Bytes>> {
    if state.access_log() {
        logger::log_request(method, path);
    }

    let ctx = RequestContext {
        path,
        state,
        opts: ResponseOptions {
            server_name: &state.config.http.server_name,
            enable_cors: state.config.http.enable_cors,
            is_head: *method == Method::HEAD,
        },
    };

    match *method {
        Method::GET | Method::HEAD => match routing::match_get(path) {
            Some(action) => serve_get(&ctx, action).await,
            None => http::build_404_response(),
        },
        Method::POST => serve_post(&ctx, routing::match_post(path)),
        _ => {
            logger::log_warning(&format!("Unsupported method ({method}) for {path}"));
            http::build_501_response()
        }
    }
}

async fn serve_get(ctx: &RequestContext<'_>, action: GetAction) -> Response<Full<Bytes>> {
    match action {
        GetAction::Status => json::respond(
            ctx,
            &StatusInfo::new(&ctx.state.config.http.application_url),
        ),
        GetAction::CurrentUser => json::respond(ctx, &USER),
        GetAction::Quota => json::respond(ctx, &QUOTA),
        GetAction::Stats => json::respond(ctx, &STATS),
        GetAction::Discover => json::respond(ctx, &PagedResults::single_page(&MEDIA)),
        GetAction::Movie => json::respond(ctx, fixtures::featured()),
        GetAction::Tv => json::respond(ctx, &fixtures::featured().as_show(fixtures::SHOW_NAME)),
        GetAction::RequestList => json::respond(ctx, &EMPTY_REQUESTS),
        GetAction::EmptyList => json::respond(ctx, &serde_json::json!([])),
        GetAction::Image(asset) => images::serve_image(ctx, asset).await,
    }
}

fn serve_post(ctx: &RequestContext<'_>, action: PostAction) -> Response<Full<Bytes>> {
    match action {
        PostAction::PlexLogin => json::respond(
            ctx,
            &PlexAuth {
                api_key: API_KEY,
                user_id: USER.id,
                user: &USER,
            },
        ),
        PostAction::Accepted => json::respond(ctx, &ACCEPTED),
    }
}

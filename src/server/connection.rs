// Connection handling module
// Accepts a single TCP connection and serves it with the mock handler

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use http_body_util::Full;
use hyper::body::{Body, Bytes};
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response};
use hyper_util::rt::{TokioIo, TokioTimer};

use crate::config;
use crate::handler;
use crate::http;
use crate::logger::{self, AccessLogEntry};

/// Accept and process a connection, checking limits and logging.
///
/// # Arguments
///
/// * `stream` - The TCP stream to handle
/// * `peer_addr` - The peer's socket address
/// * `state` - Shared application state
/// * `conn_counter` - Active connection counter
pub fn accept_connection(
    stream: tokio::net::TcpStream,
    peer_addr: std::net::SocketAddr,
    state: &Arc<config::AppState>,
    conn_counter: &Arc<AtomicUsize>,
) {
    // Increment counter first, then check limit (prevents race condition)
    let prev_count = conn_counter.fetch_add(1, Ordering::SeqCst);

    if let Some(max_conn) = state.config.performance.max_connections {
        if prev_count >= usize::try_from(max_conn).unwrap_or(usize::MAX) {
            // Exceeded limit: rollback counter and reject
            conn_counter.fetch_sub(1, Ordering::SeqCst);
            logger::log_warning(&format!(
                "Max connections reached: {prev_count}/{max_conn}. Connection rejected."
            ));
            drop(stream);
            return;
        }
    }

    if state.access_log() && state.config.logging.access_log_format.is_some() {
        logger::log_connection_accepted(&peer_addr);
    }

    handle_connection(stream, peer_addr, Arc::clone(state), Arc::clone(conn_counter));
}

/// Handle a single connection in a spawned task.
///
/// Serves HTTP/1.1 (keep-alive when configured). An idle keep-alive
/// connection is closed once no request head arrives within
/// `keep_alive_timeout`; each request is bounded separately by
/// `request_timeout`.
fn handle_connection(
    stream: tokio::net::TcpStream,
    peer_addr: std::net::SocketAddr,
    state: Arc<config::AppState>,
    conn_counter: Arc<AtomicUsize>,
) {
    tokio::task::spawn_local(async move {
        let io = TokioIo::new(stream);

        let performance = &state.config.performance;
        let mut builder = http1::Builder::new();
        builder.timer(TokioTimer::new());
        builder.keep_alive(performance.keep_alive_timeout > 0);
        if performance.keep_alive_timeout > 0 {
            builder.header_read_timeout(Duration::from_secs(performance.keep_alive_timeout));
        }

        let service_state = Arc::clone(&state);
        let conn = builder.serve_connection(
            io,
            service_fn(move |req| serve_logged(req, Arc::clone(&service_state), peer_addr)),
        );

        if let Err(err) = conn.await {
            logger::log_connection_error(&err);
        }

        conn_counter.fetch_sub(1, Ordering::SeqCst);
    });
}

/// Time allowed for a single request to be answered
fn request_timeout(performance: &config::PerformanceConfig) -> Duration {
    Duration::from_secs(std::cmp::max(
        performance.read_timeout,
        performance.write_timeout,
    ))
}

/// Run the handler and emit an access log entry when a format is configured
async fn serve_logged<B>(
    req: Request<B>,
    state: Arc<config::AppState>,
    peer_addr: std::net::SocketAddr,
) -> Result<Response<Full<Bytes>>, std::convert::Infallible> {
    let format = state
        .config
        .logging
        .access_log_format
        .clone()
        .filter(|_| state.access_log());

    let (response, entry) = serve_timed(req, state, peer_addr, format.is_some()).await;
    if let (Some(entry), Some(format)) = (entry, format) {
        logger::log_access(&entry, &format);
    }

    Ok(response)
}

/// Run the handler under the request timeout, optionally recording an
/// access entry filled in from the produced response
async fn serve_timed<B>(
    req: Request<B>,
    state: Arc<config::AppState>,
    peer_addr: std::net::SocketAddr,
    record: bool,
) -> (Response<Full<Bytes>>, Option<AccessLogEntry>) {
    let started = Instant::now();
    let mut entry = record.then(|| {
        let mut entry = AccessLogEntry::new(
            peer_addr.to_string(),
            req.method().to_string(),
            req.uri().path().to_string(),
        );
        entry.query = req.uri().query().map(ToString::to_string);
        entry
    });

    let limit = request_timeout(&state.config.performance);
    let response = match tokio::time::timeout(limit, handler::handle_request(req, state)).await {
        Ok(Ok(response)) => response,
        Ok(Err(never)) => match never {},
        Err(_) => {
            logger::log_warning(&format!(
                "Request from {peer_addr} timed out after {} seconds",
                limit.as_secs()
            ));
            http::build_500_response()
        }
    };

    if let Some(entry) = entry.as_mut() {
        entry.status = response.status().as_u16();
        entry.body_bytes = response.body().size_hint().exact().unwrap_or(0);
        entry.request_time_us = u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX);
    }

    (response, entry)
}

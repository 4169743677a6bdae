//! Logger module
//!
//! Plain-text log lines for the mock server:
//! - startup banner
//! - one line per request (method and path)
//! - optional formatted access log entry per response
//! - warnings and errors

mod format;
pub mod writer;

pub use format::AccessLogEntry;

use crate::config::Config;
use hyper::Method;
use std::net::SocketAddr;

/// Initialize the logger with configuration
///
/// Should be called once at application startup.
pub fn init(config: &Config) -> std::io::Result<()> {
    writer::init(
        config.logging.access_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
    )
}

/// Write to info/access log
fn write_info(message: &str) {
    if writer::is_initialized() {
        writer::get().write_info(message);
    } else {
        println!("{message}");
    }
}

/// Write to error log
fn write_error(message: &str) {
    if writer::is_initialized() {
        writer::get().write_error(message);
    } else {
        eprintln!("{message}");
    }
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    write_info(&format!("Serving mock at port {}", addr.port()));
    write_info(&format!("  - Listening on: http://{addr}"));
    write_info(&format!("  - Log level: {}", config.logging.level));
    if let Some(workers) = config.server.workers {
        write_info(&format!("  - Worker threads: {workers}"));
    }
    if let Some(max) = config.performance.max_connections {
        write_info(&format!("  - Max connections: {max}"));
    }
    if let Some(ref path) = config.logging.access_log_file {
        write_info(&format!("  - Access log: {path}"));
    }
    if let Some(ref path) = config.logging.error_log_file {
        write_info(&format!("  - Error log: {path}"));
    }
}

/// Shutdown signal notice, e.g. `[SIGNAL] SIGTERM received, shutting down`
pub fn log_signal(description: &str) {
    write_info(&signal_message(description));
}

fn signal_message(description: &str) -> String {
    format!("[SIGNAL] {description}, shutting down")
}

pub fn log_shutdown() {
    write_info("[Shutdown] Stopped accepting connections");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    write_info(&format!("[Connection] Accepted from: {peer_addr}"));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}

/// Request line, e.g. `GET /api/v1/status`
pub fn log_request(method: &Method, path: &str) {
    write_info(&format!("{method} {path}"));
}

pub fn log_image_served(file: &str) {
    write_info(&format!("Served image: {file}"));
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    if writer::is_initialized() {
        writer::get().write_access(&entry.format(format));
    } else {
        println!("{}", entry.format(format));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_message_goes_through_writer() {
        assert_eq!(
            signal_message("SIGTERM received"),
            "[SIGNAL] SIGTERM received, shutting down"
        );

        let dir = std::env::temp_dir().join(format!("seerr-mock-signal-{}", std::process::id()));
        let path = dir.join("access.log");
        let writer = writer::LogWriter::new(path.to_str(), None).unwrap();
        writer.write_info(&signal_message("SIGINT received (Ctrl+C)"));

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "[SIGNAL] SIGINT received (Ctrl+C), shutting down\n");

        std::fs::remove_dir_all(&dir).ok();
    }
}

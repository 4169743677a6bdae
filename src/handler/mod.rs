//! Request handler module
//!
//! Dispatches requests through the route table to the JSON fixture
//! responder or the static image responder.

mod images;
mod json;
pub mod router;

// Re-export main entry point
pub use router::handle_request;

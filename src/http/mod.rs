//! HTTP protocol layer module
//!
//! Response builders, decoupled from routing and fixtures.

pub mod response;

// Re-export commonly used types
pub use response::{
    build_404_response, build_500_response, build_501_response, build_image_response,
    build_json_response, ResponseOptions,
};

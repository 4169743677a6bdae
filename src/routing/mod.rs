//! Routing module
//!
//! Ordered path-predicate tables for the mock API:
//! - exact, prefix, suffix and substring path rules
//! - first matching route wins
//! - unmatched GET paths resolve to nothing (404), unmatched POST paths are accepted

mod matcher;
mod table;

pub use table::{match_get, match_post, GetAction, ImageAsset, PostAction};

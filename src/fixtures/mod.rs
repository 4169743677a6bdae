//! Fixture data module
//!
//! Every value served by the mock lives here as an immutable `static`.
//! Nothing in this module is mutated after the process starts.

mod media;
mod payloads;
mod user;

pub use media::{featured, MEDIA, SHOW_NAME};
pub use payloads::{
    PagedResults, PlexAuth, StatusInfo, ACCEPTED, API_KEY, EMPTY_REQUESTS, QUOTA, STATS,
};
pub use user::USER;

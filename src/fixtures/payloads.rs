//! Canned response bodies built around the media and user records

use serde::Serialize;

use super::media::MediaRecord;
use super::user::UserRecord;

/// Server version reported by the status endpoint
pub const SERVER_VERSION: &str = "1.33.2";

/// Key handed out by the plex login stub
pub const API_KEY: &str = "test-key";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusInfo<'a> {
    pub version: &'static str,
    pub initialized: bool,
    pub application_url: &'a str,
}

impl<'a> StatusInfo<'a> {
    pub const fn new(application_url: &'a str) -> Self {
        Self {
            version: SERVER_VERSION,
            initialized: true,
            application_url,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct QuotaLimit {
    pub limit: u32,
    pub remaining: u32,
    pub days: u32,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Quota {
    pub movie: QuotaLimit,
    pub tv: QuotaLimit,
}

const DEFAULT_QUOTA_LIMIT: QuotaLimit = QuotaLimit {
    limit: 10,
    remaining: 7,
    days: 7,
};

pub static QUOTA: Quota = Quota {
    movie: DEFAULT_QUOTA_LIMIT,
    tv: DEFAULT_QUOTA_LIMIT,
};

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestStats {
    pub total_requests: u32,
    pub approved_requests: u32,
    pub declined_requests: u32,
    pub pending_requests: u32,
    pub available_requests: u32,
}

pub static STATS: RequestStats = RequestStats {
    total_requests: 32,
    approved_requests: 24,
    declined_requests: 2,
    pending_requests: 4,
    available_requests: 2,
};

/// Search and discover result page
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResults<'a> {
    pub page: u32,
    pub total_pages: u32,
    pub total_results: usize,
    pub results: &'a [MediaRecord],
}

impl<'a> PagedResults<'a> {
    /// All records on a single page
    pub const fn single_page(results: &'a [MediaRecord]) -> Self {
        Self {
            page: 1,
            total_pages: 1,
            total_results: results.len(),
            results,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub pages: u32,
    pub page_size: u32,
    pub results: u32,
    pub page: u32,
}

/// Media request listing; always empty
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestPage {
    pub page_info: PageInfo,
    pub results: [MediaRecord; 0],
}

pub static EMPTY_REQUESTS: RequestPage = RequestPage {
    page_info: PageInfo {
        pages: 1,
        page_size: 20,
        results: 0,
        page: 1,
    },
    results: [],
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlexAuth {
    pub api_key: &'static str,
    pub user_id: u32,
    pub user: &'static UserRecord,
}

/// Acknowledgement for every POST other than plex login
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Accepted {
    pub id: u32,
    pub status: u32,
}

pub static ACCEPTED: Accepted = Accepted { id: 1, status: 1 };

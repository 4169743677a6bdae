//! Route table module
//!
//! The fixed, ordered tables mapping request paths to canned responses.
//! First match wins, so order here is part of the wire contract.

use super::matcher::{match_route, PathRule};

/// A set of alternative path rules and the action taken when one matches
#[derive(Debug)]
pub struct Route<A> {
    pub rules: &'static [PathRule],
    pub action: A,
}

/// Canned GET responses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GetAction {
    Status,
    CurrentUser,
    Quota,
    Stats,
    Discover,
    Movie,
    Tv,
    RequestList,
    EmptyList,
    Image(ImageAsset),
}

/// Image files served for media and avatar artwork
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageAsset {
    Poster,
    Backdrop,
    Avatar,
}

/// Canned POST responses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostAction {
    PlexLogin,
    /// Any other POST path is acknowledged
    Accepted,
}

const fn route<A>(rules: &'static [PathRule], action: A) -> Route<A> {
    Route { rules, action }
}

static GET_ROUTES: [Route<GetAction>; 12] = [
    route(&[PathRule::Exact("/api/v1/status")], GetAction::Status),
    route(
        &[PathRule::Exact("/api/v1/auth/me"), PathRule::Exact("/api/v1/user")],
        GetAction::CurrentUser,
    ),
    route(
        &[PathRule::Exact("/api/v1/user/1/quota"), PathRule::Suffix("/quota")],
        GetAction::Quota,
    ),
    route(&[PathRule::Suffix("/stats")], GetAction::Stats),
    route(
        &[PathRule::Contains("/discover/"), PathRule::Contains("/search")],
        GetAction::Discover,
    ),
    route(&[PathRule::Prefix("/api/v1/movie/")], GetAction::Movie),
    route(&[PathRule::Prefix("/api/v1/tv/")], GetAction::Tv),
    route(&[PathRule::Exact("/api/v1/request")], GetAction::RequestList),
    route(
        &[PathRule::Contains("genres"), PathRule::Contains("settings")],
        GetAction::EmptyList,
    ),
    route(&[PathRule::Prefix("/poster")], GetAction::Image(ImageAsset::Poster)),
    route(&[PathRule::Prefix("/backdrop")], GetAction::Image(ImageAsset::Backdrop)),
    route(&[PathRule::Prefix("/avatar")], GetAction::Image(ImageAsset::Avatar)),
];

static POST_ROUTES: [Route<PostAction>; 1] =
    [route(&[PathRule::Exact("/api/v1/auth/plex")], PostAction::PlexLogin)];

/// Resolve a GET path; `None` means 404
pub fn match_get(path: &str) -> Option<GetAction> {
    match_route(path, &GET_ROUTES).map(|r| r.action)
}

/// Resolve a POST path; never fails
pub fn match_post(path: &str) -> PostAction {
    match_route(path, &POST_ROUTES).map_or(PostAction::Accepted, |r| r.action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_api_routes() {
        assert_eq!(match_get("/api/v1/status"), Some(GetAction::Status));
        assert_eq!(match_get("/api/v1/auth/me"), Some(GetAction::CurrentUser));
        assert_eq!(match_get("/api/v1/user"), Some(GetAction::CurrentUser));
        assert_eq!(match_get("/api/v1/request"), Some(GetAction::RequestList));
    }

    #[test]
    fn test_quota_and_stats_suffixes() {
        assert_eq!(match_get("/api/v1/user/1/quota"), Some(GetAction::Quota));
        assert_eq!(match_get("/api/v1/user/42/quota"), Some(GetAction::Quota));
        assert_eq!(match_get("/quota"), Some(GetAction::Quota));
        assert_eq!(match_get("/api/v1/request/stats"), Some(GetAction::Stats));
        // Suffix rules outrank the movie prefix
        assert_eq!(match_get("/api/v1/movie/1001/stats"), Some(GetAction::Stats));
    }

    #[test]
    fn test_discover_and_search() {
        assert_eq!(match_get("/api/v1/discover/movies"), Some(GetAction::Discover));
        assert_eq!(match_get("/api/v1/search"), Some(GetAction::Discover));
        assert_eq!(match_get("/api/v1/search/keyword"), Some(GetAction::Discover));
        // "/discover" without the trailing slash is not a discover path
        assert_eq!(match_get("/api/v1/discover"), None);
        // Discover outranks the genre list
        assert_eq!(
            match_get("/api/v1/discover/genreslider/movie"),
            Some(GetAction::Discover)
        );
    }

    #[test]
    fn test_media_details() {
        assert_eq!(match_get("/api/v1/movie/1001"), Some(GetAction::Movie));
        assert_eq!(match_get("/api/v1/movie/anything/else"), Some(GetAction::Movie));
        assert_eq!(match_get("/api/v1/tv/55"), Some(GetAction::Tv));
        assert_eq!(match_get("/api/v1/movie"), None);
    }

    #[test]
    fn test_genres_and_settings() {
        assert_eq!(match_get("/api/v1/genres/movie"), Some(GetAction::EmptyList));
        assert_eq!(match_get("/api/v1/settings/public"), Some(GetAction::EmptyList));
        // Movie prefix wins over the substring rule
        assert_eq!(match_get("/api/v1/movie/settings"), Some(GetAction::Movie));
    }

    #[test]
    fn test_image_prefixes() {
        assert_eq!(
            match_get("/poster/movie_1001.jpg"),
            Some(GetAction::Image(ImageAsset::Poster))
        );
        assert_eq!(
            match_get("/backdrop/movie_1002.jpg"),
            Some(GetAction::Image(ImageAsset::Backdrop))
        );
        assert_eq!(
            match_get("/avatar/admin.jpg"),
            Some(GetAction::Image(ImageAsset::Avatar))
        );
        // Image paths carrying a stats suffix hit the earlier rule
        assert_eq!(match_get("/poster/stats"), Some(GetAction::Stats));
    }

    #[test]
    fn test_unmatched_paths() {
        assert_eq!(match_get("/foo/bar"), None);
        assert_eq!(match_get("/"), None);
        assert_eq!(match_get("/api/v1/statuses"), None);
    }

    #[test]
    fn test_post_routes() {
        assert_eq!(match_post("/api/v1/auth/plex"), PostAction::PlexLogin);
        assert_eq!(match_post("/api/v1/request"), PostAction::Accepted);
        assert_eq!(match_post("/api/v1/auth/plexx"), PostAction::Accepted);
        assert_eq!(match_post("/"), PostAction::Accepted);
    }
}

//! Static image serving module
//!
//! Poster, backdrop and avatar requests all resolve to one configured file
//! per kind, read from disk on every request.

use crate::config::AssetsConfig;
use crate::handler::router::RequestContext;
use crate::http;
use crate::logger;
use crate::routing::ImageAsset;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use tokio::fs;

/// File backing an image route
pub fn asset_path(assets: &AssetsConfig, asset: ImageAsset) -> &str {
    match asset {
        ImageAsset::Poster => &assets.poster,
        ImageAsset::Backdrop => &assets.backdrop,
        ImageAsset::Avatar => &assets.avatar,
    }
}

/// Serve the image for an asset kind, or 404 when the file cannot be read
pub async fn serve_image(ctx: &RequestContext<'_>, asset: ImageAsset) -> Response<Full<Bytes>> {
    let file = asset_path(&ctx.state.config.assets, asset);
    match fs::read(file).await {
        Ok(content) => {
            logger::log_image_served(file);
            http::build_image_response(content, ctx.opts)
        }
        Err(e) => {
            logger::log_warning(&format!("Failed to read image '{file}' for {}: {e}", ctx.path));
            http::build_404_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AppState, Config};
    use crate::handler::router::dispatch;
    use http_body_util::BodyExt;
    use hyper::header::{ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE};
    use hyper::{Method, StatusCode};
    use std::path::PathBuf;

    const PNG: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("seerr-mock-{name}-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn state_with_assets(dir: &std::path::Path) -> AppState {
        let mut config = Config::defaults().unwrap();
        config.logging.access_log = false;
        config.assets = AssetsConfig {
            poster: dir.join("poster.png").to_string_lossy().into_owned(),
            backdrop: dir.join("backdrop.png").to_string_lossy().into_owned(),
            avatar: dir.join("missing.png").to_string_lossy().into_owned(),
        };
        AppState::new(config)
    }

    #[test]
    fn test_asset_path_mapping() {
        let assets = Config::defaults().unwrap().assets;
        assert_eq!(
            asset_path(&assets, ImageAsset::Poster),
            "website/screenshots/issues.png"
        );
        assert_eq!(
            asset_path(&assets, ImageAsset::Backdrop),
            "website/screenshots/discover.png"
        );
        assert_eq!(
            asset_path(&assets, ImageAsset::Avatar),
            "website/screenshots/profile.png"
        );
    }

    #[tokio::test]
    async fn test_existing_image_is_served_verbatim() {
        let dir = scratch_dir("images-ok");
        std::fs::write(dir.join("poster.png"), PNG).unwrap();
        let state = state_with_assets(&dir);

        let resp = dispatch(&Method::GET, "/poster/anything.jpg", &state).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()[CONTENT_TYPE], "image/png");
        assert!(resp.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
        let body = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], PNG);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[tokio::test]
    async fn test_missing_image_is_404() {
        let dir = scratch_dir("images-missing");
        let state = state_with_assets(&dir);

        for path in ["/avatar/admin.jpg", "/backdrop/movie_1001.jpg"] {
            let resp = dispatch(&Method::GET, path, &state).await;
            assert_eq!(resp.status(), StatusCode::NOT_FOUND, "GET {path}");
            let body = resp.into_body().collect().await.unwrap().to_bytes();
            assert!(body.is_empty());
        }

        std::fs::remove_dir_all(&dir).ok();
    }

    #[tokio::test]
    async fn test_image_is_reread_per_request() {
        let dir = scratch_dir("images-reread");
        let state = state_with_assets(&dir);

        let resp = dispatch(&Method::GET, "/backdrop/x.jpg", &state).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        std::fs::write(dir.join("backdrop.png"), PNG).unwrap();
        let resp = dispatch(&Method::GET, "/backdrop/x.jpg", &state).await;
        assert_eq!(resp.status(), StatusCode::OK);

        std::fs::remove_dir_all(&dir).ok();
    }
}

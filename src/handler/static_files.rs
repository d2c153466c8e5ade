//! Static asset serving module
//!
//! Loads site assets from the configured root, with MIME detection,
//! ETag-based conditional responses, a traversal guard, and the
//! serve-index-for-unmatched-routes fallback.

use crate::config::AssetsConfig;
use crate::http::{self, cache, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::Path;
use tokio::fs;

/// Request context for asset serving
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub is_head: bool,
    pub if_none_match: Option<String>,
}

/// Serve the asset matching the request path, or fall back to the index
/// document so direct navigation to client-side routes works.
pub async fn serve(ctx: &RequestContext<'_>, assets: &AssetsConfig) -> Response<Full<Bytes>> {
    if let Some((content, content_type)) =
        load_asset(&assets.root, ctx.path, &assets.index_files).await
    {
        return build_asset_response(&content, content_type, ctx);
    }

    serve_index_fallback(ctx, assets).await
}

/// Terminal fallback: the root index document, 404 only if it is unreadable.
async fn serve_index_fallback(
    ctx: &RequestContext<'_>,
    assets: &AssetsConfig,
) -> Response<Full<Bytes>> {
    for index_file in &assets.index_files {
        let index_path = Path::new(&assets.root).join(index_file);
        if let Ok(content) = fs::read(&index_path).await {
            let content_type =
                mime::get_content_type(index_path.extension().and_then(|e| e.to_str()));
            return build_asset_response(&content, content_type, ctx);
        }
    }

    logger::log_warning(&format!(
        "No index document found under '{}' for fallback",
        assets.root
    ));
    http::build_404_response()
}

/// Load an asset from the root directory with index file support
async fn load_asset(
    asset_root: &str,
    path: &str,
    index_files: &[String],
) -> Option<(Vec<u8>, &'static str)> {
    // Remove leading slash and prevent directory traversal
    let relative_path = path.trim_start_matches('/').replace("..", "");

    let mut file_path = Path::new(asset_root).join(&relative_path);

    let root_canonical = match Path::new(asset_root).canonicalize() {
        Ok(p) => p,
        Err(e) => {
            logger::log_warning(&format!(
                "Asset root not found or inaccessible '{asset_root}': {e}"
            ));
            return None;
        }
    };

    // Directory paths try the index files
    if file_path.is_dir() || relative_path.is_empty() || relative_path.ends_with('/') {
        for index_file in index_files {
            let index_path = file_path.join(index_file);
            if index_path.is_file() {
                file_path = index_path;
                break;
            }
        }
    }

    // File not found is the common 404/fallback case, not worth a log line
    let Ok(file_path_canonical) = file_path.canonicalize() else {
        return None;
    };
    if !file_path_canonical.starts_with(&root_canonical) {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {} -> {}",
            path,
            file_path_canonical.display()
        ));
        return None;
    }

    let content = match fs::read(&file_path).await {
        Ok(c) => c,
        Err(e) => {
            logger::log_error(&format!(
                "Failed to read file '{}': {}",
                file_path.display(),
                e
            ));
            return None;
        }
    };

    let content_type = mime::get_content_type(file_path.extension().and_then(|e| e.to_str()));

    Some((content, content_type))
}

/// Build the asset response with `ETag` handling
fn build_asset_response(
    data: &[u8],
    content_type: &str,
    ctx: &RequestContext<'_>,
) -> Response<Full<Bytes>> {
    let etag = cache::generate_etag(data);

    if cache::check_etag_match(ctx.if_none_match.as_deref(), &etag) {
        return http::build_304_response(&etag);
    }

    http::build_cached_response(Bytes::from(data.to_owned()), content_type, &etag, ctx.is_head)
}

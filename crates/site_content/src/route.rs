//! Route-path normalization used for active navigation matching.

/// Normalizes a page path or link href for active-link comparison.
///
/// All trailing slashes are stripped and an empty result collapses to `/`. No other rewriting
/// happens, so `/a` and `/a/` match while `/a` and `/a/b` do not.
pub fn normalize_route_path(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Returns whether `href` points at the page currently shown at `current_path`.
pub fn is_active_route(href: Option<&str>, current_path: &str) -> bool {
    normalize_route_path(href.unwrap_or("/")) == normalize_route_path(current_path)
}

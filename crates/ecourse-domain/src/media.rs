//! Image path policy.
//!
//! Image fields store a relative path. Only paths served from the static asset
//! prefix are rewritten to absolute URLs; uploaded media paths render as absent.

/// Path prefix of statically served assets.
pub const STATIC_PREFIX: &str = "/static/";

/// Absolute URL for a stored image path, or `None` if the path is not a static asset.
///
/// ```
/// use ecourse_domain::media::absolute_image_url;
///
/// assert_eq!(
///     absolute_image_url("/static/courses/go.png", "https://ecourse.dev/"),
///     Some("https://ecourse.dev/static/courses/go.png".to_owned()),
/// );
/// assert_eq!(absolute_image_url("courses/2021/07/go.png", "https://ecourse.dev"), None);
/// ```
pub fn absolute_image_url(path: &str, base_url: &str) -> Option<String> {
    if !path.starts_with(STATIC_PREFIX) {
        return None;
    }
    Some(format!("{}{}", base_url.trim_end_matches('/'), path))
}

use url::Url;

/// Resolve the bearer token carried by a signup page URL.
///
/// The `token` query parameter wins when present and non-empty; otherwise the
/// last non-empty path segment is used. A missing or malformed token is not
/// an error here, the empty string simply fails authentication later at the
/// server.
#[must_use]
pub fn resolve(page_url: &str) -> String {
    let Ok(url) = Url::parse(page_url) else {
        return String::new();
    };

    if let Some((_, value)) = url.query_pairs().find(|(name, _)| name == "token") {
        if !value.is_empty() {
            return value.into_owned();
        }
    }

    url.path_segments()
        .and_then(|segments| segments.filter(|segment| !segment.is_empty()).last())
        .map_or_else(String::new, ToString::to_string)
}

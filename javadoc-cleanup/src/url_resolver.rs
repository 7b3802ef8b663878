//! Canonical URL construction for documentation pages

/// Build the canonical absolute URL of a page.
///
/// `relative_path` is the page path relative to the documentation root in
/// `./sub/dir/file.html` form. Directory index pages resolve to their
/// directory, and exactly one `/` separates the base URL from the path.
///
/// # Examples
///   ("./a/b/index.html", "https://example.com/") -> "https://example.com/a/b/"
///   ("./a/page.html", "https://example.com") -> "https://example.com/a/page.html"
pub fn resolve(relative_path: &str, base_url: &str) -> String {
    let path = relative_path.strip_prefix('.').unwrap_or(relative_path);

    let path = if path.ends_with("/index.html") {
        &path[..path.len() - "index.html".len()]
    } else if path == "index.html" {
        ""
    } else {
        path
    };

    let base_has_slash = base_url.ends_with('/');
    if let Some(rest) = path.strip_prefix('/') {
        if base_has_slash {
            return format!("{}{}", base_url, rest);
        }
    } else if !base_has_slash {
        return format!("{}/{}", base_url, path);
    }

    format!("{}{}", base_url, path)
}

//! String helpers shared by handlers and exporters

/// Make a string safe to embed in a `Content-Disposition` filename.
///
/// Keeps ASCII alphanumerics, `.`, `_` and `-`; every other character becomes `_`.
/// An empty input yields `"document"`.
///
/// # Example
/// ```ignore
/// assert_eq!(sanitize_filename("my repo/v2"), "my_repo_v2");
/// ```
#[inline]
pub fn sanitize_filename(name: &str) -> String {
    if name.is_empty() {
        return "document".to_string();
    }

    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') { c } else { '_' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_filename_keeps_safe_chars() {
        assert_eq!(sanitize_filename("demo-repo_v1.2"), "demo-repo_v1.2");
    }

    #[test]
    fn test_sanitize_filename_replaces_unsafe_chars() {
        assert_eq!(sanitize_filename("my repo/\"x\""), "my_repo__x_");
        assert_eq!(sanitize_filename("café"), "caf_");
    }

    #[test]
    fn test_sanitize_filename_empty() {
        assert_eq!(sanitize_filename(""), "document");
    }
}

//! Resolution of the `package.json` location inside a repository.

/// File name of the npm package manifest.
pub const PACKAGE_JSON: &str = "package.json";

/// Returns the repository-relative path of the `package.json` to edit.
///
/// `path` is an optional user-supplied fragment. It may be empty, a directory
/// (with or without a trailing `/`), or a path that already names the
/// manifest.
///
/// # Examples
///
/// ```
/// use renovate_stripper::package_json_path;
///
/// assert_eq!(package_json_path(None), "package.json");
/// assert_eq!(package_json_path(Some("my/path/to")), "my/path/to/package.json");
/// assert_eq!(package_json_path(Some("my/path/to/")), "my/path/to/package.json");
/// ```
#[must_use]
pub fn package_json_path(path: Option<&str>) -> String {
    let path = path.unwrap_or_default();

    if path.is_empty() {
        return PACKAGE_JSON.to_string();
    }

    if path.ends_with(PACKAGE_JSON) {
        return path.to_string();
    }

    if path.ends_with('/') {
        format!("{path}{PACKAGE_JSON}")
    } else {
        format!("{path}/{PACKAGE_JSON}")
    }
}

//! Path helpers shared by the tree and the file system.
//!
//! Inner paths are plain strings: absolute, `/`-separated, and (for directories)
//! terminated with `/`. The virtual root is exactly `/`.

/// Resolves `path` against `cwd` and returns a canonical absolute directory path.
///
/// * absolute `path` (starting with `/`) ignores `cwd`;
/// * empty and `.` segments are dropped;
/// * `..` drops the previous segment, at the root it does nothing;
/// * the result always starts and ends with `/`.
///
/// ```
/// use vfs_shell::utils::normalize;
///
/// assert_eq!(normalize("/home/user/", "../etc"), "/home/etc/");
/// assert_eq!(normalize("/", "../../.."), "/");
/// ```
pub fn normalize(cwd: &str, path: &str) -> String {
    let joined;
    let combined = if path.starts_with('/') {
        path
    } else {
        joined = format!("{cwd}/{path}");
        joined.as_str()
    };

    let mut parts: Vec<&str> = Vec::new();
    for part in combined.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                parts.pop();
            }
            _ => parts.push(part),
        }
    }

    if parts.is_empty() {
        return String::from("/");
    }
    format!("/{}/", parts.join("/"))
}

/// Non-empty segments of `path`, in order.
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// Returns true if `path` denotes the virtual root.
pub fn is_virtual_root(path: &str) -> bool {
    !path.is_empty() && segments(path).next().is_none()
}

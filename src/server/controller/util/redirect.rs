/// Whether `target` is a same-origin path that is safe to redirect to after login.
///
/// Only absolute paths on this host pass: a single leading `/`, no backslashes, no control
/// characters and no scheme. `//evil.example` and `/\evil.example` are protocol-relative in
/// browsers and are rejected.
pub fn is_safe_redirect_target(target: &str) -> bool {
    if !target.starts_with('/') || target.starts_with("//") {
        return false;
    }

    !(target.contains('\\') || target.contains("://") || target.chars().any(char::is_control))
}

/// Returns `target` when it is safe to redirect to.
pub fn safe_redirect_target(target: Option<&str>) -> Option<&str> {
    target
        .map(str::trim)
        .filter(|target| is_safe_redirect_target(target))
}

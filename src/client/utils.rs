//! Status classification helpers.

/// Whether `status` counts as success: anything in `[200, 400)`.
///
/// Redirect statuses are included; informational ones are not.
pub fn is_success_status(status: u16) -> bool {
    (200..400).contains(&status)
}

/// Check if status code indicates access denied
pub fn is_access_denied_status(status: u16) -> bool {
    matches!(status, 401 | 403)
}

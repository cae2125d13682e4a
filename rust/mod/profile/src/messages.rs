//! User-facing status messages.

pub const NOT_AUTHENTICATED: &str = "Not authenticated.";
pub const ALL_FIELDS_REQUIRED: &str = "All fields are required.";

pub const PROFILE_UPDATED: &str = "Profile updated successfully.";
pub const PROFILE_UPDATE_FAILED: &str = "Update failed.";

pub const PASSWORDS_DO_NOT_MATCH: &str = "New passwords do not match.";
pub const PASSWORD_TOO_SHORT: &str = "New password must be at least 8 characters.";
pub const PASSWORD_CHANGED: &str = "Password changed successfully.";
pub const PASSWORD_CHANGE_FAILED: &str = "Password change failed.";

/// Shown when a failure response cannot be read at all (non-JSON body,
/// dropped connection).
pub const UNEXPECTED_ERROR: &str = "Unexpected error";

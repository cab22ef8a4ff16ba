//! Shared crate-wide constants for hostprobe.
//!
//! Centralizes magic values used across modules.
//! Adjusting these here will propagate through the crate.

/// Registry name under which the local backend is published to the framework.
pub const BACKEND_NAME: &str = "local";

/// Placeholder printed by GNU `stat --printf '%C'` when no security context
/// is attached to a file.
pub const LABEL_PLACEHOLDER: &str = "?";

/// Mask selecting the owner/group/other permission bits of a raw mode value.
/// Type and setuid/setgid/sticky bits are deliberately outside this mask.
pub const MODE_PERM_MASK: u32 = 0o777;

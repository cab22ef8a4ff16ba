//! Normalized file metadata independent of the OS that produced it.
//!
//! This module provides the backend-agnostic stat shape consumed by resource
//! matchers:
//! - `classify_mode(mode)`: fold raw lstat mode bits onto the closed
//!   [`FileType`] vocabulary
//! - [`Metadata`]: the normalized record; every field optional, the empty
//!   record is what a failed stat yields
//!
//! Notes:
//! - `mode` carries the permission bits only (raw mode masked to the low 9
//!   bits); callers needing setuid/sticky bits must look at the raw mode.
//! - `mtime` counts whole seconds since the Unix epoch.
//! - `size` is the raw byte length from the stat call and is passed through
//!   unchanged for directories and devices.

use serde::Serialize;

/// Closed vocabulary of normalized file types.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileType {
    File,
    Directory,
    Symlink,
    CharacterDevice,
    BlockDevice,
    Socket,
    Pipe,
    Unknown,
}

impl FileType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FileType::File => "file",
            FileType::Directory => "directory",
            FileType::Symlink => "symlink",
            FileType::CharacterDevice => "character_device",
            FileType::BlockDevice => "block_device",
            FileType::Socket => "socket",
            FileType::Pipe => "pipe",
            FileType::Unknown => "unknown",
        }
    }
}

/// Ordered classification table. Masks with more bits set come first so that
/// e.g. a socket (`0o140000`) is not misread as a regular file (`0o100000`).
const TYPE_MASKS: &[(FileType, u32)] = &[
    (FileType::Socket, 0o140000),
    (FileType::Symlink, 0o120000),
    (FileType::File, 0o100000),
    (FileType::BlockDevice, 0o060000),
    (FileType::Directory, 0o040000),
    (FileType::CharacterDevice, 0o020000),
    (FileType::Pipe, 0o010000),
];

/// Classify a raw lstat mode value. The first table mask fully contained in
/// `mode` wins; a mode matching no mask is `Unknown`.
pub fn classify_mode(mode: u32) -> FileType {
    TYPE_MASKS
        .iter()
        .find(|(_, mask)| mode & mask == *mask)
        .map_or(FileType::Unknown, |(ty, _)| *ty)
}

/// Normalized file attributes. A failed stat produces `Metadata::default()`
/// (every field absent); consumers read absence as "no information", never as
/// an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Metadata {
    pub file_type: Option<FileType>,
    pub mode: Option<u32>,
    pub mtime: Option<i64>,
    pub size: Option<u64>,
    pub owner: Option<String>,
    pub group: Option<String>,
    pub selinux_label: Option<String>,
}

impl Metadata {
    /// True when the record carries no information (the failed-stat case).
    pub fn is_empty(&self) -> bool {
        *self == Metadata::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_each_known_mask() {
        assert_eq!(classify_mode(0o100644), FileType::File);
        assert_eq!(classify_mode(0o040755), FileType::Directory);
        assert_eq!(classify_mode(0o120777), FileType::Symlink);
        assert_eq!(classify_mode(0o140755), FileType::Socket);
        assert_eq!(classify_mode(0o060660), FileType::BlockDevice);
        assert_eq!(classify_mode(0o020666), FileType::CharacterDevice);
        assert_eq!(classify_mode(0o010600), FileType::Pipe);
    }

    #[test]
    fn first_fully_set_mask_wins() {
        // A symlink mode contains the regular-file bits; the symlink mask is
        // tried first.
        assert_eq!(classify_mode(0o120644), FileType::Symlink);
        // A socket mode contains both the file and directory bits.
        assert_eq!(classify_mode(0o140644), FileType::Socket);
    }

    #[test]
    fn unmatched_mode_is_unknown() {
        assert_eq!(classify_mode(0), FileType::Unknown);
        assert_eq!(classify_mode(0o644), FileType::Unknown);
    }

    #[test]
    fn vocabulary_strings_are_stable() {
        assert_eq!(FileType::CharacterDevice.as_str(), "character_device");
        assert_eq!(FileType::Pipe.as_str(), "pipe");
    }

    #[test]
    fn default_record_is_empty() {
        assert!(Metadata::default().is_empty());
        let populated = Metadata {
            size: Some(1),
            ..Metadata::default()
        };
        assert!(!populated.is_empty());
    }
}

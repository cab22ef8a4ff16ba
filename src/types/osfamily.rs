//! OS-family detection and the immutable OS handle.
//!
//! Resource logic elsewhere in the framework branches on a small closed
//! vocabulary of family tags, so the many possible raw platform identifiers
//! are folded onto few tags. An unrecognized identifier is carried through
//! as-is rather than failing: callers can still inspect the raw value.

use std::fmt;

use serde::{Serialize, Serializer};

/// Normalized OS classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OsFamily {
    Aix,
    Darwin,
    Hpux,
    Linux,
    FreeBsd,
    OpenBsd,
    NetBsd,
    Solaris2,
    Windows,
    /// Fallback carrying the raw, unrecognized platform identifier.
    Other(String),
}

/// Ordered pattern table; the first substring hit wins. Covers both
/// uname-style identifiers ("darwin21", "mingw32") and the identifiers the
/// Rust runtime reports ("macos", "windows"). Matching is case-sensitive.
const FAMILY_PATTERNS: &[(&str, OsFamily)] = &[
    ("aix", OsFamily::Aix),
    ("darwin", OsFamily::Darwin),
    ("macos", OsFamily::Darwin),
    ("hpux", OsFamily::Hpux),
    ("linux", OsFamily::Linux),
    ("freebsd", OsFamily::FreeBsd),
    ("openbsd", OsFamily::OpenBsd),
    ("netbsd", OsFamily::NetBsd),
    ("solaris2", OsFamily::Solaris2),
    ("mswin", OsFamily::Windows),
    ("mingw32", OsFamily::Windows),
    ("windows", OsFamily::Windows),
];

impl OsFamily {
    /// Fold a raw platform identifier onto the family vocabulary.
    /// Pure and idempotent; an unmatched identifier round-trips via `Other`.
    pub fn detect(raw: &str) -> OsFamily {
        FAMILY_PATTERNS
            .iter()
            .find(|(pat, _)| raw.contains(pat))
            .map(|(_, family)| family.clone())
            .unwrap_or_else(|| OsFamily::Other(raw.to_string()))
    }

    /// The stable vocabulary string other framework components depend on.
    pub fn as_str(&self) -> &str {
        match self {
            OsFamily::Aix => "aix",
            OsFamily::Darwin => "darwin",
            OsFamily::Hpux => "hpux",
            OsFamily::Linux => "linux",
            OsFamily::FreeBsd => "freebsd",
            OsFamily::OpenBsd => "openbsd",
            OsFamily::NetBsd => "netbsd",
            OsFamily::Solaris2 => "solaris2",
            OsFamily::Windows => "windows",
            OsFamily::Other(raw) => raw,
        }
    }
}

impl fmt::Display for OsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for OsFamily {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Immutable OS handle owned by a backend instance. The family is computed
/// once at backend construction and never re-queried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Os {
    family: OsFamily,
}

impl Os {
    pub fn new(family: OsFamily) -> Self {
        Os { family }
    }

    /// Detect the running host's family from the runtime platform identifier.
    pub fn host() -> Self {
        Os::new(OsFamily::detect(std::env::consts::OS))
    }

    pub fn family(&self) -> &OsFamily {
        &self.family
    }

    pub fn is_linux(&self) -> bool {
        self.family == OsFamily::Linux
    }

    pub fn is_windows(&self) -> bool {
        self.family == OsFamily::Windows
    }

    /// True for every family this crate treats as unix-like.
    pub fn is_unix(&self) -> bool {
        matches!(
            self.family,
            OsFamily::Aix
                | OsFamily::Darwin
                | OsFamily::Hpux
                | OsFamily::Linux
                | OsFamily::FreeBsd
                | OsFamily::OpenBsd
                | OsFamily::NetBsd
                | OsFamily::Solaris2
        )
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.family.fmt(f)
    }
}

//! Error types used across hostprobe.
use thiserror::Error;

/// High-level error categories for command execution.
///
/// Only failures the runner does not contain end up here; everything the
/// design treats as "missing information" (missing binary, unreadable path,
/// unresolvable uid) never becomes an error at all.
#[derive(Debug, Copy, Clone, Error)]
pub enum ErrorKind {
    #[error("spawn failure")]
    Spawn,
    #[error("io error")]
    Io,
}

/// Structured error with a kind and human message.
#[derive(Debug, Error)]
#[error("{kind:?}: {msg}")]
pub struct Error {
    pub kind: ErrorKind,
    pub msg: String,
}

/// Convenient alias for results returning a `types::Error`.
pub type Result<T> = std::result::Result<T, Error>;

#![forbid(unsafe_code)]
//! Hostprobe: local backend for multi-backend host inspection.
//!
//! An inspection run talks to its target through the [`Backend`] trait: run a
//! command, fetch a file handle, read the OS family. This crate ships the
//! local implementation of that contract, built on direct OS primitives.
//!
//! Model highlights:
//! - One logical file handle per path string per backend instance; handles
//!   memoize their stat record, content, and link target, and a failed probe
//!   is memoized like a successful one.
//! - Failure containment: missing binaries, unreadable paths, and
//!   unresolvable uids degrade to absent data instead of errors. Only
//!   unclassified spawn or stream failures surface as [`types::Error`].
//! - Backend instances are single-run, single-thread objects; no internal
//!   locking is provided.

pub mod backend;
pub mod constants;
pub mod local;
pub mod types;

pub use backend::{Backend, FileResource};
pub use local::{BackendConfig, LocalBackend};

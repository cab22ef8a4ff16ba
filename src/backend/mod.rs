//! The backend contract shared by every execution target.
//!
//! A backend is one concrete way of running commands and reading files
//! against a target (local machine, remote host, container). The framework
//! dispatches through these traits only, so swapping the backend never
//! changes resource logic.
//!
//! Notes:
//! - `file` returns `Rc` handles: a backend hands out exactly one logical
//!   handle per path string and keeps it alive for its own lifetime.
//! - A backend serves one inspection run from one thread; callers that share
//!   an instance across threads must serialize access externally.

use std::path::Path;
use std::rc::Rc;

use crate::types::{CommandResult, Metadata, Os, Result};

pub trait Backend {
    /// OS handle of the target, computed once at backend construction.
    fn os(&self) -> &Os;

    /// Run `cmd` through the target's shell and capture its output.
    ///
    /// A missing executable is not an error: it yields a result with exit
    /// status 1 and no output. Only unclassified spawn or stream failures
    /// return `Err`.
    fn run_command(&self, cmd: &str) -> Result<CommandResult>;

    /// Return the unique handle for `path`, creating it on first request.
    /// Keys are exact path strings; `/a` and `/a/` are distinct handles even
    /// when they name the same filesystem object.
    fn file(&self, path: &str) -> Rc<dyn FileResource>;
}

/// One filesystem path on the target, with lazily-computed, memoized views.
pub trait FileResource {
    fn path(&self) -> &str;

    /// Normalized metadata, computed on first access and memoized for the
    /// handle's lifetime. A failed stat memoizes the empty record; the
    /// filesystem changing underneath does not refresh it.
    fn stat(&self) -> &Metadata;

    /// Full UTF-8 content; `None` on any read failure, memoized either way.
    fn content(&self) -> Option<&str>;

    fn exists(&self) -> bool;
    fn is_file(&self) -> bool;
    fn is_directory(&self) -> bool;
    fn is_symlink(&self) -> bool;
    fn is_socket(&self) -> bool;
    fn is_pipe(&self) -> bool;
    fn is_block_device(&self) -> bool;
    fn is_character_device(&self) -> bool;

    /// Symlink target, memoized; `None` unless the entry is a symlink.
    fn link_path(&self) -> Option<&Path>;

    /// Streaming SHA-256 of the file as lowercase hex; `None` on any failure.
    fn sha256(&self) -> Option<String>;
}

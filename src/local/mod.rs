//! Local backend: runs commands and inspects files on the machine the
//! inspection itself runs on.
//!
//! Composition:
//! - `cmd`: subprocess execution through the host shell
//! - `file`: lazily-stat'ing, memoizing file handles
//! - `label`: per-family security-label strategy
//!
//! One backend instance serves one inspection run. Handles and their memoized
//! metadata live exactly as long as the instance; nothing is persisted across
//! runs.

mod cmd;
mod file;
mod label;

pub use cmd::shell_quote;
pub use file::LocalFile;

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::backend::{Backend, FileResource};
use crate::constants::BACKEND_NAME;
use crate::types::{CommandResult, Os, Result};

use label::LabelProbe;

/// Opaque backend settings. The local backend needs none of them; the value
/// is carried so one configuration shape fits every backend (remote backends
/// read endpoints and credentials out of `options`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BackendConfig {
    #[serde(default)]
    pub options: serde_json::Value,
}

pub struct LocalBackend {
    config: BackendConfig,
    os: Os,
    files: RefCell<HashMap<String, Rc<LocalFile>>>,
}

impl LocalBackend {
    /// Registry name under which this backend is published.
    pub const NAME: &'static str = BACKEND_NAME;

    pub fn new(config: BackendConfig) -> Self {
        LocalBackend {
            config,
            os: Os::host(),
            files: RefCell::new(HashMap::new()),
        }
    }

    /// The opaque settings this backend was constructed with.
    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    /// Concretely-typed variant of [`Backend::file`]: one handle per exact
    /// path string, created on first request and cached for the backend's
    /// lifetime.
    pub fn local_file(&self, path: &str) -> Rc<LocalFile> {
        self.files
            .borrow_mut()
            .entry(path.to_string())
            .or_insert_with(|| {
                Rc::new(LocalFile::new(path, LabelProbe::for_family(self.os.family())))
            })
            .clone()
    }
}

impl Backend for LocalBackend {
    fn os(&self) -> &Os {
        &self.os
    }

    fn run_command(&self, command: &str) -> Result<CommandResult> {
        cmd::run(command)
    }

    fn file(&self, path: &str) -> Rc<dyn FileResource> {
        self.local_file(path)
    }
}

impl fmt::Display for LocalBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Local Command Runner")
    }
}

//! Security-label lookup, pluggable per OS family.
//!
//! Only the linux strategy does anything: it asks GNU stat for the SELinux
//! context of the exact path. Everything short of a clean, labeled answer
//! (family without a strategy, command failure, empty output, the "?"
//! placeholder) degrades to "no label".

use log::debug;

use crate::constants::LABEL_PLACEHOLDER;
use crate::types::{CommandResult, OsFamily};

use super::cmd::{self, shell_quote};

/// Strategy object selected once per backend from the family tag.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LabelProbe {
    enabled: bool,
}

impl LabelProbe {
    pub(crate) fn for_family(family: &OsFamily) -> Self {
        LabelProbe {
            enabled: matches!(family, OsFamily::Linux),
        }
    }

    /// Best-effort label for `path`; `None` is the common case.
    pub(crate) fn query(&self, path: &str) -> Option<String> {
        if !self.enabled {
            return None;
        }
        let line = format!("stat {} 2>/dev/null --printf '%C'", shell_quote(path));
        match cmd::run(&line) {
            Ok(res) => accept(&res),
            Err(err) => {
                debug!("label probe failed for {path}: {err}");
                None
            }
        }
    }
}

/// Acceptance rule for the probe's answer: exit 0, non-empty output, and not
/// the placeholder stat prints on unlabeled systems.
fn accept(res: &CommandResult) -> Option<String> {
    if res.success() && !res.stdout.is_empty() && res.stdout != LABEL_PLACEHOLDER {
        Some(res.stdout.trim().to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer(exit_status: i32, stdout: &str) -> CommandResult {
        CommandResult {
            stdout: stdout.to_string(),
            stderr: String::new(),
            exit_status,
        }
    }

    #[test]
    fn accepts_clean_label() {
        assert_eq!(
            accept(&answer(0, "system_u:object_r:etc_t:s0")),
            Some("system_u:object_r:etc_t:s0".to_string())
        );
    }

    #[test]
    fn trims_trailing_whitespace() {
        assert_eq!(accept(&answer(0, "user_u:r:t:s0\n")), Some("user_u:r:t:s0".to_string()));
    }

    #[test]
    fn rejects_nonzero_exit() {
        assert_eq!(accept(&answer(1, "user_u:r:t:s0")), None);
    }

    #[test]
    fn rejects_empty_and_placeholder_output() {
        assert_eq!(accept(&answer(0, "")), None);
        assert_eq!(accept(&answer(0, "?")), None);
    }

    #[test]
    fn probe_is_inert_off_linux() {
        let probe = LabelProbe::for_family(&OsFamily::Darwin);
        assert_eq!(probe.query("/etc"), None);
    }
}

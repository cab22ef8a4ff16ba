//! Subprocess execution through the host shell.
//!
//! Commands are handed to the platform shell verbatim; quoting correctness is
//! the caller's responsibility. Both output streams are drained fully into
//! memory before the exit status is read, so unbounded output grows memory
//! without limit and a hung child blocks the caller. Both are accepted
//! contract for an inspection run; there is no timeout at this layer.

use std::io;
use std::process::{Command, Stdio};

use log::debug;

use crate::types::{CommandResult, Error, ErrorKind, Result};

#[cfg(unix)]
const SHELL: (&str, &str) = ("sh", "-c");
#[cfg(windows)]
const SHELL: (&str, &str) = ("cmd", "/C");

/// Run `cmd` through the host shell and capture stdout, stderr, and the exit
/// status. A missing executable yields exit status 1 instead of an error.
pub(crate) fn run(cmd: &str) -> Result<CommandResult> {
    debug!("running command: {cmd}");
    execute(SHELL.0, &[SHELL.1, cmd])
}

fn execute(program: &str, args: &[&str]) -> Result<CommandResult> {
    let spawned = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn();

    let child = match spawned {
        Ok(child) => child,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!("executable not found: {program}");
            return Ok(CommandResult::not_found());
        }
        Err(err) => {
            return Err(Error {
                kind: ErrorKind::Spawn,
                msg: format!("spawn {program}: {err}"),
            });
        }
    };

    let output = child.wait_with_output().map_err(|err| Error {
        kind: ErrorKind::Io,
        msg: format!("collect output of {program}: {err}"),
    })?;

    Ok(CommandResult {
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        // A signal-terminated child reports no code; fold that into the
        // generic failure status.
        exit_status: output.status.code().unwrap_or(1),
    })
}

/// Quote `s` for safe interpolation into a shell command line.
pub fn shell_quote(s: &str) -> String {
    let mut quoted = String::with_capacity(s.len() + 2);
    quoted.push('\'');
    for ch in s.chars() {
        if ch == '\'' {
            quoted.push_str("'\\''");
        } else {
            quoted.push(ch);
        }
    }
    quoted.push('\'');
    quoted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_executable_is_contained() {
        let res = execute("hostprobe-no-such-binary", &[]).expect("contained");
        assert_eq!(res.exit_status, 1);
        assert!(res.stdout.is_empty());
        assert!(res.stderr.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn captures_both_streams_and_exit_status() {
        let res = run("echo out; echo err >&2; exit 3").expect("run");
        assert_eq!(res.stdout, "out\n");
        assert_eq!(res.stderr, "err\n");
        assert_eq!(res.exit_status, 3);
        assert!(!res.success());
    }

    #[cfg(unix)]
    #[test]
    fn unknown_command_through_the_shell_is_a_plain_failure() {
        let res = run("hostprobe-no-such-binary").expect("run");
        assert_ne!(res.exit_status, 0);
    }

    #[test]
    fn quotes_spaces_and_single_quotes() {
        assert_eq!(shell_quote("a b"), "'a b'");
        assert_eq!(shell_quote("it's"), "'it'\\''s'");
    }

    #[cfg(unix)]
    #[test]
    fn quoted_path_survives_the_shell() {
        let res = run(&format!("printf %s {}", shell_quote("a b'c"))).expect("run");
        assert_eq!(res.stdout, "a b'c");
        assert!(res.success());
    }
}

//! Helper process execution for settings readers (`gsettings`, `defaults`).
//!
//! Runs program + args (no shell) with a timeout and returns stdout.

use crate::error::{ProbeError, ProbeResult};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;

/// Upper bound for a single settings read.
pub const DEFAULT_COMMAND_TIMEOUT: Duration = Duration::from_secs(5);

/// Run `program` with `args` and return its stdout.
///
/// A non-zero exit (e.g. missing key or schema) is an error.
pub async fn read_command_output(
    program: &str,
    args: &[&str],
    limit: Duration,
) -> ProbeResult<String> {
    let child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .kill_on_drop(true)
        .spawn()
        .map_err(|source| ProbeError::Spawn {
            program: program.to_string(),
            source,
        })?;

    let output = timeout(limit, child.wait_with_output())
        .await
        .map_err(|_| ProbeError::Timeout {
            program: program.to_string(),
        })?
        .map_err(|source| ProbeError::Spawn {
            program: program.to_string(),
            source,
        })?;

    if !output.status.success() {
        return Err(ProbeError::CommandFailed {
            program: program.to_string(),
            code: output.status.code(),
        });
    }

    String::from_utf8(output.stdout).map_err(|e| ProbeError::InvalidOutput(e.to_string()))
}

/// Drop everything but ASCII letters and digits (quotes, whitespace, newlines).
pub fn alphanumeric_only(s: &str) -> String {
    s.chars().filter(|c| c.is_ascii_alphanumeric()).collect()
}

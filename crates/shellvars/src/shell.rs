// ABOUTME: Blocking bash invocation plumbing shared by the variable operations
// ABOUTME: Feeds a command sequence over stdin and enforces the stderr failure policy

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use shellvars_logging::debug;

use crate::error::{Result, ShellVarsError};

/// Escape a string for shell use
pub fn shell_escape(s: &str) -> String {
    // Use single quotes and escape any single quotes in the string
    format!("'{}'", s.replace('\'', "'\\''"))
}

/// Run `bash`, feeding `input` on stdin, and return its raw stdout.
///
/// With `clear_env` the child starts from an emptied inherited environment,
/// the equivalent of `env -i bash`. Anything the shell writes to stderr fails
/// the call regardless of exit status, so scripts that emit benign warnings
/// fail here too.
pub(crate) fn run_bash(script: &Path, input: &str, clear_env: bool) -> Result<Vec<u8>> {
    let mut command = Command::new("bash");
    if clear_env {
        command.env_clear();
    }
    command
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    debug!(clear_env, script = %script.display(), "Spawning bash session");

    let mut child = command.spawn()?;
    if let Some(mut stdin) = child.stdin.take() {
        // stdin drops at end of scope, closing the pipe so the shell sees EOF
        stdin.write_all(input.as_bytes())?;
    }
    let output = child.wait_with_output()?;

    if !output.stderr.is_empty() {
        return Err(ShellVarsError::ShellExecution {
            script: script.to_path_buf(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    Ok(output.stdout)
}

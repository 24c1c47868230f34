// ABOUTME: Error types for shell script variable extraction
// ABOUTME: Distinguishes missing scripts from shell execution failures

use std::path::PathBuf;

/// Error types for shell variable operations
#[derive(Debug, thiserror::Error)]
pub enum ShellVarsError {
    /// The script path did not reference an existing regular file.
    #[error("script does not exist: {}", .path.display())]
    ScriptNotFound { path: PathBuf },

    /// The shell wrote to its error stream while processing the script.
    /// Raised regardless of exit status; carries the raw stderr text.
    #[error("error processing script {}: {}", .script.display(), .stderr)]
    ShellExecution { script: PathBuf, stderr: String },

    /// Spawning or communicating with the shell failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ShellVarsError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_error_messages_carry_script_path() {
        let err = ShellVarsError::ScriptNotFound {
            path: Path::new("/no/such/script.sh").to_path_buf(),
        };
        assert_eq!(err.to_string(), "script does not exist: /no/such/script.sh");

        let err = ShellVarsError::ShellExecution {
            script: Path::new("/tmp/setup.sh").to_path_buf(),
            stderr: "line 3: boom\n".to_string(),
        };
        assert!(err.to_string().starts_with("error processing script /tmp/setup.sh:"));
        assert!(err.to_string().contains("boom"));
    }
}

use thiserror::Error;
use tokio::process::Command;

/// Failure to run the external tool or capture its output
#[derive(Debug, Error)]
pub enum RunError {
    /// Empty argv, nothing to spawn
    #[error("empty command line")]
    EmptyCommand,

    /// The process never started
    #[error("failed to launch {command}: {source}")]
    Launch {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The process ran and exited non-zero
    #[error("{command} exited with {status}: {stderr}")]
    Exited {
        command: String,
        status: std::process::ExitStatus,
        stderr: String,
    },

    /// The process wrote bytes that aren't UTF-8
    #[error("{command} produced non-UTF-8 output")]
    InvalidUtf8 { command: String },
}

/// Run `argv` to completion and capture stdout, trimmed of surrounding
/// whitespace.
///
/// The child inherits the environment, so the binary is found through
/// `$PATH`. Stderr is captured and reported when the exit status is
/// non-zero. No timeout is imposed here.
pub async fn run_capture(argv: &[String]) -> Result<String, RunError> {
    let (program, args) = match argv.split_first() {
        Some(parts) => parts,
        None => return Err(RunError::EmptyCommand),
    };

    tracing::debug!("running command: {}", argv.join(" "));

    let output = Command::new(program)
        .args(args)
        .output()
        .await
        .map_err(|source| RunError::Launch {
            command: program.clone(),
            source,
        })?;

    if !output.status.success() {
        return Err(RunError::Exited {
            command: program.clone(),
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    match String::from_utf8(output.stdout) {
        Ok(stdout) => Ok(stdout.trim().to_string()),
        Err(_) => Err(RunError::InvalidUtf8 {
            command: program.clone(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_captures_stdout() {
        let out = run_capture(&argv(&["echo", "hello"])).await.unwrap();
        assert_eq!(out, "hello");
    }

    #[tokio::test]
    async fn test_trims_surrounding_whitespace() {
        let out = run_capture(&argv(&["printf", "  spaced  \n\n"])).await.unwrap();
        assert_eq!(out, "spaced");
    }

    #[tokio::test]
    async fn test_nonzero_exit_reports_stderr() {
        let result = run_capture(&argv(&["sh", "-c", "echo boom >&2; exit 3"])).await;
        match result {
            Err(RunError::Exited { status, stderr, .. }) => {
                assert_eq!(status.code(), Some(3));
                assert_eq!(stderr, "boom");
            }
            other => panic!("expected Exited, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_binary_is_launch_error() {
        let result = run_capture(&argv(&["definitely-not-installed-anywhere"])).await;
        assert!(matches!(result, Err(RunError::Launch { .. })));
    }

    #[tokio::test]
    async fn test_empty_argv() {
        assert!(matches!(run_capture(&[]).await, Err(RunError::EmptyCommand)));
    }
}

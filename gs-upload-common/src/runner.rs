use crate::{Result, UploadError};
use async_trait::async_trait;
use std::ffi::OsString;
use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, trace};

/// Runs an external command to completion.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(&self, program: &Path, args: &[OsString]) -> Result<()>;
}

/// Spawns the command with tokio and waits for it to exit.
///
/// Stdout goes straight to the terminal. Stderr is captured and traced, and
/// becomes part of [`UploadError::CommandFailed`] on a non-zero exit.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioCommandRunner;

#[async_trait]
impl CommandRunner for TokioCommandRunner {
    async fn run(&self, program: &Path, args: &[OsString]) -> Result<()> {
        debug!("Running {} {:?}", program.display(), args);

        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| {
                UploadError::ProcessError(format!("failed to run {}: {}", program.display(), e))
            })?;

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        for line in stderr.lines() {
            trace!("{line}");
        }

        if !output.status.success() {
            return Err(UploadError::CommandFailed {
                status: output.status.to_string(),
                stderr,
            });
        }

        Ok(())
    }
}

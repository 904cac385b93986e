//! The copy collaborator: placing one file inside a destination folder.

use std::path::Path;
use std::process::Command;

use thiserror::Error;

/// Errors from a single copy invocation.
///
/// These never abort a distribution run; each one is contained to its
/// file/folder pair and collected into the run report.
#[derive(Debug, Error)]
pub enum CopyError {
    /// The copy command could not be started.
    #[error("failed to start copy command: {source}")]
    Spawn {
        #[source]
        source: std::io::Error,
    },

    /// The copy command ran and exited unsuccessfully.
    #[error("copy command exited with {status}: {output}")]
    CommandFailed {
        status: std::process::ExitStatus,
        output: String,
    },

    /// No copy command is known for this platform.
    #[error("no copy command available on this platform")]
    UnsupportedPlatform,
}

/// Places a copy of a source file inside a destination directory, keeping
/// the file name.
pub trait Copier {
    /// Copy `source` into `dest_dir`, blocking until done.
    fn copy(&self, source: &Path, dest_dir: &Path) -> Result<(), CopyError>;
}

impl<C: Copier + ?Sized> Copier for &C {
    fn copy(&self, source: &Path, dest_dir: &Path) -> Result<(), CopyError> {
        (**self).copy(source, dest_dir)
    }
}

/// Copier backed by the platform copy command: `cp` on Unix, `cmd /C copy`
/// on Windows. Blocks until the child process exits.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCopier;

impl SystemCopier {
    /// Create a new system copier.
    pub fn new() -> Self {
        Self
    }
}

impl Copier for SystemCopier {
    fn copy(&self, source: &Path, dest_dir: &Path) -> Result<(), CopyError> {
        let mut command = copy_command(source, dest_dir)?;
        let output = command
            .output()
            .map_err(|e| CopyError::Spawn { source: e })?;
        if output.status.success() {
            return Ok(());
        }

        // Failure text is the child's combined stdout and stderr.
        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));
        Err(CopyError::CommandFailed {
            status: output.status,
            output: combined.trim_end().to_string(),
        })
    }
}

#[cfg(unix)]
fn copy_command(source: &Path, dest_dir: &Path) -> Result<Command, CopyError> {
    let mut command = Command::new("cp");
    command.arg(source).arg(dest_dir);
    Ok(command)
}

#[cfg(windows)]
fn copy_command(source: &Path, dest_dir: &Path) -> Result<Command, CopyError> {
    let mut command = Command::new("cmd");
    command.arg("/C").arg("copy").arg(source).arg(dest_dir);
    Ok(command)
}

#[cfg(not(any(unix, windows)))]
fn copy_command(_source: &Path, _dest_dir: &Path) -> Result<Command, CopyError> {
    Err(CopyError::UnsupportedPlatform)
}

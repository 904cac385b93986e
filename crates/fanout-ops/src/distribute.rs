//! Round-robin assignment of source files to destination folders.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::copy::Copier;

/// Errors detected before any copy is attempted.
#[derive(Debug, Error)]
pub enum DistributeError {
    /// The assignment cycle needs at least two source files.
    #[error("need at least 2 source files to distribute, found {count}")]
    TooFewFiles { count: usize },
}

/// One planned copy: a source file into a destination folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    /// File to copy.
    pub file: PathBuf,
    /// Folder the file is copied into.
    pub folder: PathBuf,
}

/// A copy that failed, kept in the report without stopping the run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CopyFailure {
    /// File that was being copied.
    pub file: PathBuf,
    /// Folder it was being copied into.
    pub folder: PathBuf,
    /// Human-readable failure message.
    pub message: String,
}

/// Outcome of a distribution run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DistributionReport {
    /// Number of file/folder pairs attempted.
    pub attempted: usize,
    /// Copies that completed.
    pub succeeded: usize,
    /// Copies that failed.
    pub failed: usize,
    /// Bytes copied, taken from source metadata.
    pub bytes_copied: u64,
    /// One entry per failed pair.
    pub failures: Vec<CopyFailure>,
}

impl DistributionReport {
    /// Check if every attempted copy completed.
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

/// Build the folder-to-file assignment list.
///
/// Folder `i` receives `files[i % (files.len() - 1)]`. The cycle wraps one
/// short of the file count, so the final file in the list is never
/// assigned.
pub fn plan(files: &[PathBuf], folders: &[PathBuf]) -> Result<Vec<Assignment>, DistributeError> {
    if files.len() < 2 {
        return Err(DistributeError::TooFewFiles { count: files.len() });
    }

    let cycle = files.len() - 1;
    Ok(folders
        .iter()
        .enumerate()
        .map(|(index, folder)| Assignment {
            file: files[index % cycle].clone(),
            folder: folder.clone(),
        })
        .collect())
}

/// Executes a plan with a copier, one pair at a time.
#[derive(Debug)]
pub struct Distributor<C> {
    copier: C,
}

impl<C: Copier> Distributor<C> {
    /// Create a distributor that copies through `copier`.
    pub fn new(copier: C) -> Self {
        Self { copier }
    }

    /// Run every assignment in order.
    ///
    /// A failed pair is recorded in the report and the run continues with
    /// the next pair; nothing here unwinds.
    pub fn run(&self, assignments: &[Assignment]) -> DistributionReport {
        let mut report = DistributionReport::default();

        for assignment in assignments {
            report.attempted += 1;
            match self.copier.copy(&assignment.file, &assignment.folder) {
                Ok(()) => {
                    report.succeeded += 1;
                    report.bytes_copied += file_size(&assignment.file);
                }
                Err(err) => {
                    tracing::warn!(
                        file = %assignment.file.display(),
                        folder = %assignment.folder.display(),
                        "copy failed: {err}"
                    );
                    report.failed += 1;
                    report.failures.push(CopyFailure {
                        file: assignment.file.clone(),
                        folder: assignment.folder.clone(),
                        message: err.to_string(),
                    });
                }
            }
        }

        report
    }
}

fn file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}

//! Run summary destinations.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::SummaryConfig;
use crate::report::summary::RunSummary;

/// Error type for summary emission.
#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("failed to write summary to stdout: {0}")]
    Stdout(#[source] io::Error),

    #[error("failed to append summary to {path}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Where the run summary goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummarySink {
    Stdout,
    File(PathBuf),
}

impl SummarySink {
    /// Resolve the destination from configuration.
    pub fn from_config(config: &SummaryConfig) -> Self {
        match &config.file {
            Some(path) => SummarySink::File(path.clone()),
            None => SummarySink::Stdout,
        }
    }

    /// Emit the summary. Called exactly once per run.
    pub fn emit(&self, summary: &RunSummary) -> Result<(), SummaryError> {
        match self {
            SummarySink::Stdout => {
                let mut stdout = io::stdout().lock();
                stdout
                    .write_all(summary.render().as_bytes())
                    .and_then(|()| stdout.flush())
                    .map_err(SummaryError::Stdout)
            }
            SummarySink::File(path) => {
                append_summary(path, summary).map_err(|source| SummaryError::File {
                    path: path.clone(),
                    source,
                })
            }
        }
    }
}

fn append_summary(path: &Path, summary: &RunSummary) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;

    // Consecutive runs accumulate in one file; keep them separated.
    if file.metadata()?.len() > 0 {
        writeln!(file)?;
    }

    file.write_all(summary.render().as_bytes())
}

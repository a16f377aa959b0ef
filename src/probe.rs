//! Module for determining whether the audio capture process is running.
//! Each poll is an independent process-table lookup; nothing is cached
//! between calls.
//!
//! The lookup shells out to `pgrep -x`, so a stuck or missing utility must
//! never wedge the caller. Every search is bounded by [`SEARCH_TIMEOUT`]
//! and every failure collapses to [`Status::Unknown`] at the poll boundary.

use std::process::Stdio;
use std::time::Duration;

use thiserror::Error;
use tokio::process::Command;
use tokio::runtime::Runtime;
use tokio::time::timeout;
use tracing::debug;

use crate::Status;

/// Executable name whose presence means a recording is in progress.
pub const TARGET_PROCESS: &str = "pw-record";

/// Utility used to search the process table.
const PGREP_UTILITY: &str = "pgrep";

/// Exit status `pgrep` uses for "no processes matched".
const NO_MATCH_EXIT: i32 = 1;

/// Upper bound on a single process-table search.
pub const SEARCH_TIMEOUT: Duration = Duration::from_secs(1);

#[derive(Debug, Error)]
pub enum SearchError {
    /// The search utility could not be spawned
    #[error("failed to spawn {utility}: {source}")]
    Spawn {
        utility: String,
        source: std::io::Error,
    },
    /// The search did not complete in time
    #[error("search timed out after {0:?}")]
    Timeout(Duration),
    /// The search utility exited abnormally
    #[error("{utility} exited with unexpected status: {status}")]
    Exit {
        utility: String,
        status: std::process::ExitStatus,
    },
}

/// A process-table lookup by exact executable name.
pub trait ProcessSearch {
    /// Returns whether a process with exactly the given executable name is
    /// currently running.
    fn find(&self, name: &str) -> Result<bool, SearchError>;
}

/// Searches the process table by spawning `pgrep -x <name>` with a bounded
/// wait. The child is killed if the deadline passes.
pub struct PgrepSearch {
    utility: String,
    timeout: Duration,
    runtime: Runtime,
}

impl PgrepSearch {
    /// Create a new search backed by the system `pgrep`.
    pub fn new() -> anyhow::Result<Self> {
        Self::with_utility(PGREP_UTILITY.to_owned(), SEARCH_TIMEOUT)
    }

    fn with_utility(utility: String, timeout: Duration) -> anyhow::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()?;

        Ok(Self {
            utility,
            timeout,
            runtime,
        })
    }
}

impl ProcessSearch for PgrepSearch {
    fn find(&self, name: &str) -> Result<bool, SearchError> {
        self.runtime.block_on(async {
            let status = timeout(
                self.timeout,
                Command::new(&self.utility)
                    .arg("-x")
                    .arg(name)
                    .stdin(Stdio::null())
                    .stdout(Stdio::null())
                    .stderr(Stdio::null())
                    .kill_on_drop(true)
                    .status(),
            )
            .await
            .map_err(|_| SearchError::Timeout(self.timeout))?
            .map_err(|source| SearchError::Spawn {
                utility: self.utility.clone(),
                source,
            })?;

            if status.success() {
                Ok(true)
            } else if status.code() == Some(NO_MATCH_EXIT) {
                Ok(false)
            } else {
                Err(SearchError::Exit {
                    utility: self.utility.clone(),
                    status,
                })
            }
        })
    }
}

/// Reports whether an audio recording is in progress by checking for the
/// capture process. Stateless: each poll stands on its own.
pub struct RecordingProbe<S: ProcessSearch> {
    search: S,
}

impl RecordingProbe<PgrepSearch> {
    /// Create a probe backed by the system `pgrep`.
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self::with_search(PgrepSearch::new()?))
    }
}

impl<S: ProcessSearch> RecordingProbe<S> {
    /// Create a probe over a specific search implementation.
    pub fn with_search(search: S) -> Self {
        Self { search }
    }

    /// Check whether the capture process is running right now.
    ///
    /// Never fails outwardly: a search that errors or times out yields
    /// [`Status::Unknown`].
    pub fn poll(&self) -> Status {
        match self.search.find(TARGET_PROCESS) {
            Ok(true) => Status::Recording,
            Ok(false) => Status::Idle,
            Err(err) => {
                debug!(error = %err, "process search failed");
                Status::Unknown
            }
        }
    }
}

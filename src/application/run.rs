use std::fmt;
use std::sync::Arc;

use chrono::Utc;
use tokio::time::Instant;
use tracing::{debug, info};

use super::dispatch::dispatch;
use super::ports::RunRepository;
use crate::domain::{RunOptions, RunParameters};
use crate::error::{AppError, AppResult};
use crate::http::RequestExecutor;
use crate::metrics::RunReport;
use crate::shutdown::ShutdownSignal;

/// Lifecycle of a single run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    Validating,
    Dispatching,
    Finalizing,
    Complete,
    Failed,
}

impl RunPhase {
    /// Whether `next` is a legal successor of `self`.
    ///
    /// `Failed` is only reachable before dispatch starts; once units are in
    /// flight the run always finalizes.
    #[must_use]
    pub const fn can_advance_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Validating, Self::Dispatching | Self::Failed)
                | (Self::Dispatching, Self::Finalizing)
                | (Self::Finalizing, Self::Complete)
        )
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Complete | Self::Failed)
    }
}

impl fmt::Display for RunPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Validating => "validating",
            Self::Dispatching => "dispatching",
            Self::Finalizing => "finalizing",
            Self::Complete => "complete",
            Self::Failed => "failed",
        };
        f.write_str(label)
    }
}

/// Caller input for one run, before validation.
#[derive(Debug, Clone)]
pub struct RunCommand {
    url: String,
    options: RunOptions,
}

impl RunCommand {
    #[must_use]
    pub fn new(url: impl Into<String>, options: RunOptions) -> Self {
        Self {
            url: url.into(),
            options,
        }
    }
}

struct PhaseTracker {
    phase: RunPhase,
}

impl PhaseTracker {
    fn start() -> Self {
        debug!("Run phase: {}", RunPhase::Validating);
        Self {
            phase: RunPhase::Validating,
        }
    }

    fn advance(&mut self, next: RunPhase) {
        debug_assert!(
            self.phase.can_advance_to(next),
            "illegal run phase transition {} -> {}",
            self.phase,
            next
        );
        debug!("Run phase: {} -> {}", self.phase, next);
        self.phase = next;
    }
}

/// Runs one fixed-volume batch to completion.
///
/// # Errors
///
/// Returns a validation error when the URL, request count, or concurrency is
/// invalid, and a repository error when the run cannot be saved. In both
/// cases no request is issued. Once dispatch begins the run always
/// completes.
pub async fn execute<E, R>(
    command: RunCommand,
    executor: Arc<E>,
    repository: &R,
    shutdown: &ShutdownSignal,
) -> AppResult<RunReport>
where
    E: RequestExecutor + ?Sized + 'static,
    R: RunRepository + ?Sized,
{
    let mut tracker = PhaseTracker::start();

    let parameters = match RunParameters::construct(&command.url, &command.options) {
        Ok(parameters) => parameters,
        Err(err) => {
            tracker.advance(RunPhase::Failed);
            return Err(AppError::validation(err));
        }
    };

    if let Err(err) = repository.save(&parameters).await {
        tracker.advance(RunPhase::Failed);
        return Err(AppError::repository(err));
    }

    tracker.advance(RunPhase::Dispatching);
    info!(
        id = %parameters.id(),
        url = %parameters.url(),
        requests = parameters.requests(),
        concurrency = parameters.concurrency(),
        "Starting run"
    );

    let timestamp_start = Utc::now();
    let started = Instant::now();
    let output = dispatch(&parameters, executor, shutdown).await;
    let elapsed = started.elapsed();
    let timestamp_end = Utc::now();

    tracker.advance(RunPhase::Finalizing);
    let report = RunReport {
        id: parameters.id().to_owned(),
        url: parameters.url().to_owned(),
        requests: parameters.requests(),
        concurrency: parameters.concurrency(),
        timestamp_start,
        timestamp_end,
        test_duration_in_seconds: elapsed.as_secs(),
        elapsed,
        data: output.details,
        report: output.table.finalize(),
    };
    tracker.advance(RunPhase::Complete);

    info!(
        id = %report.id,
        elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
        "Run complete"
    );
    Ok(report)
}

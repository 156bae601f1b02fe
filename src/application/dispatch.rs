use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use chrono::Utc;
use futures_util::FutureExt;
use tokio::sync::Semaphore;
use tokio::task::{JoinError, JoinSet};
use tracing::{debug, warn};

use crate::domain::RunParameters;
use crate::http::RequestExecutor;
use crate::metrics::{AggregationTable, DetailLog, RequestOutcome};
use crate::shutdown::ShutdownSignal;

/// State handed back once the completion barrier has opened.
#[derive(Debug)]
pub struct DispatchOutput {
    pub table: AggregationTable,
    /// Outcomes in append order. Empty unless detail capture was requested.
    pub details: Vec<RequestOutcome>,
}

/// Upper bound on detail entries reserved up front; the log grows past it
/// on demand.
const DETAIL_PREALLOC_LIMIT: usize = 4_096;

/// Issues exactly `parameters.requests()` units with at most
/// `parameters.concurrency()` executing at once, and waits for all of them.
///
/// A slot is acquired before each unit is spawned and released when the
/// unit finishes, whatever its outcome. Admission is FIFO. Finished units
/// are reaped while admitting, so live task state is bounded by the
/// concurrency ceiling rather than the request count. Units that panic are
/// recorded as failures so the table always sees one outcome per unit.
pub async fn dispatch<E>(
    parameters: &RunParameters,
    executor: Arc<E>,
    shutdown: &ShutdownSignal,
) -> DispatchOutput
where
    E: RequestExecutor + ?Sized + 'static,
{
    let requests = parameters.requests();
    let slots = Arc::new(Semaphore::new(
        parameters.concurrency().min(Semaphore::MAX_PERMITS),
    ));
    let table = Arc::new(AggregationTable::new());
    let details = parameters.show_data().then(|| {
        Arc::new(DetailLog::with_capacity(
            requests.min(DETAIL_PREALLOC_LIMIT),
        ))
    });
    let target = Arc::new(parameters.target().clone());

    let mut units = JoinSet::new();
    for unit in 0..requests {
        let permit = match Arc::clone(&slots).acquire_owned().await {
            Ok(permit) => Some(permit),
            Err(err) => {
                warn!("Admission pool closed before unit {}: {}", unit, err);
                None
            }
        };

        while let Some(result) = units.try_join_next() {
            reap(result, &table, details.as_deref());
        }

        let dispatched_at = Utc::now();
        let executor = Arc::clone(&executor);
        let table = Arc::clone(&table);
        let details = details.clone();
        let target = Arc::clone(&target);
        let shutdown = shutdown.clone();

        units.spawn(async move {
            let outcome = match AssertUnwindSafe(executor.execute(&target, &shutdown))
                .catch_unwind()
                .await
            {
                Ok(outcome) => outcome,
                Err(_panic) => {
                    warn!("Request unit {} panicked; recording a failure", unit);
                    RequestOutcome::failed(dispatched_at)
                }
            };
            table.record_outcome(&outcome);
            if let Some(details) = details {
                details.append(outcome);
            }
            drop(permit);
        });
    }
    debug!("All {} units admitted; awaiting completion", requests);

    while let Some(result) = units.join_next().await {
        reap(result, &table, details.as_deref());
    }

    let table = Arc::try_unwrap(table).unwrap_or_else(|shared| shared.detached());
    let details = details
        .map(|log| {
            Arc::try_unwrap(log).map_or_else(|shared| shared.snapshot(), DetailLog::into_entries)
        })
        .unwrap_or_default();

    DispatchOutput { table, details }
}

/// A unit that never reported (its task was torn down) still counts once.
fn reap(result: Result<(), JoinError>, table: &AggregationTable, details: Option<&DetailLog>) {
    if let Err(err) = result {
        warn!("Request unit did not complete: {}", err);
        let outcome = RequestOutcome::failed(Utc::now());
        table.record_outcome(&outcome);
        if let Some(details) = details {
            details.append(outcome);
        }
    }
}

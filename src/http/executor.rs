use async_trait::async_trait;
use chrono::Utc;
use futures_util::StreamExt;
use reqwest::{Client, Url};
use tokio::time::Instant;
use tracing::debug;

use crate::error::AppResult;
use crate::metrics::RequestOutcome;
use crate::shutdown::ShutdownSignal;

use super::client::{ClientSettings, build_client};

/// Performs one request against the target and reports its outcome.
///
/// Implementations must not fail: transport errors and cancellation are
/// folded into [`RequestOutcome::failed`]. Exactly one attempt is made per
/// call.
#[async_trait]
pub trait RequestExecutor: Send + Sync {
    async fn execute(&self, target: &Url, shutdown: &ShutdownSignal) -> RequestOutcome;
}

/// [`RequestExecutor`] backed by a shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpExecutor {
    client: Client,
}

impl HttpExecutor {
    #[must_use]
    pub const fn new(client: Client) -> Self {
        Self { client }
    }

    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be built.
    pub fn from_settings(settings: &ClientSettings) -> AppResult<Self> {
        Ok(Self::new(build_client(settings)?))
    }
}

#[async_trait]
impl RequestExecutor for HttpExecutor {
    async fn execute(&self, target: &Url, shutdown: &ShutdownSignal) -> RequestOutcome {
        let started_at = Utc::now();
        if shutdown.is_cancelled() {
            return RequestOutcome::failed(started_at);
        }

        let mut shutdown = shutdown.clone();
        let start = Instant::now();
        let result = tokio::select! {
            () = shutdown.cancelled() => {
                debug!("Request to {} cancelled", target);
                return RequestOutcome::failed(started_at);
            }
            result = self.client.get(target.clone()).send() => result,
        };

        match result {
            Ok(response) => {
                let elapsed = start.elapsed();
                let finished_at = Utc::now();
                let status = response.status().as_u16();
                tokio::select! {
                    () = shutdown.cancelled() => {}
                    drained = drain_response_body(response) => {
                        if let Err(err) = drained {
                            debug!("Failed to read response body: {}", err);
                        }
                    }
                }
                RequestOutcome::completed(status, elapsed, started_at, finished_at)
            }
            Err(err) => {
                debug!("Request failed: {}", err);
                RequestOutcome::failed(started_at)
            }
        }
    }
}

async fn drain_response_body(response: reqwest::Response) -> Result<u64, reqwest::Error> {
    let mut stream = response.bytes_stream();
    let mut total_bytes: u64 = 0;
    while let Some(chunk) = stream.next().await {
        let bytes = chunk?;
        total_bytes = total_bytes.saturating_add(u64::try_from(bytes.len()).unwrap_or(u64::MAX));
    }
    Ok(total_bytes)
}

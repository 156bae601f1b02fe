use std::time::Duration;

use reqwest::Client;

use crate::args::DEFAULT_USER_AGENT;
use crate::error::{AppError, AppResult, HttpError};

/// Client options that survive into the request executor.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClientSettings {
    /// Per-request deadline. `None` leaves requests unbounded.
    pub request_timeout: Option<Duration>,
}

/// Builds the shared HTTP client.
///
/// # Errors
///
/// Returns an error when the TLS backend or client cannot be initialised.
pub fn build_client(settings: &ClientSettings) -> AppResult<Client> {
    let mut builder = Client::builder().user_agent(DEFAULT_USER_AGENT);
    if let Some(timeout) = settings.request_timeout {
        builder = builder.timeout(timeout);
    }
    builder.build().map_err(|err| {
        tracing::error!("Failed to build HTTP client: {}", err);
        AppError::http(HttpError::BuildClientFailed { source: err })
    })
}

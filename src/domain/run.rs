use url::Url;
use uuid::Uuid;

use crate::error::ValidationError;

/// Request count used when the caller leaves it unspecified.
pub const DEFAULT_REQUESTS: usize = 100;
/// Concurrency ceiling used when the caller leaves it unspecified.
pub const DEFAULT_CONCURRENCY: usize = 10;

/// Raw, unvalidated run inputs as they arrive from the CLI or config file.
///
/// Counts are signed so that negative input reaches validation instead of
/// being rejected by the argument parser with a generic message.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub requests: Option<i64>,
    pub concurrency: Option<i64>,
    pub show_data: bool,
}

/// Immutable parameters of a single run.
#[derive(Debug, Clone)]
pub struct RunParameters {
    id: String,
    url: String,
    target: Url,
    requests: usize,
    concurrency: usize,
    show_data: bool,
}

impl RunParameters {
    /// Validates raw inputs and builds the run parameters.
    ///
    /// Unspecified counts fall back to [`DEFAULT_REQUESTS`] and
    /// [`DEFAULT_CONCURRENCY`]; the concurrency ceiling is clamped to the
    /// request count.
    ///
    /// # Errors
    ///
    /// Returns the first failing rule, checked in order: URL, requests,
    /// concurrency.
    pub fn construct(url: &str, options: &RunOptions) -> Result<Self, ValidationError> {
        let target = parse_target(url).ok_or(ValidationError::InvalidUrl)?;
        let requests = resolve_count(options.requests, DEFAULT_REQUESTS)
            .ok_or(ValidationError::RequestsNotPositive)?;
        let concurrency = resolve_count(options.concurrency, DEFAULT_CONCURRENCY)
            .ok_or(ValidationError::ConcurrencyNotPositive)?;

        Ok(Self {
            id: Uuid::new_v4().to_string(),
            url: url.to_owned(),
            target,
            requests,
            concurrency: concurrency.min(requests),
            show_data: options.show_data,
        })
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The URL exactly as supplied by the caller.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub const fn target(&self) -> &Url {
        &self.target
    }

    #[must_use]
    pub const fn requests(&self) -> usize {
        self.requests
    }

    /// Effective concurrency ceiling, already clamped to `requests`.
    #[must_use]
    pub const fn concurrency(&self) -> usize {
        self.concurrency
    }

    #[must_use]
    pub const fn show_data(&self) -> bool {
        self.show_data
    }
}

/// Reports whether `value` is an absolute http(s) URL with a non-empty host.
#[must_use]
pub fn is_valid_url(value: &str) -> bool {
    parse_target(value).is_some()
}

fn parse_target(value: &str) -> Option<Url> {
    let parsed = Url::parse(value).ok()?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return None;
    }
    match parsed.host_str() {
        Some(host) if !host.is_empty() => Some(parsed),
        Some(_) | None => None,
    }
}

fn resolve_count(value: Option<i64>, default: usize) -> Option<usize> {
    match value {
        None => Some(default),
        Some(count) if count > 0 => Some(usize::try_from(count).unwrap_or(usize::MAX)),
        Some(_) => None,
    }
}

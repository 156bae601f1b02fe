pub(crate) const DEFAULT_USER_AGENT: &str = concat!("stresstest/", env!("CARGO_PKG_VERSION"));

/// Default config filenames checked when `--config` is not given.
pub(crate) const DEFAULT_CONFIG_FILES: [&str; 2] = ["stresstest.toml", "stresstest.json"];

// Signed so that negative input reaches run-parameter validation.
pub(crate) const DEFAULT_REQUESTS_ARG: i64 = 100;
pub(crate) const DEFAULT_CONCURRENCY_ARG: i64 = 10;

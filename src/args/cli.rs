use std::time::Duration;

use clap::Parser;

use super::defaults::{DEFAULT_CONCURRENCY_ARG, DEFAULT_REQUESTS_ARG};
use super::parsers::parse_duration_arg;
use crate::domain::RunOptions;
use crate::http::ClientSettings;

#[derive(Debug, Parser, Clone)]
#[clap(
    name = "stresstest",
    version,
    about = "Fire a fixed number of HTTP GET requests at a URL under a concurrency limit and report latency per status code."
)]
pub struct TesterArgs {
    /// Target URL (http:// or https://)
    #[arg(long, short)]
    pub url: Option<String>,

    /// Total number of requests to issue
    #[arg(
        long,
        short,
        default_value_t = DEFAULT_REQUESTS_ARG,
        allow_negative_numbers = true
    )]
    pub requests: i64,

    /// Maximum number of requests in flight (clamped to --requests)
    #[arg(
        long,
        short,
        default_value_t = DEFAULT_CONCURRENCY_ARG,
        allow_negative_numbers = true
    )]
    pub concurrency: i64,

    /// Keep per-request data in the report
    #[arg(long = "showdata", short = 's', alias = "show-data")]
    pub show_data: bool,

    /// Write the report to <OUTPUT>.json and <OUTPUT>.md
    #[arg(long, short)]
    pub output: Option<String>,

    /// Per-request timeout (supports ms/s/m/h). Unbounded when omitted.
    #[arg(long, value_parser = parse_duration_arg)]
    pub timeout: Option<Duration>,

    /// Path to config file (TOML/JSON). Defaults to ./stresstest.toml or ./stresstest.json if present.
    #[arg(long)]
    pub config: Option<String>,

    /// Enable verbose logging (sets log level to debug unless overridden by STRESSTEST_LOG/RUST_LOG)
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Disable color output (also honoured via NO_COLOR)
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Skip the terminal report
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

impl TesterArgs {
    #[must_use]
    pub const fn run_options(&self) -> RunOptions {
        RunOptions {
            requests: Some(self.requests),
            concurrency: Some(self.concurrency),
            show_data: self.show_data,
        }
    }

    #[must_use]
    pub const fn client_settings(&self) -> ClientSettings {
        ClientSettings {
            request_timeout: self.timeout,
        }
    }

    /// Color is off when `--no-color` is set or `NO_COLOR` is present.
    #[must_use]
    pub fn color_disabled(&self) -> bool {
        self.no_color || std::env::var_os("NO_COLOR").is_some_and(|value| !value.is_empty())
    }
}

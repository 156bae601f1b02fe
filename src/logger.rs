use tracing_subscriber::{EnvFilter, FmtSubscriber};

const LOG_ENV_VARS: [&str; 2] = ["STRESSTEST_LOG", "RUST_LOG"];

fn default_directive(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}

/// Picks the first configured directive, falling back to the verbosity
/// default when none is set or the value does not parse.
fn select_filter<F>(verbose: bool, lookup: F) -> EnvFilter
where
    F: Fn(&str) -> Option<String>,
{
    LOG_ENV_VARS
        .iter()
        .find_map(|name| lookup(name))
        .and_then(|value| EnvFilter::try_new(value).ok())
        .unwrap_or_else(|| EnvFilter::new(default_directive(verbose)))
}

/// Installs the global subscriber. Logs go to stderr so stdout carries only
/// the report.
pub fn init_logging(verbose: bool, no_color: bool) {
    let filter = select_filter(verbose, |name| std::env::var(name).ok());

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set global default subscriber: {}", err);
    }
}

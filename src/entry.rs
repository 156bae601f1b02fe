use std::ffi::OsString;
use std::path::Path;
use std::sync::Arc;

use clap::{ArgMatches, CommandFactory, FromArgMatches};

use crate::adapters::NoopRepository;
use crate::application::{self, RunCommand};
use crate::args::{DEFAULT_CONFIG_FILES, TesterArgs};
use crate::error::{AppError, AppResult, ValidationError};
use crate::http::HttpExecutor;
use crate::shutdown_handlers::{setup_signal_shutdown_handler, shutdown_channel};
use crate::sinks;

pub(crate) fn run() -> AppResult<()> {
    let (mut args, matches) = match parse_args()? {
        Some(parsed) => parsed,
        None => return Ok(()),
    };

    // Config may set verbose/no_color, so it is merged before logging starts.
    apply_file_config(&mut args, &matches)?;
    crate::logger::init_logging(args.verbose, args.color_disabled());

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run_async(args))
}

fn parse_args() -> AppResult<Option<(TesterArgs, ArgMatches)>> {
    let mut cmd = TesterArgs::command();
    let raw_args: Vec<OsString> = std::env::args_os().collect();

    if should_show_help(&raw_args) {
        cmd.print_help()?;
        println!();
        return Ok(None);
    }

    let matches = cmd.get_matches_from(raw_args);
    let args = TesterArgs::from_arg_matches(&matches)?;

    Ok(Some((args, matches)))
}

fn should_show_help(raw_args: &[OsString]) -> bool {
    let treat_as_empty =
        matches!(raw_args, [] | [_]) || matches!(raw_args, [_, second] if second == "--");
    if !treat_as_empty {
        return false;
    }

    !has_default_config()
}

fn has_default_config() -> bool {
    DEFAULT_CONFIG_FILES
        .iter()
        .any(|path| Path::new(path).exists())
}

fn apply_file_config(args: &mut TesterArgs, matches: &ArgMatches) -> AppResult<()> {
    if let Some(config) = crate::config::load_config(args.config.as_deref())? {
        crate::config::apply_config(args, matches, &config)?;
    }
    Ok(())
}

async fn run_async(args: TesterArgs) -> AppResult<()> {
    let url = args.url.clone().ok_or_else(|| {
        tracing::error!("Missing URL (set --url or provide in config).");
        AppError::validation(ValidationError::MissingUrl)
    })?;

    let executor = Arc::new(HttpExecutor::from_settings(&args.client_settings())?);
    let (shutdown_tx, shutdown) = shutdown_channel();
    let signal_handle = setup_signal_shutdown_handler(&shutdown_tx);

    let outcome = application::execute(
        RunCommand::new(url, args.run_options()),
        executor,
        &NoopRepository,
        &shutdown,
    )
    .await;
    signal_handle.abort();
    let report = outcome?;

    if !args.quiet {
        sinks::print_report(&report, args.color_disabled())?;
    }

    if let Some(output) = args.output.as_deref() {
        // Failures are logged by the exporter and never change the exit code.
        let exported = sinks::export_report(&report, output).await;
        if !exported.is_complete() {
            tracing::debug!("Report export finished with errors");
        }
    }

    Ok(())
}

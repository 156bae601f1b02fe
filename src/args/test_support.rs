use clap::{CommandFactory, FromArgMatches, Parser};

use crate::error::{AppError, AppResult};

use super::TesterArgs;

pub(crate) fn parse_test_args<I, T>(args: I) -> AppResult<TesterArgs>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    TesterArgs::try_parse_from(args).map_err(AppError::from)
}

pub(crate) fn parse_test_matches<I, T>(args: I) -> AppResult<(TesterArgs, clap::ArgMatches)>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let matches = TesterArgs::command().try_get_matches_from(args)?;
    let args = TesterArgs::from_arg_matches(&matches)?;
    Ok((args, matches))
}

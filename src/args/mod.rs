//! CLI argument types and parsing helpers.
mod cli;
mod defaults;
pub(crate) mod parsers;

#[cfg(test)]
pub(crate) mod test_support;

pub use cli::TesterArgs;

pub(crate) use defaults::{
    DEFAULT_CONCURRENCY_ARG, DEFAULT_CONFIG_FILES, DEFAULT_REQUESTS_ARG, DEFAULT_USER_AGENT,
};

//! Run parameters and their validation rules.
pub mod run;

#[cfg(test)]
mod tests;

pub use run::{DEFAULT_CONCURRENCY, DEFAULT_REQUESTS, RunOptions, RunParameters, is_valid_url};

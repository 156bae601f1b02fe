//! HTTP client construction and single-request execution.
mod client;
mod executor;

#[cfg(test)]
pub(crate) mod test_server;

pub use client::{ClientSettings, build_client};
pub use executor::{HttpExecutor, RequestExecutor};

//! Core library for the `stresstest` CLI.
//!
//! A run issues a fixed number of HTTP GET requests against one URL with a
//! bounded number in flight, then reports count and min/max/total/average
//! latency per status code plus an overall total. The binary wires these
//! pieces together; the library exposes them for embedding and testing.
pub mod adapters;
pub mod application;
pub mod args;
pub mod config;
pub mod domain;
pub mod error;
pub mod http;
pub mod metrics;
pub mod shutdown;
pub mod sinks;

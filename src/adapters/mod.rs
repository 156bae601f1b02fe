//! Concrete implementations of the application ports.
mod repository;

pub use repository::NoopRepository;

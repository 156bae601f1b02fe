mod app;
mod config;
mod http;
mod repository;
mod sink;
mod validation;

#[cfg(test)]
mod test_support;

pub use app::{AppError, AppResult};
pub use config::ConfigError;
pub use http::HttpError;
pub use repository::RepositoryError;
pub use sink::SinkError;
pub use validation::{ValidationError, ValidationKind};

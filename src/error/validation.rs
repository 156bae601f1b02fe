use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("invalid url, must be in the format http://example.com or https://example.com")]
    InvalidUrl,
    #[error("requests must be greater than zero")]
    RequestsNotPositive,
    #[error("concurrency must be greater than zero")]
    ConcurrencyNotPositive,
    #[error("Missing URL (set --url or provide in config).")]
    MissingUrl,
    #[error("Duration must not be empty.")]
    DurationEmpty,
    #[error("Invalid duration '{value}'.")]
    InvalidDurationFormat { value: String },
    #[error("Invalid duration '{value}': {source}")]
    InvalidDurationNumber {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Duration overflow.")]
    DurationOverflow,
    #[error("Invalid duration unit '{unit}'.")]
    InvalidDurationUnit { unit: String },
    #[error("Duration must be > 0.")]
    DurationZero,
    #[cfg(test)]
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[cfg(test)]
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}

/// Discriminant-only view of a [`ValidationError`], used to compare failures
/// without caring about attached values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationKind {
    InvalidUrl,
    RequestsNotPositive,
    ConcurrencyNotPositive,
    MissingUrl,
    Duration,
    #[cfg(test)]
    TestExpectation,
}

impl ValidationError {
    #[must_use]
    pub const fn kind(&self) -> ValidationKind {
        match self {
            ValidationError::InvalidUrl => ValidationKind::InvalidUrl,
            ValidationError::RequestsNotPositive => ValidationKind::RequestsNotPositive,
            ValidationError::ConcurrencyNotPositive => ValidationKind::ConcurrencyNotPositive,
            ValidationError::MissingUrl => ValidationKind::MissingUrl,
            ValidationError::DurationEmpty
            | ValidationError::InvalidDurationFormat { .. }
            | ValidationError::InvalidDurationNumber { .. }
            | ValidationError::DurationOverflow
            | ValidationError::InvalidDurationUnit { .. }
            | ValidationError::DurationZero => ValidationKind::Duration,
            #[cfg(test)]
            ValidationError::TestExpectation { .. }
            | ValidationError::TestExpectationValue { .. } => ValidationKind::TestExpectation,
        }
    }
}

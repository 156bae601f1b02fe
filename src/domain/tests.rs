use super::*;
use crate::error::{AppError, AppResult, ValidationError, ValidationKind};

fn options(requests: i64, concurrency: i64) -> RunOptions {
    RunOptions {
        requests: Some(requests),
        concurrency: Some(concurrency),
        show_data: false,
    }
}

fn expect_kind(
    result: Result<RunParameters, ValidationError>,
    expected: ValidationKind,
) -> AppResult<()> {
    match result {
        Ok(_) => Err(AppError::validation("Expected validation failure")),
        Err(err) if err.kind() == expected => Ok(()),
        Err(err) => Err(AppError::validation(format!(
            "Unexpected validation error: {}",
            err
        ))),
    }
}

#[test]
fn construct_accepts_valid_params() -> AppResult<()> {
    let params = RunParameters::construct("http://example.com", &options(50, 10))?;
    if params.url() != "http://example.com" {
        return Err(AppError::validation("Unexpected url"));
    }
    if params.requests() != 50 || params.concurrency() != 10 {
        return Err(AppError::validation("Unexpected counts"));
    }
    if params.id().is_empty() {
        return Err(AppError::validation("Expected run id"));
    }
    Ok(())
}

#[test]
fn construct_rejects_invalid_url() -> AppResult<()> {
    expect_kind(
        RunParameters::construct("invalid-url", &options(10, 5)),
        ValidationKind::InvalidUrl,
    )
}

#[test]
fn construct_rejects_non_http_scheme_and_missing_host() -> AppResult<()> {
    expect_kind(
        RunParameters::construct("ftp://example.com", &options(10, 5)),
        ValidationKind::InvalidUrl,
    )?;
    expect_kind(
        RunParameters::construct("http://", &options(10, 5)),
        ValidationKind::InvalidUrl,
    )?;
    expect_kind(
        RunParameters::construct("/relative/path", &options(10, 5)),
        ValidationKind::InvalidUrl,
    )
}

#[test]
fn construct_rejects_negative_requests() -> AppResult<()> {
    expect_kind(
        RunParameters::construct("http://example.com", &options(-1, 5)),
        ValidationKind::RequestsNotPositive,
    )
}

#[test]
fn construct_rejects_zero_requests() -> AppResult<()> {
    expect_kind(
        RunParameters::construct("http://example.com", &options(0, 5)),
        ValidationKind::RequestsNotPositive,
    )
}

#[test]
fn construct_rejects_negative_concurrency() -> AppResult<()> {
    expect_kind(
        RunParameters::construct("http://example.com", &options(10, -1)),
        ValidationKind::ConcurrencyNotPositive,
    )
}

#[test]
fn construct_checks_url_before_counts() -> AppResult<()> {
    expect_kind(
        RunParameters::construct("not-a-url", &options(-1, -1)),
        ValidationKind::InvalidUrl,
    )?;
    expect_kind(
        RunParameters::construct("http://example.com", &options(-1, -1)),
        ValidationKind::RequestsNotPositive,
    )
}

#[test]
fn construct_validation_is_repeatable() -> AppResult<()> {
    for _ in 0..3 {
        expect_kind(
            RunParameters::construct("not-a-url", &options(10, 10)),
            ValidationKind::InvalidUrl,
        )?;
        expect_kind(
            RunParameters::construct("http://example.com", &options(10, 0)),
            ValidationKind::ConcurrencyNotPositive,
        )?;
    }
    Ok(())
}

#[test]
fn construct_clamps_concurrency_to_requests() -> AppResult<()> {
    let params = RunParameters::construct("http://example.com", &options(10, 20))?;
    if params.requests() != 10 {
        return Err(AppError::validation("Unexpected requests"));
    }
    if params.concurrency() != 10 {
        return Err(AppError::validation(format!(
            "Expected clamped concurrency 10, got {}",
            params.concurrency()
        )));
    }
    Ok(())
}

#[test]
fn construct_applies_defaults() -> AppResult<()> {
    let params = RunParameters::construct("https://example.com/health", &RunOptions::default())?;
    if params.requests() != DEFAULT_REQUESTS {
        return Err(AppError::validation("Expected default requests"));
    }
    if params.concurrency() != DEFAULT_CONCURRENCY {
        return Err(AppError::validation("Expected default concurrency"));
    }
    if params.show_data() {
        return Err(AppError::validation("Expected detail capture off"));
    }
    Ok(())
}

#[test]
fn construct_generates_unique_ids() -> AppResult<()> {
    let first = RunParameters::construct("http://example.com", &RunOptions::default())?;
    let second = RunParameters::construct("http://example.com", &RunOptions::default())?;
    if first.id() == second.id() {
        return Err(AppError::validation("Expected distinct run ids"));
    }
    Ok(())
}

#[test]
fn is_valid_url_matches_construct_rules() -> AppResult<()> {
    if !is_valid_url("https://example.com:8443/path?q=1") {
        return Err(AppError::validation("Expected https url to be valid"));
    }
    if is_valid_url("example.com") {
        return Err(AppError::validation("Expected bare host to be invalid"));
    }
    Ok(())
}

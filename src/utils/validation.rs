use crate::utils::error::{RegistrarError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field_name: &str, value: impl ToString, reason: impl Into<String>) -> RegistrarError {
    RegistrarError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<Url> {
    if url_str.is_empty() {
        return Err(invalid(field_name, url_str, "URL cannot be empty"));
    }

    let url = Url::parse(url_str)
        .map_err(|e| invalid(field_name, url_str, format!("Invalid URL format: {}", e)))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(invalid(
            field_name,
            url_str,
            format!("Unsupported URL scheme: {}", scheme),
        )),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(invalid(field_name, path, "Path cannot be empty"));
    }

    if path.contains('\0') {
        return Err(invalid(field_name, path, "Path contains null bytes"));
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(invalid(
            field_name,
            value,
            format!("Value must be at least {}", min_value),
        ));
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(invalid(
            field_name,
            value,
            format!("Value must be between {} and {}", min, max),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("credit_scoring.endpoint", "https://example.com").is_ok());
        assert!(validate_url("credit_scoring.endpoint", "http://localhost:8080/limit").is_ok());
        assert!(validate_url("credit_scoring.endpoint", "").is_err());
        assert!(validate_url("credit_scoring.endpoint", "invalid-url").is_err());
        assert!(validate_url("credit_scoring.endpoint", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("credit_scoring.timeout_seconds", 5, 1).is_ok());
        assert!(validate_positive_number("credit_scoring.timeout_seconds", 0, 1).is_err());
    }

    #[test]
    fn test_validate_path_rejects_null_bytes() {
        assert!(validate_path("user_store.path", "./data/users.jsonl").is_ok());
        assert!(validate_path("user_store.path", "").is_err());
        assert!(validate_path("user_store.path", "users\0.jsonl").is_err());
    }

    #[test]
    fn test_validate_range_reports_field() {
        assert!(validate_range("rules.minimum_age", 21, 0, 150).is_ok());

        let err = validate_range("rules.minimum_age", 200, 0, 150).unwrap_err();
        match err {
            RegistrarError::InvalidConfigValueError { field, value, .. } => {
                assert_eq!(field, "rules.minimum_age");
                assert_eq!(value, "200");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}

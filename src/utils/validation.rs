use crate::utils::error::{ClientError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field_name: &str, value: impl ToString, reason: impl Into<String>) -> ClientError {
    ClientError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// Accepts absolute http(s) URLs that can serve as a base for relative routes.
pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(invalid(field_name, url_str, "URL cannot be empty"));
    }

    let url = Url::parse(url_str)
        .map_err(|e| invalid(field_name, url_str, format!("Invalid URL format: {}", e)))?;

    match url.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(invalid(
                field_name,
                url_str,
                format!("Unsupported URL scheme: {}", scheme),
            ))
        }
    }

    if url.cannot_be_a_base() {
        return Err(invalid(field_name, url_str, "URL cannot be used as a base"));
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

use crate::utils::error::{BookingError, Result};
use std::net::SocketAddr;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str, allowed_schemes: &[&str]) -> Result<()> {
    if url_str.is_empty() {
        return Err(BookingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => {
            let scheme = url.scheme();
            if allowed_schemes.contains(&scheme) {
                Ok(())
            } else {
                Err(BookingError::InvalidConfigValueError {
                    field: field_name.to_string(),
                    value: url_str.to_string(),
                    reason: format!(
                        "Unsupported URL scheme: {}. Allowed schemes: {}",
                        scheme,
                        allowed_schemes.join(", ")
                    ),
                })
            }
        }
        Err(e) => Err(BookingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_bind_addr(field_name: &str, addr: &str) -> Result<()> {
    if addr.parse::<SocketAddr>().is_ok() {
        return Ok(());
    }
    Err(BookingError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: addr.to_string(),
        reason: "Expected a socket address like 0.0.0.0:3000".to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(BookingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| BookingError::MissingConfigError {
        field: field_name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("database.url", "sqlite:inn.db?mode=rwc", &["sqlite"]).is_ok());
        assert!(validate_url("database.url", "", &["sqlite"]).is_err());
        assert!(validate_url("database.url", "not a url", &["sqlite"]).is_err());
        assert!(validate_url("database.url", "postgres://localhost/inn", &["sqlite"]).is_err());
    }

    #[test]
    fn test_validate_bind_addr() {
        assert!(validate_bind_addr("server.bind_addr", "0.0.0.0:3000").is_ok());
        assert!(validate_bind_addr("server.bind_addr", "127.0.0.1:0").is_ok());
        assert!(validate_bind_addr("server.bind_addr", "localhost:3000").is_err());
        assert!(validate_bind_addr("server.bind_addr", "3000").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("pipeline.name", "inn").is_ok());
        assert!(validate_non_empty_string("pipeline.name", "   ").is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some("sqlite:inn.db".to_string());
        let absent: Option<String> = None;
        assert!(validate_required_field("database.url", &present).is_ok());
        assert!(validate_required_field("database.url", &absent).is_err());
    }
}

use crate::utils::error::{CaseMaintenanceError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(CaseMaintenanceError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(CaseMaintenanceError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(CaseMaintenanceError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(CaseMaintenanceError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CaseMaintenanceError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// `${VAR}` left behind by substitution means the environment did not provide it.
pub fn validate_resolved(field_name: &str, value: &str) -> Result<()> {
    if value.contains("${") {
        return Err(CaseMaintenanceError::MissingConfigError {
            field: format!("{} ({})", field_name, value),
        });
    }
    Ok(())
}

/// Case references in the case data store are purely numeric.
pub fn validate_case_id(case_id: &str) -> Result<()> {
    if case_id.is_empty() || !case_id.chars().all(|c| c.is_ascii_digit()) {
        return Err(CaseMaintenanceError::invalid_request(format!(
            "Case id '{}' is not a valid case reference",
            case_id
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("case_data.url", "https://ccd.example.com").is_ok());
        assert!(validate_url("case_data.url", "http://localhost:4452").is_ok());
        assert!(validate_url("case_data.url", "").is_err());
        assert!(validate_url("case_data.url", "invalid-url").is_err());
        assert!(validate_url("case_data.url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("http.timeout_seconds", 5, 1).is_ok());
        assert!(validate_positive_number("http.timeout_seconds", 0, 1).is_err());
    }

    #[test]
    fn test_validate_resolved() {
        assert!(validate_resolved("identity.caseworker.password", "secret").is_ok());
        assert!(matches!(
            validate_resolved("identity.caseworker.password", "${CASEWORKER_PASSWORD}"),
            Err(CaseMaintenanceError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_validate_case_id() {
        assert!(validate_case_id("1547073120300616").is_ok());
        assert!(validate_case_id("someCaseId").is_err());
        assert!(validate_case_id("").is_err());
        assert!(validate_case_id("12a4").is_err());
    }
}

use chrono::NaiveDate;

use crate::server::error::AppError;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a `YYYY-MM-DD` date supplied by a client.
///
/// # Arguments
/// - `value` - Raw date string
/// - `field` - Field name used in the error message
///
/// # Returns
/// - `Ok(NaiveDate)` - Parsed date
/// - `Err(AppError::BadRequest)` - Value is not a valid `YYYY-MM-DD` date
pub fn parse_date(value: &str, field: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| {
        AppError::BadRequest(format!("Invalid {}, expected format YYYY-MM-DD", field))
    })
}

/// Parses an optional date, treating a missing or blank value as absent.
pub fn parse_optional_date(value: Option<&str>, field: &str) -> Result<Option<NaiveDate>, AppError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => parse_date(v, field).map(Some),
        _ => Ok(None),
    }
}

/// Returns the trimmed value, or `BadRequest` if it is missing or blank.
pub fn require_text(value: Option<String>, field: &str) -> Result<String, AppError> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(AppError::BadRequest(format!("{} is required", field))),
    }
}

/// Returns the trimmed value if it is present and non-blank.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Checks that an email has the shape `local@domain.tld`.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    match domain.rsplit_once('.') {
        Some((name, tld)) => !name.is_empty() && !tld.is_empty(),
        None => false,
    }
}

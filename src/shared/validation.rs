//! Field Validators
//!
//! Pure format/presence checks for incoming request fields. Each validator
//! returns a `validator::ValidationError` tagged with a machine code; callers
//! attach the user-facing message.

use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    /// Dotted-quad IPv4 literal, each octet 0-255 in ASCII digits
    static ref IPV4_REGEX: Regex = Regex::new(
        r"^(?:25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9][0-9]|[0-9])(?:\.(?:25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9][0-9]|[0-9])){3}$"
    )
    .expect("valid regex");

    /// Canonical lowercase 8-4-4-4-12 UUID
    static ref UUID_REGEX: Regex =
        Regex::new(r"^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$").expect("valid regex");

    /// ASCII decimal literal without a leading zero
    static ref POSITIVE_INT_REGEX: Regex = Regex::new(r"^[1-9][0-9]*$").expect("valid regex");
}

/// Accepted device status literals
pub const DEVICE_STATUSES: [&str; 2] = ["online", "offline"];

fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}

/// Validates that a name-like field is present and non-empty
pub fn validate_name(value: Option<&str>) -> Result<(), ValidationError> {
    match value {
        Some(name) if !name.is_empty() => Ok(()),
        _ => Err(invalid("name", "value is required")),
    }
}

/// Validates an IPv4 dotted-quad literal
pub fn validate_ipv4(value: Option<&str>) -> Result<(), ValidationError> {
    match value {
        Some(ipv4) if IPV4_REGEX.is_match(ipv4) => Ok(()),
        _ => Err(invalid("ipv4", "value must be a dotted-quad IPv4 address")),
    }
}

/// Validates a canonical lowercase hyphenated UUID
pub fn validate_uuid(value: Option<&str>) -> Result<(), ValidationError> {
    match value {
        Some(uuid) if UUID_REGEX.is_match(uuid) => Ok(()),
        _ => Err(invalid("uuid", "value must be a lowercase hyphenated UUID")),
    }
}

/// Validates a positive decimal integer literal.
///
/// `"01"` is rejected even though it denotes 1, so identifier text stays
/// canonical. Values beyond `i64::MAX` are rejected as well.
pub fn validate_positive_int(value: Option<&str>) -> Result<(), ValidationError> {
    match value {
        Some(int) if POSITIVE_INT_REGEX.is_match(int) && int.parse::<i64>().is_ok() => Ok(()),
        _ => Err(invalid("positive_int", "value must be a positive integer without leading zeros")),
    }
}

/// Validates a device status literal
pub fn validate_status(value: Option<&str>) -> Result<(), ValidationError> {
    match value {
        Some(status) if DEVICE_STATUSES.contains(&status) => Ok(()),
        _ => Err(invalid("status", "value must be one of online|offline")),
    }
}

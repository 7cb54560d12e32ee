//! Quota domain types
//!
//! Account credentials and the usage snapshot produced by one fetch,
//! plus parsing for ADrive's `"<float> GB"` capacity fields.

use serde::{Deserialize, Serialize};

use crate::error::{CheckError, Result};

// ============================================================================
// Credentials
// ============================================================================

/// Account credentials for one check invocation
///
/// Never stored beyond process memory.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Account email address
    pub email: String,
    /// Account password
    pub password: String,
}

impl Credentials {
    /// Create credentials from email and password
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

// ============================================================================
// Usage Snapshot
// ============================================================================

/// A point-in-time snapshot of account disk usage
///
/// Produced once by the usage fetch and never mutated; consumed by the
/// threshold evaluator and the report formatter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageSnapshot {
    /// Total capacity in gigabytes
    pub total_gb: f64,
    /// Used capacity in gigabytes
    pub used_gb: f64,
    /// Available capacity in gigabytes
    pub available_gb: f64,
    /// Percentage of capacity used (0.0 - 100.0)
    pub percent_used: f64,
}

// ============================================================================
// Capacity Parsing
// ============================================================================

/// Parse a capacity field of the form `"<float> GB"`
///
/// Extracts the leading decimal number and requires the `GB` unit
/// suffix to follow it. Anything else is a parse error.
pub fn parse_capacity(raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    let digits_end = trimmed
        .find(|c: char| !c.is_ascii_digit() && c != '.')
        .unwrap_or(trimmed.len());
    let (number, unit) = trimmed.split_at(digits_end);

    if number.is_empty() || unit.trim() != "GB" {
        return Err(CheckError::Parse(format!(
            "Capacity field does not match '<float> GB': {:?}",
            raw
        )));
    }

    number.parse::<f64>().map_err(|_| {
        CheckError::Parse(format!("Invalid capacity number: {:?}", number))
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_capacity() {
        assert_eq!(parse_capacity("12.5 GB").unwrap(), 12.5);
        assert_eq!(parse_capacity("100 GB").unwrap(), 100.0);
        assert_eq!(parse_capacity("0.25 GB").unwrap(), 0.25);
    }

    #[test]
    fn test_parse_capacity_surrounding_whitespace() {
        assert_eq!(parse_capacity(" 8 GB ").unwrap(), 8.0);
    }

    #[test]
    fn test_parse_capacity_malformed() {
        assert!(matches!(parse_capacity("abc"), Err(CheckError::Parse(_))));
        assert!(matches!(parse_capacity(""), Err(CheckError::Parse(_))));
        assert!(matches!(parse_capacity("GB"), Err(CheckError::Parse(_))));
        assert!(matches!(parse_capacity("12.5 MB"), Err(CheckError::Parse(_))));
        assert!(matches!(parse_capacity("12.5"), Err(CheckError::Parse(_))));
    }

    #[test]
    fn test_parse_capacity_bad_number() {
        // Leading run of digits/dots that is not a valid float
        assert!(matches!(parse_capacity("1.2.3 GB"), Err(CheckError::Parse(_))));
    }

    #[test]
    fn test_credentials_new() {
        let creds = Credentials::new("user@example.com", "hunter2");
        assert_eq!(creds.email, "user@example.com");
        assert_eq!(creds.password, "hunter2");
    }
}

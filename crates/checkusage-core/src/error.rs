//! Unified error handling for checkusage-core

use thiserror::Error;

/// Errors that can abort a check invocation
///
/// Every variant is terminal for the current check: there are no
/// retries and no partial results. The plugin maps each variant to a
/// process exit code via [`CheckError::exit_code`].
#[derive(Error, Debug)]
pub enum CheckError {
    /// Pool lookup returned no usable pool host
    #[error("Pool resolution failed: {0}")]
    Resolution(String),

    /// Login response signaled an error; carries the server-provided detail
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Response fields do not match the expected format
    #[error("Parse error: {0}")]
    Parse(String),

    /// Transport failure or timeout
    #[error("Network error: {0}")]
    Network(String),

    /// API returned a non-success HTTP status
    #[error("API error: {0}")]
    Api(String),

    /// Session artifact I/O failed
    #[error("IO error: {0}")]
    Io(String),
}

/// Result type alias for checkusage-core
pub type Result<T> = std::result::Result<T, CheckError>;

impl CheckError {
    /// Plugin exit code for this error
    ///
    /// Authentication failures exit 3; everything else is UNKNOWN (4)
    /// since the account state cannot be determined.
    pub fn exit_code(&self) -> i32 {
        match self {
            CheckError::Auth(_) => 3,
            _ => 4,
        }
    }
}

impl From<std::io::Error> for CheckError {
    fn from(err: std::io::Error) -> Self {
        CheckError::Io(err.to_string())
    }
}

impl From<reqwest::Error> for CheckError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            CheckError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            CheckError::Network("Connection failed".to_string())
        } else if err.is_status() {
            match err.status() {
                Some(status) if status.as_u16() == 401 => {
                    CheckError::Auth("Invalid or expired credentials".to_string())
                }
                Some(status) if status.as_u16() == 403 => {
                    CheckError::Auth("Access forbidden".to_string())
                }
                Some(status) => CheckError::Api(format!("HTTP {}", status)),
                None => CheckError::Network(err.to_string()),
            }
        } else {
            CheckError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for CheckError {
    fn from(err: serde_json::Error) -> Self {
        CheckError::Parse(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: CheckError = io_err.into();
        assert!(matches!(err, CheckError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_error_from_serde() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: CheckError = json_err.into();
        assert!(matches!(err, CheckError::Parse(_)));
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            CheckError::Auth("Invalid credentials".to_string()).to_string(),
            "Authentication failed: Invalid credentials"
        );
        assert_eq!(
            CheckError::Resolution("no pool in response".to_string()).to_string(),
            "Pool resolution failed: no pool in response"
        );
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(CheckError::Auth("bad password".to_string()).exit_code(), 3);
        assert_eq!(CheckError::Resolution("missing".to_string()).exit_code(), 4);
        assert_eq!(CheckError::Parse("bad field".to_string()).exit_code(), 4);
        assert_eq!(CheckError::Network("timeout".to_string()).exit_code(), 4);
    }
}

//! # checkusage-core
//!
//! Core logic for the ADrive disk-usage check plugin.
//!
//! This crate provides:
//! - The ADrive quota API client and session handling (`quota` module)
//! - Threshold evaluation and plugin output rendering (`check` module)
//! - Unified error handling with exit-code mapping (`error` module)
//!
//! One check invocation is strictly linear: resolve the account's pool
//! host, log in, fetch the usage snapshot, log out (best-effort),
//! evaluate the thresholds, render one output line.

pub mod check;
pub mod error;
pub mod quota;

// Re-exports for convenience
pub use check::{evaluate, render, ServiceState, Thresholds};
pub use error::{CheckError, Result};
pub use quota::{AdriveClient, Credentials, Session, UsageSnapshot};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_not_empty() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_end_to_end_warning_scenario() {
        // total=100GB, used=92GB, available=8GB, du=92, warn=90, crit=97
        let usage = UsageSnapshot {
            total_gb: 100.0,
            used_gb: 92.0,
            available_gb: 8.0,
            percent_used: 92.0,
        };
        let thresholds = Thresholds::default();

        let state = evaluate(usage.percent_used, &thresholds);
        assert_eq!(state, ServiceState::Warning);
        assert_eq!(state.exit_code(), 1);

        let line = render(state, &usage, &thresholds);
        assert!(line.contains("WARNING: 8GB Avail of 100GB [92%]"));
    }

    #[test]
    fn test_end_to_end_critical_scenario() {
        // du=98 exceeds both thresholds; the overwrite rule lands on CRITICAL
        let usage = UsageSnapshot {
            total_gb: 100.0,
            used_gb: 98.0,
            available_gb: 2.0,
            percent_used: 98.0,
        };
        let thresholds = Thresholds::default();

        let state = evaluate(usage.percent_used, &thresholds);
        assert_eq!(state, ServiceState::Critical);
        assert_eq!(state.exit_code(), 2);
    }
}

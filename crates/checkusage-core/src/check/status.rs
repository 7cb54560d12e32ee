//! Service state and threshold evaluation

use serde::{Deserialize, Serialize};

// ============================================================================
// Service State
// ============================================================================

/// Tri-state health classification plus UNKNOWN
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ServiceState {
    /// Usage is at or below the warning threshold
    Ok,
    /// Usage is above the warning threshold
    Warning,
    /// Usage is above the critical threshold
    Critical,
    /// The check could not be completed
    Unknown,
}

impl ServiceState {
    /// Process exit code for this state
    ///
    /// UNKNOWN exits 4 (not the conventional 3, which this plugin
    /// reserves for authentication failures).
    pub fn exit_code(&self) -> i32 {
        match self {
            ServiceState::Ok => 0,
            ServiceState::Warning => 1,
            ServiceState::Critical => 2,
            ServiceState::Unknown => 4,
        }
    }
}

impl std::fmt::Display for ServiceState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceState::Ok => write!(f, "OK"),
            ServiceState::Warning => write!(f, "WARNING"),
            ServiceState::Critical => write!(f, "CRITICAL"),
            ServiceState::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

// ============================================================================
// Thresholds
// ============================================================================

/// Warning and critical thresholds, in percent used
///
/// `warn <= crit` is assumed, not enforced; when the caller violates
/// it the evaluation outcome is undefined (see [`evaluate`]).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Percentage at which the check reports WARNING
    pub warn: f64,
    /// Percentage at which the check reports CRITICAL
    pub crit: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            warn: 90.0,
            crit: 97.0,
        }
    }
}

// ============================================================================
// Evaluation
// ============================================================================

/// Map percent-used and thresholds to a service state
///
/// The three comparisons run unconditionally in this order and each
/// match overwrites the previous result. This is deliberately not an
/// if/else-if chain: a value above crit also satisfies the warning
/// comparison, and ends CRITICAL only because the critical comparison
/// runs last. Do not collapse the branches into mutually exclusive
/// ones.
pub fn evaluate(percent_used: f64, thresholds: &Thresholds) -> ServiceState {
    let mut state = ServiceState::Unknown;

    if percent_used <= thresholds.warn {
        state = ServiceState::Ok;
    }
    if percent_used > thresholds.warn {
        state = ServiceState::Warning;
    }
    if percent_used > thresholds.crit {
        state = ServiceState::Critical;
    }

    state
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_ok_below_warn() {
        let thresholds = Thresholds::default();
        assert_eq!(evaluate(0.0, &thresholds), ServiceState::Ok);
        assert_eq!(evaluate(50.0, &thresholds), ServiceState::Ok);
        assert_eq!(evaluate(89.9, &thresholds), ServiceState::Ok);
    }

    #[test]
    fn test_evaluate_ok_at_warn_boundary() {
        let thresholds = Thresholds::default();
        assert_eq!(evaluate(90.0, &thresholds), ServiceState::Ok);
    }

    #[test]
    fn test_evaluate_warning_between_thresholds() {
        let thresholds = Thresholds::default();
        assert_eq!(evaluate(90.1, &thresholds), ServiceState::Warning);
        assert_eq!(evaluate(92.0, &thresholds), ServiceState::Warning);
        assert_eq!(evaluate(97.0, &thresholds), ServiceState::Warning);
    }

    #[test]
    fn test_evaluate_critical_above_crit() {
        let thresholds = Thresholds::default();
        assert_eq!(evaluate(97.1, &thresholds), ServiceState::Critical);
        assert_eq!(evaluate(98.0, &thresholds), ServiceState::Critical);
        assert_eq!(evaluate(100.0, &thresholds), ServiceState::Critical);
    }

    #[test]
    fn test_evaluate_overwrite_ordering() {
        // A value above crit also satisfies the warning comparison; the
        // critical comparison runs last unconditionally and must win.
        let thresholds = Thresholds {
            warn: 90.0,
            crit: 97.0,
        };
        assert_eq!(evaluate(98.0, &thresholds), ServiceState::Critical);
    }

    #[test]
    fn test_evaluate_custom_thresholds() {
        let thresholds = Thresholds {
            warn: 50.0,
            crit: 75.0,
        };
        assert_eq!(evaluate(40.0, &thresholds), ServiceState::Ok);
        assert_eq!(evaluate(60.0, &thresholds), ServiceState::Warning);
        assert_eq!(evaluate(80.0, &thresholds), ServiceState::Critical);
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(ServiceState::Ok.exit_code(), 0);
        assert_eq!(ServiceState::Warning.exit_code(), 1);
        assert_eq!(ServiceState::Critical.exit_code(), 2);
        assert_eq!(ServiceState::Unknown.exit_code(), 4);
    }

    #[test]
    fn test_state_display() {
        assert_eq!(ServiceState::Ok.to_string(), "OK");
        assert_eq!(ServiceState::Warning.to_string(), "WARNING");
        assert_eq!(ServiceState::Critical.to_string(), "CRITICAL");
        assert_eq!(ServiceState::Unknown.to_string(), "UNKNOWN");
    }

    #[test]
    fn test_default_thresholds() {
        let thresholds = Thresholds::default();
        assert_eq!(thresholds.warn, 90.0);
        assert_eq!(thresholds.crit, 97.0);
    }
}

//! Plugin output rendering
//!
//! Produces the single status line in the Nagios plugin convention:
//! human-readable summary, then a `|`-separated performance-data
//! section (`'label'=value;warn;crit;max`) for monitoring dashboards
//! to plot.

use crate::quota::UsageSnapshot;

use super::status::{ServiceState, Thresholds};

/// Render the status line with performance data
///
/// The warn/crit perfdata fields are absolute capacities, derived from
/// the percentage thresholds against total capacity. Numbers go
/// through `f64` Display, so whole values print without a decimal
/// point (`8`, not `8.0`).
pub fn render(state: ServiceState, usage: &UsageSnapshot, thresholds: &Thresholds) -> String {
    let warn_abs = (thresholds.warn / 100.0) * usage.total_gb;
    let crit_abs = (thresholds.crit / 100.0) * usage.total_gb;

    format!(
        "{state}: {avail}GB Avail of {total}GB [{pct}%]|'Total'={total}GB;0;0;{total} 'Used'={used}GB;{warn_abs};{crit_abs};{total}",
        state = state,
        avail = usage.available_gb,
        total = usage.total_gb,
        pct = usage.percent_used,
        used = usage.used_gb,
        warn_abs = warn_abs,
        crit_abs = crit_abs,
    )
}

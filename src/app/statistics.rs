//! Outcome statistics logging.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{OutcomeKind, OutcomeStats};

/// Logs the per-kind outcome counts of a finished run.
pub fn log_outcome_statistics(stats: &OutcomeStats) {
    let total = stats.total();
    if total == 0 {
        return;
    }

    info!("Outcome Counts ({} total):", total);
    for kind in OutcomeKind::iter() {
        let count = stats.get(kind);
        if count > 0 {
            info!("   {}: {}", kind.as_str(), count);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_outcome_statistics_empty() {
        log_outcome_statistics(&OutcomeStats::new());
    }

    #[test]
    fn test_log_outcome_statistics_all_kinds() {
        let mut stats = OutcomeStats::new();
        for kind in OutcomeKind::iter() {
            stats.record(kind);
        }
        log_outcome_statistics(&stats);
    }
}

//! Per-tick metrics for the simulation engine.

use cellsoc_automaton::StepReport;
use cellsoc_core::TickId;

/// Timing and activity metrics collected during a single tick.
///
/// The simulation populates these after each successful `advance()`;
/// callers read them from the most recent tick via `last_metrics()`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TickMetrics {
    /// The tick these metrics describe (0 before the first tick).
    pub tick: TickId,
    /// Wall-clock time for the whole tick, in microseconds.
    pub total_us: u64,
    /// What the automaton did during the tick.
    pub report: StepReport,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = TickMetrics::default();
        assert_eq!(m.tick, TickId(0));
        assert_eq!(m.total_us, 0);
        assert_eq!(m.report, StepReport::default());
    }
}

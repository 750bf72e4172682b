//! Per-tick outcome counters reported by automata.

/// What a single `step()` did to the grid.
///
/// Synchronous models only fill [`cells_changed`](Self::cells_changed);
/// agent-style models also count the actions their actors took. All
/// counters start at zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    /// Slots whose state differs from the previous tick's.
    pub cells_changed: usize,
    /// Actors that moved to an adjacent empty slot.
    pub moves: usize,
    /// Offspring placed into empty slots.
    pub births: usize,
    /// Prey consumed by predators.
    pub meals: usize,
    /// Predators removed for going too long without eating.
    pub starvations: usize,
}

impl StepReport {
    /// `true` if the tick changed nothing, i.e. the grid is at a fixed point.
    pub fn is_quiescent(&self) -> bool {
        self.cells_changed == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_quiescent() {
        assert!(StepReport::default().is_quiescent());
        let r = StepReport {
            cells_changed: 1,
            ..Default::default()
        };
        assert!(!r.is_quiescent());
    }
}

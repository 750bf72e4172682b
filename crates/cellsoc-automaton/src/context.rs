//! Execution context passed to automata during tick execution.

use crate::choice;
use cellsoc_core::TickId;
use rand_chacha::ChaCha8Rng;
use smallvec::SmallVec;

/// Execution context passed to each automaton's `step()` method.
///
/// Carries the simulation-scoped generator so that every random choice in
/// a tick draws from one seeded stream. Two simulations built from the same
/// configuration and seed therefore produce identical runs.
pub struct StepContext<'a> {
    rng: &'a mut ChaCha8Rng,
    tick_id: TickId,
}

impl<'a> StepContext<'a> {
    /// Construct a new step context.
    ///
    /// Typically called by the simulation driver, not by automata directly.
    /// `tick_id` is the tick being produced (the first `advance()` produces
    /// tick 1).
    pub fn new(rng: &'a mut ChaCha8Rng, tick_id: TickId) -> Self {
        Self { rng, tick_id }
    }

    /// The simulation's generator.
    pub fn rng(&mut self) -> &mut ChaCha8Rng {
        self.rng
    }

    /// The tick being produced.
    pub fn tick_id(&self) -> TickId {
        self.tick_id
    }

    /// Remove and return one candidate chosen uniformly at random.
    ///
    /// Returns `None` when `candidates` is empty; see [`choice::take_uniform`].
    pub fn take_uniform<T>(&mut self, candidates: &mut SmallVec<[T; 8]>) -> Option<T> {
        choice::take_uniform(self.rng, candidates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cellsoc_core::Coord;
    use rand::SeedableRng;
    use smallvec::smallvec;

    #[test]
    fn context_exposes_tick_and_rng() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut ctx = StepContext::new(&mut rng, TickId(3));
        assert_eq!(ctx.tick_id(), TickId(3));
        let mut candidates: SmallVec<[Coord; 8]> = smallvec![Coord::new(0, 0)];
        assert_eq!(ctx.take_uniform(&mut candidates), Some(Coord::new(0, 0)));
        assert!(candidates.is_empty());
        assert_eq!(ctx.take_uniform(&mut candidates), None);
    }
}

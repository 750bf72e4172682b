//! Error types raised while advancing a simulation.
//!
//! Construction-time failures (bad dimensions, unknown state codes) live
//! with the crates that validate them; this module covers the tick path.

use crate::id::{Coord, TickId};
use std::error::Error;
use std::fmt;

/// Errors from a single `advance()` call.
///
/// Out-of-bounds neighbour coordinates are never errors; they are filtered
/// by the bounds check. A `StepError` always signals a logic defect or a
/// simulation that has already stopped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepError {
    /// A transition rule reached a state its own branching should have
    /// excluded, such as a random choice over an empty candidate set.
    InvariantViolated {
        /// Name of the model whose rule failed.
        model: String,
        /// The cell being processed when the violation was detected.
        coord: Coord,
        /// What went wrong.
        reason: String,
    },
    /// The simulation stopped after an earlier fatal error and must be
    /// reset before it can advance again.
    Halted {
        /// The tick at which the simulation stopped.
        tick: TickId,
    },
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvariantViolated {
                model,
                coord,
                reason,
            } => write!(f, "{model} invariant violated at {coord}: {reason}"),
            Self::Halted { tick } => write!(f, "simulation halted at tick {tick}"),
        }
    }
}

impl Error for StepError {}

//! Automaton trait and step context for cellsoc simulations.
//!
//! The [`Automaton`] trait is the one capability every model implements:
//! advance a [`Grid`](cellsoc_grid::Grid) by one tick. Two update
//! disciplines are supported:
//!
//! - [`UpdateDiscipline::SnapshotCommit`]: every cell determines its next
//!   state from the prior tick, then all cells commit. Models built on
//!   [`SynchronousRule`] get this for free via [`step_synchronous`].
//! - [`UpdateDiscipline::InPlace`]: cells act one at a time in row-major
//!   order and write straight into the live grid, so later actors see
//!   earlier actors' changes.
//!
//! Randomness reaches rules only through [`StepContext`], which threads one
//! simulation-scoped seeded generator through every call.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod automaton;
pub mod choice;
pub mod context;
pub mod report;
pub mod synchronous;

pub use automaton::{Automaton, StateOf, UpdateDiscipline};
pub use choice::take_uniform;
pub use context::StepContext;
pub use report::StepReport;
pub use synchronous::{step_synchronous, SyncCell, SynchronousRule};

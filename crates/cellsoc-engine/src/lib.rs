//! Simulation lifecycle for cellsoc models.
//!
//! A [`Simulation`] owns one grid and one automaton. It is built from a
//! [`SimulationConfig`] (grid extents plus a sparse map of seed state
//! codes), advances one tick per [`advance()`](Simulation::advance) call,
//! and exposes the grid read-only for rendering.
//!
//! Drivers that pick the model at runtime use the object-safe
//! [`Simulate`] trait through [`build_simulation`].
//!
//! Everything runs on the caller's thread. `advance()` blocks until the
//! tick is complete; there is no cancellation.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod metrics;
pub mod model;
pub mod simulation;

pub use config::{ConfigError, SeedPolicy, SimulationConfig};
pub use metrics::TickMetrics;
pub use model::{build_simulation, ModelSpec, Simulate};
pub use simulation::Simulation;

//! cellsoc: a cellular automata simulation core.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all cellsoc sub-crates. For most users, adding `cellsoc` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use cellsoc::prelude::*;
//!
//! // A glider on a 6x6 torus.
//! let glider = [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)]
//!     .map(|(r, c)| (Coord::new(r, c), 1));
//! let config = SimulationConfig::new(6, 6, glider).with_edge(EdgeBehavior::Wrap);
//! let mut sim = Simulation::new(GameOfLife::conway(), config).unwrap();
//!
//! sim.advance_by(4).unwrap();
//! assert_eq!(sim.grid().count_state(LifeState::Alive), 5);
//! assert_eq!(sim.state_at(Coord::new(3, 3)), Some(LifeState::Alive));
//!
//! // Or pick the model at runtime.
//! let spec = ModelSpec::from_name("percolation").unwrap();
//! let mut dynamic = build_simulation(spec, SimulationConfig::new(4, 4, [])).unwrap();
//! dynamic.advance().unwrap();
//! assert_eq!(dynamic.state_label(Coord::new(0, 0)), Some("BLOCKED"));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `cellsoc-core` | `Coord`, `TickId`, cell traits, `StepError` |
//! | [`space`] | `cellsoc-space` | Edge behavior, neighbourhoods, topology |
//! | [`grid`] | `cellsoc-grid` | The cell arena and snapshots |
//! | [`automaton`] | `cellsoc-automaton` | Automaton trait and update disciplines |
//! | [`models`] | `cellsoc-models` | Game of Life, Percolation, Wa-Tor |
//! | [`engine`] | `cellsoc-engine` | Simulation lifecycle and configuration |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and IDs (`cellsoc-core`).
pub use cellsoc_core as types;

/// Edge behavior, neighbourhood shapes, and topology (`cellsoc-space`).
pub use cellsoc_space as space;

/// The coordinate-indexed cell arena (`cellsoc-grid`).
pub use cellsoc_grid as grid;

/// The [`automaton::Automaton`] trait, step context, and the
/// snapshot-then-commit driver (`cellsoc-automaton`).
pub use cellsoc_automaton as automaton;

/// Reference models (`cellsoc-models`).
pub use cellsoc_models as models;

/// Simulation lifecycle, configuration, and runtime model selection
/// (`cellsoc-engine`).
pub use cellsoc_engine as engine;

/// Common imports for typical cellsoc usage.
///
/// ```rust
/// use cellsoc::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use cellsoc_core::{Cell, CellState, Coord, StepError, TickId};

    // Space
    pub use cellsoc_space::{EdgeBehavior, Neighbourhood, Topology};

    // Grid
    pub use cellsoc_grid::{Grid, GridSnapshot};

    // Automaton
    pub use cellsoc_automaton::{Automaton, StepContext, StepReport, UpdateDiscipline};

    // Models
    pub use cellsoc_models::{
        GameOfLife, LifeRule, LifeState, Percolation, PercolationState, WaTor, WaTorState,
    };

    // Engine
    pub use cellsoc_engine::{
        build_simulation, ConfigError, ModelSpec, SeedPolicy, Simulate, Simulation,
        SimulationConfig, TickMetrics,
    };
}
